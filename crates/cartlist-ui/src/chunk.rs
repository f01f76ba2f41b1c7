use std::num::NonZeroUsize;
use std::slice::Chunks;

use crate::error::ProductListError;

pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// A validated, strictly positive chunk length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    pub const DEFAULT: ChunkSize = match NonZeroUsize::new(DEFAULT_CHUNK_SIZE) {
        Some(size) => ChunkSize(size),
        None => panic!("default chunk size must be positive"),
    };

    pub fn new(size: usize) -> Result<Self, ProductListError> {
        NonZeroUsize::new(size).map(ChunkSize).ok_or_else(|| {
            ProductListError::invalid_argument("chunk_size", "must be greater than zero")
        })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for ChunkSize {
    type Error = ProductListError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Lazily splits `items` into runs of `size`; only the last run may be shorter.
/// An empty slice yields no runs at all.
pub fn chunks_of<T>(items: &[T], size: ChunkSize) -> Chunks<'_, T> {
    items.chunks(size.get())
}

/// Like [`chunks_of`], validating `size` first.
pub fn chunked<T>(items: &[T], size: usize) -> Result<Chunks<'_, T>, ProductListError> {
    Ok(chunks_of(items, ChunkSize::new(size)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_items_zero_chunks() {
        let items: [u8; 0] = [];
        assert_eq!(chunked(&items, 10).unwrap().count(), 0);
    }

    #[test]
    fn twenty_three_items_size_ten() {
        let items: Vec<u32> = (0..23).collect();
        let chunks: Vec<&[u32]> = chunked(&items, 10).unwrap().collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 10);
        assert_eq!(chunks[1].len(), 10);
        assert_eq!(chunks[2], &[20, 21, 22]);
    }

    #[test]
    fn chunk_lengths_sum_to_input_length() {
        for len in 0..45usize {
            let items: Vec<usize> = (0..len).collect();
            let chunks: Vec<&[usize]> = chunks_of(&items, ChunkSize::DEFAULT).collect();
            assert_eq!(chunks.iter().map(|c| c.len()).sum::<usize>(), len);
            assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= 10));
            if let Some((last, full)) = chunks.split_last() {
                assert!(full.iter().all(|c| c.len() == 10));
                assert!(!last.is_empty());
            }
            let flattened: Vec<usize> = chunks.concat();
            assert_eq!(flattened, items);
        }
    }

    #[test]
    fn accepts_any_positive_size() {
        let items = ["a", "b", "c"];
        assert_eq!(chunked(&items, 1).unwrap().count(), 3);
        assert_eq!(chunked(&items, 2).unwrap().count(), 2);
        assert_eq!(chunked(&items, 99).unwrap().count(), 1);
    }

    #[test]
    fn zero_size_is_invalid_argument() {
        let items = [1, 2, 3];
        let err = chunked(&items, 0).unwrap_err();
        assert!(matches!(
            err,
            ProductListError::InvalidArgument { name: "chunk_size", .. }
        ));
        assert_eq!(ChunkSize::try_from(0usize).unwrap_err(), err);
    }
}
