use std::hash::{Hash, Hasher};

use crate::Key;

#[cfg(feature = "std-hash")]
pub mod default {
    pub use std::collections::hash_map::DefaultHasher;

    #[inline]
    pub fn new() -> DefaultHasher {
        DefaultHasher::new()
    }
}

#[cfg(not(feature = "std-hash"))]
pub mod default {
    // fast branch
    pub use ahash::AHasher as DefaultHasher;

    #[inline]
    pub fn new() -> DefaultHasher {
        DefaultHasher::default()
    }
}

/// Hashes an arbitrary key into a group [`Key`].
pub fn hash_key<K: Hash + ?Sized>(key: &K) -> Key {
    let mut hasher = default::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Derives the path of a child group from its parent path, its own key and
/// how many siblings with the same key were opened before it.
pub(crate) fn child_path(parent: Key, key: Key, occurrence: usize) -> Key {
    let mut hasher = default::new();
    parent.hash(&mut hasher);
    key.hash(&mut hasher);
    occurrence.hash(&mut hasher);
    hasher.finish()
}
