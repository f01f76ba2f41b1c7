//! Render plan for a cart: banners and bounded groups in display order.

use std::rc::Rc;

use crate::chunk::{chunks_of, ChunkSize};
use crate::item::Item;
use crate::partition::{partition_by_availability, AvailabilityPartition};

pub const GROUP_KEY_SEPARATOR: char = '#';

/// Render identity of a group: every display id prefixed by `#`, in order.
pub fn group_key(items: &[Rc<Item>]) -> String {
    items.iter().fold(String::new(), |mut key, item| {
        key.push(GROUP_KEY_SEPARATOR);
        key.push_str(&item.id);
        key
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Unavailable,
    Available,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    pub bucket: Bucket,
    pub items: Vec<Rc<Item>>,
}

impl Group {
    fn new(bucket: Bucket, items: &[Rc<Item>]) -> Self {
        Self {
            key: group_key(items),
            bucket,
            items: items.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything the list renders, derived from the item sequence alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLayout {
    pub unavailable_banner: Option<usize>,
    pub unavailable_groups: Vec<Group>,
    pub available_banner: Option<usize>,
    pub available_groups: Vec<Group>,
}

impl ListLayout {
    pub fn plan(items: &[Rc<Item>], chunk_size: ChunkSize) -> Self {
        let split = partition_by_availability(items);
        Self::from_partition(&split, chunk_size)
    }

    pub fn from_partition(split: &AvailabilityPartition, chunk_size: ChunkSize) -> Self {
        let groups = |bucket, items: &[Rc<Item>]| {
            chunks_of(items, chunk_size)
                .map(|chunk| Group::new(bucket, chunk))
                .collect::<Vec<_>>()
        };
        Self {
            unavailable_banner: split.unavailable_banner(),
            unavailable_groups: groups(Bucket::Unavailable, &split.unavailable),
            available_banner: split.available_banner(),
            available_groups: groups(Bucket::Available, &split.available),
        }
    }

    /// Groups in render order: every unavailable group before any available one.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.unavailable_groups
            .iter()
            .chain(self.available_groups.iter())
    }

    pub fn group_count(&self) -> usize {
        self.unavailable_groups.len() + self.available_groups.len()
    }
}
