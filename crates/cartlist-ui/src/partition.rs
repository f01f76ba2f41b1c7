//! Splitting cart lines by availability.

use std::rc::Rc;

use crate::item::Item;

/// Splits `items` into those matching `predicate` and the rest.
///
/// Both outputs keep the input order and every input lands in exactly one
/// of them.
pub fn partition<T: Clone>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> (Vec<T>, Vec<T>) {
    items.iter().fold(
        (Vec::new(), Vec::new()),
        |(mut matching, mut rest), item| {
            if predicate(item) {
                matching.push(item.clone());
            } else {
                rest.push(item.clone());
            }
            (matching, rest)
        },
    )
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityPartition {
    pub available: Vec<Rc<Item>>,
    pub unavailable: Vec<Rc<Item>>,
}

impl AvailabilityPartition {
    pub fn len(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Quantity for the "unavailable items" banner, shown whenever anything
    /// is unavailable.
    pub fn unavailable_banner(&self) -> Option<usize> {
        (!self.unavailable.is_empty()).then_some(self.unavailable.len())
    }

    /// Quantity for the "available items" banner, shown only when both
    /// buckets have lines.
    pub fn available_banner(&self) -> Option<usize> {
        (!self.unavailable.is_empty() && !self.available.is_empty())
            .then_some(self.available.len())
    }
}

pub fn partition_by_availability(items: &[Rc<Item>]) -> AvailabilityPartition {
    let (available, unavailable) = partition(items, |item| item.is_available());
    AvailabilityPartition {
        available,
        unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Availability;

    fn item(id: &str, availability: Availability) -> Rc<Item> {
        Rc::new(Item::new(format!("u-{id}"), id, 100, availability))
    }

    fn ids(items: &[Rc<Item>]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn keeps_relative_order_in_both_buckets() {
        let items = vec![
            item("a", Availability::Available),
            item("b", Availability::WithoutStock),
            item("c", Availability::Available),
            item("d", Availability::Other("unknown".into())),
            item("e", Availability::CannotBeDelivered),
            item("f", Availability::Available),
        ];

        let split = partition_by_availability(&items);

        assert_eq!(ids(&split.available), vec!["a", "c", "f"]);
        assert_eq!(ids(&split.unavailable), vec!["b", "d", "e"]);
        assert_eq!(split.len(), items.len());
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        let split = partition_by_availability(&[]);
        assert!(split.is_empty());
        assert_eq!(split.unavailable_banner(), None);
        assert_eq!(split.available_banner(), None);
    }

    #[test]
    fn generic_partition_is_complete() {
        let numbers: Vec<u32> = (0..17).collect();
        let (even, odd) = partition(&numbers, |n| n % 2 == 0);
        assert_eq!(even.len() + odd.len(), numbers.len());
        assert!(even.windows(2).all(|w| w[0] < w[1]));
        assert!(odd.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn banner_rules() {
        let only_unavailable = partition_by_availability(&[
            item("a", Availability::WithoutStock),
            item("b", Availability::NullPrice),
        ]);
        assert_eq!(only_unavailable.unavailable_banner(), Some(2));
        assert_eq!(only_unavailable.available_banner(), None);

        let only_available = partition_by_availability(&[item("a", Availability::Available)]);
        assert_eq!(only_available.unavailable_banner(), None);
        assert_eq!(only_available.available_banner(), None);

        let mixed = partition_by_availability(&[
            item("a", Availability::Available),
            item("b", Availability::WithoutPrice),
        ]);
        assert_eq!(mixed.unavailable_banner(), Some(1));
        assert_eq!(mixed.available_banner(), Some(1));
    }
}
