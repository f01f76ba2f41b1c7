//! Banner messages.

#![allow(non_snake_case)]

use std::rc::Rc;

use cartlist_core::{compositionLocalOf, CompositionLocal};
use indexmap::IndexMap;

pub const UNAVAILABLE_ITEMS_MESSAGE: &str = "store/product-list.unavailableItems";
pub const AVAILABLE_ITEMS_MESSAGE: &str = "store/product-list.availableItems";

/// Named numeric arguments of a message, in insertion order.
pub type MessageValues = IndexMap<String, i64>;

pub fn quantity_values(quantity: usize) -> MessageValues {
    let mut values = MessageValues::new();
    values.insert("quantity".to_string(), quantity as i64);
    values
}

pub trait MessageFormatter {
    fn format(&self, id: &str, values: &MessageValues) -> String;
}

/// Built-in English catalogue. Messages pick their `one` form when the
/// `quantity` argument is exactly 1; unknown ids render as the id itself.
#[derive(Debug, Clone, Default)]
pub struct DefaultMessages {
    overrides: IndexMap<String, (String, String)>,
}

impl DefaultMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the `one`/`other` templates for `id`.
    pub fn with_message(
        mut self,
        id: impl Into<String>,
        one: impl Into<String>,
        other: impl Into<String>,
    ) -> Self {
        self.overrides.insert(id.into(), (one.into(), other.into()));
        self
    }

    fn templates(&self, id: &str) -> Option<(&str, &str)> {
        if let Some((one, other)) = self.overrides.get(id) {
            return Some((one.as_str(), other.as_str()));
        }
        match id {
            UNAVAILABLE_ITEMS_MESSAGE => Some(("1 unavailable item", "{quantity} unavailable items")),
            AVAILABLE_ITEMS_MESSAGE => Some(("1 available item", "{quantity} available items")),
            _ => None,
        }
    }
}

impl MessageFormatter for DefaultMessages {
    fn format(&self, id: &str, values: &MessageValues) -> String {
        let Some((one, other)) = self.templates(id) else {
            log::debug!("no message for {id}; rendering the id");
            return id.to_string();
        };
        let template = if values.get("quantity") == Some(&1) {
            one
        } else {
            other
        };
        values
            .iter()
            .fold(template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), &value.to_string())
            })
    }
}

thread_local! {
    static LOCAL_MESSAGE_FORMATTER: CompositionLocal<Rc<dyn MessageFormatter>> =
        compositionLocalOf(|| Rc::new(DefaultMessages::new()) as Rc<dyn MessageFormatter>);
}

pub fn LocalMessageFormatter() -> CompositionLocal<Rc<dyn MessageFormatter>> {
    LOCAL_MESSAGE_FORMATTER.with(Clone::clone)
}
