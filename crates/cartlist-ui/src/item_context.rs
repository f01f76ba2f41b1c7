//! Per-line context handed to the content composed for each cart line.

#![allow(non_snake_case)]

use std::fmt;
use std::rc::Rc;

use cartlist_core::{compositionLocalOf, CompositionLocal, CompositionLocalProvider};

use crate::callbacks::{QuantityChangeCallback, RemoveCallback};
use crate::item::Item;

/// A cart line together with the operations bound to it.
#[derive(Clone)]
pub struct ItemContext {
    item: Rc<Item>,
    loading: bool,
    on_quantity_change: QuantityChangeCallback,
    on_remove: RemoveCallback,
}

impl ItemContext {
    pub fn new(
        item: Rc<Item>,
        loading: bool,
        on_quantity_change: QuantityChangeCallback,
        on_remove: RemoveCallback,
    ) -> Self {
        Self {
            item,
            loading,
            on_quantity_change,
            on_remove,
        }
    }

    pub fn item(&self) -> &Rc<Item> {
        &self.item
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn change_quantity(&self, value: i64) {
        self.on_quantity_change
            .call(&self.item.unique_id, value, Some(self.item.as_ref()));
    }

    pub fn remove(&self) {
        self.on_remove.call(&self.item.unique_id, Some(self.item.as_ref()));
    }
}

impl fmt::Debug for ItemContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemContext")
            .field("unique_id", &self.item.unique_id)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

/// What an [`ItemContext`] is built from; a change in any part rebuilds it.
pub(crate) struct ContextDeps {
    item: Rc<Item>,
    loading: bool,
    on_quantity_change: QuantityChangeCallback,
    on_remove: RemoveCallback,
}

impl ContextDeps {
    pub(crate) fn new(
        item: &Rc<Item>,
        loading: bool,
        on_quantity_change: &QuantityChangeCallback,
        on_remove: &RemoveCallback,
    ) -> Self {
        Self {
            item: Rc::clone(item),
            loading,
            on_quantity_change: on_quantity_change.clone(),
            on_remove: on_remove.clone(),
        }
    }
}

impl PartialEq for ContextDeps {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.item, &other.item) || self.item == other.item)
            && self.loading == other.loading
            && self.on_quantity_change == other.on_quantity_change
            && self.on_remove == other.on_remove
    }
}

thread_local! {
    static LOCAL_ITEM_CONTEXT: CompositionLocal<Option<Rc<ItemContext>>> =
        compositionLocalOf(|| None);
}

pub fn LocalItemContext() -> CompositionLocal<Option<Rc<ItemContext>>> {
    LOCAL_ITEM_CONTEXT.with(Clone::clone)
}

/// Context of the enclosing cart line, if any.
pub fn use_item_context() -> Option<Rc<ItemContext>> {
    LocalItemContext().current()
}

pub fn ItemContextProvider(context: Rc<ItemContext>, content: impl FnOnce()) {
    CompositionLocalProvider([LocalItemContext().provides(Some(context))], content);
}
