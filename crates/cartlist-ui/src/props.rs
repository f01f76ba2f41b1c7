use std::rc::Rc;

use crate::callbacks::{QuantityChangeCallback, RemoveCallback};
use crate::config::ProductListConfig;
use crate::item::Item;

/// Inputs of a [`ProductList`](crate::ProductList).
///
/// `render_on_view` starts out `true`; callbacks start out as no-ops.
#[derive(Debug, Clone)]
pub struct ProductListProps {
    pub items: Vec<Rc<Item>>,
    pub loading: bool,
    pub on_quantity_change: QuantityChangeCallback,
    pub on_remove: RemoveCallback,
    pub render_on_view: bool,
    pub config: ProductListConfig,
}

impl ProductListProps {
    pub fn new(items: Vec<Rc<Item>>) -> Self {
        Self {
            items,
            loading: false,
            on_quantity_change: QuantityChangeCallback::noop(),
            on_remove: RemoveCallback::noop(),
            render_on_view: true,
            config: ProductListConfig::default(),
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self::new(items.into_iter().map(Rc::new).collect())
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn on_quantity_change(mut self, callback: QuantityChangeCallback) -> Self {
        self.on_quantity_change = callback;
        self
    }

    pub fn on_remove(mut self, callback: RemoveCallback) -> Self {
        self.on_remove = callback;
        self
    }

    pub fn render_on_view(mut self, render_on_view: bool) -> Self {
        self.render_on_view = render_on_view;
        self
    }

    pub fn config(mut self, config: ProductListConfig) -> Self {
        self.config = config;
        self
    }
}
