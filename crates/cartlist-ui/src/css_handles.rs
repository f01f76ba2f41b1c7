//! Theme hooks. Handle names are a public contract with store themes and
//! must not change.

#![allow(non_snake_case)]

use std::rc::Rc;

use cartlist_core::{compositionLocalOf, CompositionLocal};

pub const PRODUCT_LIST_ITEM: &str = "productListItem";
pub const PRODUCT_LIST_UNAVAILABLE_ITEMS_MESSAGE: &str = "productListUnavailableItemsMessage";
pub const PRODUCT_LIST_AVAILABLE_ITEMS_MESSAGE: &str = "productListAvailableItemsMessage";

pub const CSS_HANDLES: [&str; 3] = [
    PRODUCT_LIST_ITEM,
    PRODUCT_LIST_UNAVAILABLE_ITEMS_MESSAGE,
    PRODUCT_LIST_AVAILABLE_ITEMS_MESSAGE,
];

/// Maps a handle name to the class name emitted into the tree.
pub trait HandleResolver {
    fn resolve(&self, handle: &str) -> String;
}

/// `{namespace}-{handle}`, the scheme store themes target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacedHandles {
    namespace: String,
}

impl NamespacedHandles {
    pub const DEFAULT_NAMESPACE: &'static str = "vtex-product-list-0-x";

    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for NamespacedHandles {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMESPACE)
    }
}

impl HandleResolver for NamespacedHandles {
    fn resolve(&self, handle: &str) -> String {
        format!("{}-{handle}", self.namespace)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssHandles {
    pub product_list_item: String,
    pub product_list_unavailable_items_message: String,
    pub product_list_available_items_message: String,
}

impl CssHandles {
    pub fn resolve(resolver: &dyn HandleResolver) -> Self {
        Self {
            product_list_item: resolver.resolve(PRODUCT_LIST_ITEM),
            product_list_unavailable_items_message: resolver
                .resolve(PRODUCT_LIST_UNAVAILABLE_ITEMS_MESSAGE),
            product_list_available_items_message: resolver
                .resolve(PRODUCT_LIST_AVAILABLE_ITEMS_MESSAGE),
        }
    }
}

thread_local! {
    static LOCAL_HANDLE_RESOLVER: CompositionLocal<Rc<dyn HandleResolver>> =
        compositionLocalOf(|| Rc::new(NamespacedHandles::default()) as Rc<dyn HandleResolver>);
}

pub fn LocalHandleResolver() -> CompositionLocal<Rc<dyn HandleResolver>> {
    LOCAL_HANDLE_RESOLVER.with(Clone::clone)
}

pub fn use_css_handles() -> CssHandles {
    CssHandles::resolve(&*LocalHandleResolver().current())
}
