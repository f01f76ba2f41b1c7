#![allow(non_snake_case)]

use std::rc::Rc;

use cartlist_core::{caller_key, emit, remember_keyed, with_key, NodeId};

use crate::callbacks::{QuantityChangeCallback, RemoveCallback};
use crate::item::Item;
use crate::item_context::{ContextDeps, ItemContext, ItemContextProvider};
use crate::nodes::ItemNode;
use crate::widgets::ItemContent;

/// Composes `content` for one cart line with that line's context provided.
///
/// The context is remembered: it is rebuilt only when the item, the loading
/// flag or either callback changes, so descendants can rely on its identity.
#[track_caller]
pub fn ItemContextWrapper(
    item: &Rc<Item>,
    loading: bool,
    on_quantity_change: &QuantityChangeCallback,
    on_remove: &RemoveCallback,
    class_name: &str,
    content: &ItemContent,
) -> NodeId {
    with_key(&caller_key(), || {
        let context = remember_keyed(
            ContextDeps::new(item, loading, on_quantity_change, on_remove),
            || {
                ItemContext::new(
                    Rc::clone(item),
                    loading,
                    on_quantity_change.clone(),
                    on_remove.clone(),
                )
            },
        );
        emit(
            ItemNode {
                key: item.render_key(),
                unique_id: item.unique_id.clone(),
                class_name: class_name.to_string(),
            },
            || ItemContextProvider(context, || content()),
        )
    })
}
