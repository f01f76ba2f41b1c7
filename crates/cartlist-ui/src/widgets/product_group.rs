#![allow(non_snake_case)]

use cartlist_core::{caller_key, emit, with_key, NodeId};

use crate::css_handles::CssHandles;
use crate::grouping::Group;
use crate::nodes::GroupNode;
use crate::props::ProductListProps;
use crate::render_on_view::{use_render_on_view, RenderOnView};
use crate::widgets::{ItemContextWrapper, ItemContent};

/// One bounded group of cart lines.
///
/// `gate` is the list-wide visibility gate; without one the group remembers
/// its own. While `render_on_view` is set and the gate has not fired (or
/// the group is empty) only a placeholder is emitted.
#[track_caller]
pub fn ProductGroup(
    props: &ProductListProps,
    group: &Group,
    gate: Option<&RenderOnView>,
    handles: &CssHandles,
    content: &ItemContent,
) -> NodeId {
    with_key(&caller_key(), || {
        let own_gate;
        let gate = match gate {
            Some(gate) => gate,
            None => {
                own_gate = use_render_on_view(props.config.view);
                &own_gate
            }
        };

        emit(
            GroupNode {
                key: group.key.clone(),
                len: group.len(),
            },
            || {
                if props.render_on_view && (!gate.has_been_viewed || group.is_empty()) {
                    gate.Placeholder();
                    return;
                }
                for item in &group.items {
                    with_key(item.render_key().as_str(), || {
                        ItemContextWrapper(
                            item,
                            props.loading,
                            &props.on_quantity_change,
                            &props.on_remove,
                            &handles.product_list_item,
                            content,
                        );
                    });
                }
            },
        )
    })
}
