#![allow(non_snake_case)]

use cartlist_core::{caller_key, emit, with_key, NodeId};

use crate::config::VisibilityScope;
use crate::css_handles::{use_css_handles, CssHandles};
use crate::grouping::{Group, ListLayout};
use crate::messages::{AVAILABLE_ITEMS_MESSAGE, UNAVAILABLE_ITEMS_MESSAGE};
use crate::nodes::ContainerNode;
use crate::props::ProductListProps;
use crate::render_on_view::{use_render_on_view, RenderOnView};
use crate::widgets::{
    Banner, BannerSpec, ItemContent, ProductGroup, AVAILABLE_BANNER_CLASSES,
    UNAVAILABLE_BANNER_CLASSES, UNAVAILABLE_ITEMS_ELEMENT_ID,
};

/// Cart lines split into an unavailable block and an available block.
///
/// Emits, inside one container: the unavailable banner (if anything is
/// unavailable), the unavailable groups, the available banner (only when
/// both blocks are non-empty) and the available groups. `content` is composed
/// once per line with that line's [`ItemContext`](crate::ItemContext)
/// provided.
#[track_caller]
pub fn ProductList(props: &ProductListProps, content: ItemContent) -> NodeId {
    with_key(&caller_key(), || {
        if let Err(err) = props.config.validate() {
            log::warn!("product list config: {err}");
        }
        let handles = use_css_handles();
        let layout = ListLayout::plan(&props.items, props.config.chunk_size);
        let list_gate = match props.config.visibility_scope {
            VisibilityScope::List => Some(use_render_on_view(props.config.view)),
            VisibilityScope::Group => None,
        };
        log::trace!(
            "product list: {} items in {} groups, viewed={:?}",
            props.items.len(),
            layout.group_count(),
            list_gate.as_ref().map(|gate| gate.has_been_viewed)
        );

        emit(ContainerNode::default(), || {
            if let Some(quantity) = layout.unavailable_banner {
                Banner(BannerSpec {
                    element_id: Some(UNAVAILABLE_ITEMS_ELEMENT_ID),
                    handle_class: &handles.product_list_unavailable_items_message,
                    classes: UNAVAILABLE_BANNER_CLASSES,
                    message_id: UNAVAILABLE_ITEMS_MESSAGE,
                    quantity,
                });
            }
            compose_groups(
                &layout.unavailable_groups,
                props,
                list_gate.as_ref(),
                &handles,
                &content,
            );
            if let Some(quantity) = layout.available_banner {
                Banner(BannerSpec {
                    element_id: None,
                    handle_class: &handles.product_list_available_items_message,
                    classes: AVAILABLE_BANNER_CLASSES,
                    message_id: AVAILABLE_ITEMS_MESSAGE,
                    quantity,
                });
            }
            compose_groups(
                &layout.available_groups,
                props,
                list_gate.as_ref(),
                &handles,
                &content,
            );
        })
    })
}

fn compose_groups(
    groups: &[Group],
    props: &ProductListProps,
    gate: Option<&RenderOnView>,
    handles: &CssHandles,
    content: &ItemContent,
) {
    for group in groups {
        with_key(group.key.as_str(), || {
            ProductGroup(props, group, gate, handles, content);
        });
    }
}
