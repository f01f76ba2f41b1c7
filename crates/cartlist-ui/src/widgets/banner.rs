//! Availability banners shown between the item blocks.

#![allow(non_snake_case)]

use cartlist_core::{emit, NodeId};

use crate::messages::{quantity_values, LocalMessageFormatter};
use crate::nodes::{ContainerNode, MessageNode};

pub const UNAVAILABLE_ITEMS_ELEMENT_ID: &str = "unavailable-items";
pub const UNAVAILABLE_BANNER_CLASSES: &str =
    "c-muted-1 bb b--muted-4 fw5 pv5 pl5 pl6-m pl0-l t-heading-5-l";
pub const AVAILABLE_BANNER_CLASSES: &str =
    "c-muted-1 bb b--muted-4 fw5 mt7 pv5 pl5 pl6-m pl0-l t-heading-5-l";

pub struct BannerSpec<'a> {
    pub element_id: Option<&'a str>,
    pub handle_class: &'a str,
    pub classes: &'a str,
    pub message_id: &'a str,
    pub quantity: usize,
}

/// A banner container holding one formatted `{quantity}` message.
pub fn Banner(spec: BannerSpec<'_>) -> NodeId {
    let formatter = LocalMessageFormatter().current();
    let values = quantity_values(spec.quantity);
    let text = formatter.format(spec.message_id, &values);
    emit(
        ContainerNode {
            element_id: spec.element_id.map(str::to_string),
            class_name: Some(format!("{} {}", spec.handle_class, spec.classes)),
        },
        || {
            emit(
                MessageNode {
                    message_id: spec.message_id.to_string(),
                    values,
                    text,
                },
                || {},
            );
        },
    )
}
