//! Node types emitted by the product list.

#![allow(non_snake_case)]

use cartlist_core::{emit, Node, NodeId};

use crate::messages::MessageValues;
use crate::render_on_view::VisibilityLatch;

/// Block container (the list itself and its banners).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerNode {
    pub element_id: Option<String>,
    pub class_name: Option<String>,
}

impl Node for ContainerNode {
    fn describe(&self) -> String {
        let mut out = String::from("Container");
        if let Some(id) = &self.element_id {
            out.push_str(&format!(" #{id}"));
        }
        if let Some(class) = &self.class_name {
            out.push_str(&format!(" .{class}"));
        }
        out
    }
}

/// Formatted, translatable message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageNode {
    pub message_id: String,
    pub values: MessageValues,
    pub text: String,
}

impl MessageNode {
    pub fn quantity(&self) -> Option<i64> {
        self.values.get("quantity").copied()
    }
}

impl Node for MessageNode {
    fn describe(&self) -> String {
        format!("Message {} {:?}", self.message_id, self.text)
    }
}

/// Keyed fragment holding one group of cart lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub key: String,
    pub len: usize,
}

impl Node for GroupNode {
    fn describe(&self) -> String {
        format!("Group {:?} ({} items)", self.key, self.len)
    }
}

/// Wrapper around the content of one cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemNode {
    pub key: String,
    pub unique_id: String,
    pub class_name: String,
}

impl Node for ItemNode {
    fn describe(&self) -> String {
        format!("Item {:?} .{}", self.key, self.class_name)
    }
}

/// Inert stand-in with no visual footprint, rendered while content is
/// deferred. Carries the latch the host reports visibility to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderNode {
    pub latch: VisibilityLatch,
}

impl PlaceholderNode {
    pub fn new(latch: VisibilityLatch) -> Self {
        Self { latch }
    }
}

impl Node for PlaceholderNode {
    fn describe(&self) -> String {
        format!("Placeholder ({:?})", self.latch.state())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub value: String,
}

impl Node for TextNode {
    fn describe(&self) -> String {
        format!("Text {:?}", self.value)
    }
}

pub fn Text(value: impl Into<String>) -> NodeId {
    emit(
        TextNode {
            value: value.into(),
        },
        || {},
    )
}
