//! Deferred rendering until the list comes near the viewport.
//!
//! The viewport observer itself lives in the host. It finds the
//! [`PlaceholderNode`](crate::nodes::PlaceholderNode)s in the tree and reports
//! their distance from the viewport through the attached [`VisibilityLatch`].

#![allow(non_snake_case)]

use std::fmt;

use cartlist_core::{emit, useState, MutableState, NodeId};

use crate::nodes::PlaceholderNode;

/// Distance in pixels from the viewport at which deferred content renders.
pub const DEFAULT_VIEW_OFFSET: f32 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOnViewOptions {
    /// When false the content counts as viewed from the first pass.
    pub lazy_render: bool,
    pub offset: f32,
}

impl Default for RenderOnViewOptions {
    fn default() -> Self {
        Self {
            lazy_render: true,
            offset: DEFAULT_VIEW_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    NotYetVisible,
    Visible,
}

/// One-way switch from [`VisibilityState::NotYetVisible`] to
/// [`VisibilityState::Visible`]. Nothing resets it.
#[derive(Clone)]
pub struct VisibilityLatch {
    state: MutableState<VisibilityState>,
    offset: f32,
}

impl VisibilityLatch {
    pub fn new(state: MutableState<VisibilityState>, offset: f32) -> Self {
        Self { state, offset }
    }

    pub fn state(&self) -> VisibilityState {
        self.state.get()
    }

    pub fn has_been_viewed(&self) -> bool {
        self.state() == VisibilityState::Visible
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Host report: the placeholder is `distance` pixels away from the
    /// viewport (zero or negative while intersecting). Returns whether this
    /// report fired the latch.
    pub fn report_distance(&self, distance: f32) -> bool {
        if self.has_been_viewed() || distance.is_nan() || distance > self.offset {
            return false;
        }
        log::debug!(
            "visibility latch fired at {distance}px (offset {}px)",
            self.offset
        );
        self.state.set(VisibilityState::Visible)
    }

    /// Host report that the placeholder intersects the viewport.
    pub fn reveal(&self) -> bool {
        self.report_distance(0.0)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl PartialEq for VisibilityLatch {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for VisibilityLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityLatch")
            .field("state", &self.state())
            .field("offset", &self.offset)
            .finish()
    }
}

/// Result of [`use_render_on_view`] for one pass.
#[derive(Debug, Clone)]
pub struct RenderOnView {
    pub has_been_viewed: bool,
    latch: VisibilityLatch,
}

impl RenderOnView {
    pub fn latch(&self) -> &VisibilityLatch {
        &self.latch
    }

    /// Emits the inert stand-in the host observes until the latch fires.
    pub fn Placeholder(&self) -> NodeId {
        emit(PlaceholderNode::new(self.latch.clone()), || {})
    }
}

/// Remembers a visibility latch at the call site.
pub fn use_render_on_view(options: RenderOnViewOptions) -> RenderOnView {
    let state = useState(|| {
        if options.lazy_render {
            VisibilityState::NotYetVisible
        } else {
            VisibilityState::Visible
        }
    });
    let latch = VisibilityLatch::new(state, options.offset);
    RenderOnView {
        has_been_viewed: latch.has_been_viewed(),
        latch,
    }
}
