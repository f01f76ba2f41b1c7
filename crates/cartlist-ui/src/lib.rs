//! Shopping-cart product list: lines split by availability, rendered in
//! bounded groups behind a one-way visibility gate.

pub mod callbacks;
pub mod chunk;
pub mod config;
pub mod css_handles;
pub mod error;
pub mod grouping;
pub mod item;
pub mod item_context;
pub mod messages;
pub mod nodes;
pub mod partition;
pub mod props;
pub mod render_on_view;
pub mod widgets;

pub use callbacks::{QuantityChangeCallback, RemoveCallback};
pub use chunk::{chunked, chunks_of, ChunkSize, DEFAULT_CHUNK_SIZE};
pub use config::{ProductListConfig, VisibilityScope};
pub use css_handles::{
    use_css_handles, CssHandles, HandleResolver, LocalHandleResolver, NamespacedHandles,
    CSS_HANDLES,
};
pub use error::ProductListError;
pub use grouping::{group_key, Bucket, Group, ListLayout};
pub use item::{Availability, Item};
pub use item_context::{use_item_context, ItemContext, ItemContextProvider, LocalItemContext};
pub use messages::{
    DefaultMessages, LocalMessageFormatter, MessageFormatter, MessageValues,
    AVAILABLE_ITEMS_MESSAGE, UNAVAILABLE_ITEMS_MESSAGE,
};
pub use nodes::{ContainerNode, GroupNode, ItemNode, MessageNode, PlaceholderNode, Text, TextNode};
pub use partition::{partition, partition_by_availability, AvailabilityPartition};
pub use props::ProductListProps;
pub use render_on_view::{
    use_render_on_view, RenderOnView, RenderOnViewOptions, VisibilityLatch, VisibilityState,
    DEFAULT_VIEW_OFFSET,
};
pub use widgets::*;
