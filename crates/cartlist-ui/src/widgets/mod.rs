//! Product list composables

pub mod banner;
pub mod item_context_wrapper;
pub mod product_group;
pub mod product_list;

pub use banner::*;
pub use item_context_wrapper::*;
pub use product_group::*;
pub use product_list::*;

use std::rc::Rc;

/// Content composed once per cart line, inside that line's item context.
pub type ItemContent = Rc<dyn Fn()>;
