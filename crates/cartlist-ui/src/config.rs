use crate::chunk::ChunkSize;
use crate::error::ProductListError;
use crate::render_on_view::RenderOnViewOptions;

/// Which part of the list a single visibility latch gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityScope {
    /// One latch per list; every group waits for the same signal.
    #[default]
    List,
    /// One latch per group; groups reveal independently.
    Group,
}

/// Static tuning of a product list. Defaults: groups of 10, render once
/// within 900px of the viewport, one latch per list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProductListConfig {
    pub chunk_size: ChunkSize,
    pub view: RenderOnViewOptions,
    pub visibility_scope: VisibilityScope,
}

impl ProductListConfig {
    pub fn with_chunk_size(mut self, size: usize) -> Result<Self, ProductListError> {
        self.chunk_size = ChunkSize::new(size)?;
        Ok(self)
    }

    pub fn with_view_offset(mut self, offset: f32) -> Result<Self, ProductListError> {
        self.view.offset = offset;
        self.validate()?;
        Ok(self)
    }

    pub fn with_lazy_render(mut self, lazy_render: bool) -> Self {
        self.view.lazy_render = lazy_render;
        self
    }

    pub fn with_visibility_scope(mut self, scope: VisibilityScope) -> Self {
        self.visibility_scope = scope;
        self
    }

    pub fn validate(&self) -> Result<(), ProductListError> {
        let offset = self.view.offset;
        if !offset.is_finite() || offset < 0.0 {
            return Err(ProductListError::invalid_argument(
                "view_offset",
                format!("must be a finite, non-negative pixel distance, got {offset}"),
            ));
        }
        Ok(())
    }
}
