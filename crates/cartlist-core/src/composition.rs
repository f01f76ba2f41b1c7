use std::cell::Ref;

use crate::applier::{MemoryApplier, NodeError, NodeId};
use crate::composer::Composer;
use crate::composer_context;
use crate::state::{Invalidation, MutableState};
use crate::Key;

/// Owns a composer and the node tree it produces.
pub struct Composition {
    composer: Composer,
    passes: usize,
}

impl Composition {
    pub fn new() -> Self {
        Self {
            composer: Composer::new(Invalidation::new()),
            passes: 0,
        }
    }

    /// Runs one full composition pass of `content` under the root group `key`.
    ///
    /// The node tree is rebuilt from scratch; remembered slots survive for
    /// every group visited again and are dropped for the others.
    pub fn render(&mut self, key: Key, content: &mut dyn FnMut()) -> Result<(), NodeError> {
        self.composer.invalidation().take();
        self.composer.begin_pass(key);
        {
            let _scope = composer_context::enter(&self.composer);
            content();
        }
        let disposed = self.composer.end_pass()?;
        self.passes += 1;
        log::trace!(
            "composition pass {} produced {} nodes, disposed {} slots, {} live",
            self.passes,
            self.composer.applier().len(),
            disposed,
            self.composer.slot_count()
        );
        Ok(())
    }

    /// Whether state read by the last pass changed since it ran.
    pub fn should_render(&self) -> bool {
        self.composer.invalidation().is_invalid()
    }

    pub fn invalidation(&self) -> Invalidation {
        self.composer.invalidation()
    }

    /// Creates state bound to this composition from outside a pass.
    pub fn mutable_state_of<T: 'static>(&self, initial: T) -> MutableState<T> {
        self.composer.mutable_state_of(initial)
    }

    pub fn applier(&self) -> Ref<'_, MemoryApplier> {
        self.composer.applier()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.applier().roots().first().copied()
    }

    pub fn pass_count(&self) -> usize {
        self.passes
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}
