use std::cell::Ref;

use cartlist_core::{
    location_key, Composition, Invalidation, Key, MemoryApplier, MutableState, Node, NodeError,
    NodeId,
};

/// Upper bound on passes per [`ComposeTestRule::pump_until_idle`].
const MAX_PUMP_PASSES: usize = 100;

/// Headless harness for exercising compositions in tests.
///
/// Owns a [`Composition`], keeps the installed content around for
/// recomposition and exposes the produced node tree for assertions.
pub struct ComposeTestRule {
    composition: Composition,
    content: Option<Box<dyn FnMut()>>,
    root_key: Key,
}

impl ComposeTestRule {
    pub fn new() -> Self {
        Self {
            composition: Composition::new(),
            content: None,
            root_key: location_key(file!(), line!(), column!()),
        }
    }

    /// Install `content` and perform an initial render.
    pub fn set_content(&mut self, content: impl FnMut() + 'static) -> Result<(), NodeError> {
        self.content = Some(Box::new(content));
        self.render()
    }

    /// Force a recomposition of the installed content.
    pub fn recomposition(&mut self) -> Result<(), NodeError> {
        self.render()
    }

    /// Recompose until no state read by the content is left invalidated.
    /// Returns the number of passes run.
    ///
    /// # Panics
    /// Panics when the content keeps invalidating itself.
    pub fn pump_until_idle(&mut self) -> Result<usize, NodeError> {
        let mut passes = 0;
        while self.composition.should_render() {
            passes += 1;
            if passes > MAX_PUMP_PASSES {
                panic!("pump_until_idle: content still invalid after {MAX_PUMP_PASSES} passes");
            }
            log::trace!("pump_until_idle: pass {passes}");
            self.render()?;
        }
        Ok(passes)
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    pub fn should_render(&self) -> bool {
        self.composition.should_render()
    }

    pub fn invalidation(&self) -> Invalidation {
        self.composition.invalidation()
    }

    /// State bound to this rule's composition, for driving content from tests.
    pub fn mutable_state_of<T: 'static>(&self, initial: T) -> MutableState<T> {
        self.composition.mutable_state_of(initial)
    }

    pub fn applier(&self) -> Ref<'_, MemoryApplier> {
        self.composition.applier()
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.composition.root()
    }

    /// Every node of type `N` in document order.
    pub fn nodes<N: Node + Clone>(&self) -> Vec<N> {
        self.applier().collect::<N>()
    }

    pub fn node_ids<N: Node>(&self) -> Vec<NodeId> {
        self.applier().find_all::<N>()
    }

    pub fn count<N: Node>(&self) -> usize {
        self.node_ids::<N>().len()
    }

    pub fn dump_tree(&self) -> String {
        self.applier().dump_tree()
    }

    pub fn pass_count(&self) -> usize {
        self.composition.pass_count()
    }

    pub fn composition(&mut self) -> &mut Composition {
        &mut self.composition
    }

    fn render(&mut self) -> Result<(), NodeError> {
        if let Some(content) = self.content.as_mut() {
            self.composition.render(self.root_key, &mut **content)?;
        }
        Ok(())
    }
}

impl Default for ComposeTestRule {
    fn default() -> Self {
        Self::new()
    }
}
