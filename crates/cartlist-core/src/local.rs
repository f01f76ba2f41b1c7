//! Composition locals: values scoped to a subtree of the composition.

use std::any::Any;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::collections::map::HashMap;
use crate::composer_context::with_composer;

pub(crate) type LocalKey = usize;

static NEXT_LOCAL_KEY: AtomicUsize = AtomicUsize::new(1);

fn next_local_key() -> LocalKey {
    NEXT_LOCAL_KEY.fetch_add(1, Ordering::Relaxed)
}

/// One provider frame on the composer's local stack.
#[derive(Default)]
pub(crate) struct LocalContext {
    pub(crate) values: HashMap<LocalKey, Rc<dyn Any>>,
}

pub struct ProvidedValue {
    key: LocalKey,
    value: Rc<dyn Any>,
}

impl ProvidedValue {
    pub(crate) fn into_entry(self) -> (LocalKey, Rc<dyn Any>) {
        (self.key, self.value)
    }
}

/// Key for a value made available to every composable below a
/// [`CompositionLocalProvider`](crate::CompositionLocalProvider).
#[derive(Clone)]
pub struct CompositionLocal<T: Clone + 'static> {
    key: LocalKey,
    default: Rc<dyn Fn() -> T>,
}

impl<T: Clone + 'static> PartialEq for CompositionLocal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: Clone + 'static> Eq for CompositionLocal<T> {}

impl<T: Clone + 'static> CompositionLocal<T> {
    pub fn provides(&self, value: T) -> ProvidedValue {
        ProvidedValue {
            key: self.key,
            value: Rc::new(value),
        }
    }

    /// Value from the nearest enclosing provider, or the default.
    ///
    /// # Panics
    /// Panics outside of a composition pass.
    pub fn current(&self) -> T {
        with_composer(|composer| composer.read_composition_local(self))
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }

    pub(crate) fn key(&self) -> LocalKey {
        self.key
    }
}

#[allow(non_snake_case)]
pub fn compositionLocalOf<T: Clone + 'static>(
    default: impl Fn() -> T + 'static,
) -> CompositionLocal<T> {
    CompositionLocal {
        key: next_local_key(),
        default: Rc::new(default),
    }
}
