#![doc = r"Composition runtime for cartlist: keyed groups, remembered slots, composition locals and an in-memory node tree."]

pub extern crate self as cartlist_core;

pub mod applier;
pub mod collections;
mod composer;
pub mod composer_context;
mod composition;
pub mod hash;
mod local;
pub mod owned;
mod state;

use std::hash::Hash;
use std::rc::Rc;

pub use applier::{MemoryApplier, Node, NodeError, NodeId};
pub use composer::Composer;
pub use composer_context::with_composer as with_current_composer;
pub use composition::Composition;
pub use hash::hash_key;
pub use local::{compositionLocalOf, CompositionLocal, ProvidedValue};
pub use owned::Owned;
pub use state::{Invalidation, MutableState};

pub type Key = u64;

/// Composes `content` inside a group identified by `key`.
pub fn with_key<K: Hash + ?Sized, R>(key: &K, content: impl FnOnce() -> R) -> R {
    with_current_composer(|composer| composer.with_key(key, |_| content()))
}

pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Owned<T> {
    with_current_composer(|composer| composer.remember(init))
}

/// Remembers `compute()` until `deps` changes.
///
/// Two passes with equal dependencies return the same `Rc`.
pub fn remember_keyed<D, T>(deps: D, compute: impl FnOnce() -> T) -> Rc<T>
where
    D: PartialEq + 'static,
    T: 'static,
{
    with_current_composer(|composer| composer.remember_keyed(deps, compute))
}

#[allow(non_snake_case)]
pub fn mutableStateOf<T: 'static>(initial: T) -> MutableState<T> {
    with_current_composer(|composer| composer.mutable_state_of(initial))
}

#[allow(non_snake_case)]
pub fn useState<T: 'static>(init: impl FnOnce() -> T) -> MutableState<T> {
    remember(|| mutableStateOf(init())).with(|state| state.clone())
}

/// Emits `node` under the current parent; `content` composes its children.
pub fn emit<N: Node>(node: N, content: impl FnOnce()) -> NodeId {
    with_current_composer(|composer| composer.emit(Box::new(node), content))
}

#[allow(non_snake_case)]
pub fn CompositionLocalProvider(
    values: impl IntoIterator<Item = ProvidedValue>,
    content: impl FnOnce(),
) {
    with_current_composer(|composer| {
        let provided: Vec<ProvidedValue> = values.into_iter().collect();
        composer.with_composition_locals(provided, |_| content());
    })
}

pub fn location_key(file: &str, line: u32, column: u32) -> Key {
    let base = file.as_ptr() as u64;
    base.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ ((line as u64) << 32) ^ (column as u64)
}

/// Key of the place a `#[track_caller]` composable was called from.
///
/// Composables that remember state open a group under this key, so two call
/// sites in one parent never trade slots when one of them stops composing.
#[track_caller]
pub fn caller_key() -> Key {
    let location = std::panic::Location::caller();
    location_key(location.file(), location.line(), location.column())
}

#[cfg(test)]
#[path = "tests/composer_tests.rs"]
mod tests;
