use std::cell::RefCell;
use std::rc::Rc;

use crate::composer::{Composer, ComposerCore};

// Thread-local stack of active composers. The innermost composition wins.
thread_local! {
    static COMPOSER_STACK: RefCell<Vec<Rc<ComposerCore>>> = const { RefCell::new(Vec::new()) };
}

/// Guard that pops the composer stack on drop.
#[must_use = "ComposerScopeGuard pops the composer stack on drop"]
pub struct ComposerScopeGuard;

impl Drop for ComposerScopeGuard {
    fn drop(&mut self) {
        COMPOSER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Makes `composer` the active composer until the returned guard drops.
pub fn enter(composer: &Composer) -> ComposerScopeGuard {
    COMPOSER_STACK.with(|stack| {
        stack.borrow_mut().push(composer.clone_core());
    });
    ComposerScopeGuard
}

/// Access the active composer.
///
/// # Panics
/// Panics when called outside of a composition pass.
pub fn with_composer<R>(f: impl FnOnce(&Composer) -> R) -> R {
    try_with_composer(f).expect("with_composer: no active composer")
}

/// Access the active composer, or `None` outside of a composition pass.
pub fn try_with_composer<R>(f: impl FnOnce(&Composer) -> R) -> Option<R> {
    let core = COMPOSER_STACK.with(|stack| stack.borrow().last().cloned())?;
    let composer = Composer::from_core(core);
    Some(f(&composer))
}
