use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Shared "needs another pass" flag of a composition.
///
/// State writes raise it; the composition clears it when a pass starts.
#[derive(Clone, Default)]
pub struct Invalidation {
    dirty: Rc<Cell<bool>>,
}

impl Invalidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    pub fn is_invalid(&self) -> bool {
        self.dirty.get()
    }

    pub(crate) fn take(&self) -> bool {
        self.dirty.replace(false)
    }
}

impl fmt::Debug for Invalidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invalidation")
            .field("dirty", &self.dirty.get())
            .finish()
    }
}

/// Observable value owned by a composition.
///
/// Writing a different value invalidates the owning composition so the next
/// pump recomposes it. Writing an equal value is a no-op.
pub struct MutableState<T> {
    value: Rc<RefCell<T>>,
    invalidation: Invalidation,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            invalidation: self.invalidation.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableState")
            .field(&*self.value.borrow())
            .finish()
    }
}

impl<T: 'static> MutableState<T> {
    pub fn with_invalidation(initial: T, invalidation: Invalidation) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            invalidation,
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.value.borrow())
    }

    /// Mutates the value in place and always invalidates.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut *self.value.borrow_mut());
        self.invalidation.invalidate();
        result
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: PartialEq + 'static> MutableState<T> {
    /// Stores `value`, returning whether it differed from the previous one.
    pub fn set(&self, value: T) -> bool {
        let changed = {
            let mut current = self.value.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed {
            self.invalidation.invalidate();
        }
        changed
    }
}
