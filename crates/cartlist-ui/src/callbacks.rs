//! List-level callbacks. Equality is reference identity, so a host that keeps
//! passing the same callback keeps every memoised item context alive.

use std::fmt;
use std::rc::Rc;

use crate::item::Item;

type QuantityChangeFn = dyn Fn(&str, i64, Option<&Item>);
type RemoveFn = dyn Fn(&str, Option<&Item>);

/// `on_quantity_change(unique_id, value, item)`.
#[derive(Clone)]
pub struct QuantityChangeCallback(Rc<QuantityChangeFn>);

impl QuantityChangeCallback {
    pub fn new(f: impl Fn(&str, i64, Option<&Item>) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn noop() -> Self {
        Self::new(|_, _, _| {})
    }

    pub fn call(&self, unique_id: &str, value: i64, item: Option<&Item>) {
        (self.0)(unique_id, value, item)
    }
}

impl PartialEq for QuantityChangeCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for QuantityChangeCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuantityChangeCallback({:p})", Rc::as_ptr(&self.0))
    }
}

/// `on_remove(unique_id, item)`.
#[derive(Clone)]
pub struct RemoveCallback(Rc<RemoveFn>);

impl RemoveCallback {
    pub fn new(f: impl Fn(&str, Option<&Item>) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn noop() -> Self {
        Self::new(|_, _| {})
    }

    pub fn call(&self, unique_id: &str, item: Option<&Item>) {
        (self.0)(unique_id, item)
    }
}

impl PartialEq for RemoveCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RemoveCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RemoveCallback({:p})", Rc::as_ptr(&self.0))
    }
}
