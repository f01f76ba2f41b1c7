use std::any::Any;
use std::cell::{Ref, RefCell};
use std::mem;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::applier::{MemoryApplier, Node, NodeError, NodeId};
use crate::collections::map::HashMap;
use crate::hash::{child_path, hash_key};
use crate::local::{CompositionLocal, LocalContext, ProvidedValue};
use crate::owned::Owned;
use crate::state::{Invalidation, MutableState};
use crate::Key;

/// Address of a remembered value: the path of its group plus the call
/// position inside that group.
type SlotAddress = (Key, usize);

struct GroupFrame {
    path: Key,
    next_slot: usize,
    child_keys: SmallVec<[(Key, usize); 8]>,
}

impl GroupFrame {
    fn new(path: Key) -> Self {
        Self {
            path,
            next_slot: 0,
            child_keys: SmallVec::new(),
        }
    }

    fn child_path(&mut self, key: Key) -> Key {
        let occurrence = match self.child_keys.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => {
                *count += 1;
                *count
            }
            None => {
                self.child_keys.push((key, 0));
                0
            }
        };
        if occurrence > 0 {
            log::warn!("group key {key:#x} opened {} times in one parent", occurrence + 1);
        }
        child_path(self.path, key, occurrence)
    }

    fn next_address(&mut self) -> SlotAddress {
        let address = (self.path, self.next_slot);
        self.next_slot += 1;
        address
    }
}

/// Remembered values of the previous pass and of the pass in progress.
///
/// Values are moved from `previous` to `current` as they are visited; whatever
/// is still in `previous` when a pass ends belonged to groups that left the
/// composition and is dropped.
#[derive(Default)]
struct SlotTable {
    previous: HashMap<SlotAddress, Box<dyn Any>>,
    current: HashMap<SlotAddress, Box<dyn Any>>,
}

impl SlotTable {
    fn take(&mut self, address: &SlotAddress) -> Option<Box<dyn Any>> {
        self.previous.remove(address)
    }

    fn store(&mut self, address: SlotAddress, value: Box<dyn Any>) {
        self.current.insert(address, value);
    }

    fn finish_pass(&mut self) -> HashMap<SlotAddress, Box<dyn Any>> {
        let visited = mem::take(&mut self.current);
        mem::replace(&mut self.previous, visited)
    }

    fn len(&self) -> usize {
        self.previous.len() + self.current.len()
    }
}

pub struct ComposerCore {
    slots: RefCell<SlotTable>,
    groups: RefCell<Vec<GroupFrame>>,
    local_stack: RefCell<Vec<LocalContext>>,
    parents: RefCell<Vec<NodeId>>,
    applier: RefCell<MemoryApplier>,
    invalidation: Invalidation,
}

/// Handle to the composer driving the current pass.
#[derive(Clone)]
pub struct Composer {
    core: Rc<ComposerCore>,
}

struct StackGuard<'a, T> {
    stack: &'a RefCell<Vec<T>>,
}

impl<T> Drop for StackGuard<'_, T> {
    fn drop(&mut self) {
        self.stack.borrow_mut().pop();
    }
}

impl Composer {
    pub(crate) fn new(invalidation: Invalidation) -> Self {
        Self {
            core: Rc::new(ComposerCore {
                slots: RefCell::new(SlotTable::default()),
                groups: RefCell::new(Vec::new()),
                local_stack: RefCell::new(Vec::new()),
                parents: RefCell::new(Vec::new()),
                applier: RefCell::new(MemoryApplier::new()),
                invalidation,
            }),
        }
    }

    pub(crate) fn clone_core(&self) -> Rc<ComposerCore> {
        Rc::clone(&self.core)
    }

    pub(crate) fn from_core(core: Rc<ComposerCore>) -> Self {
        Self { core }
    }

    pub fn invalidation(&self) -> Invalidation {
        self.core.invalidation.clone()
    }

    pub(crate) fn applier(&self) -> Ref<'_, MemoryApplier> {
        self.core.applier.borrow()
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.core.slots.borrow().len()
    }

    pub(crate) fn begin_pass(&self, root: Key) {
        self.core.applier.borrow_mut().clear();
        self.core.parents.borrow_mut().clear();
        self.core.local_stack.borrow_mut().clear();
        let mut groups = self.core.groups.borrow_mut();
        groups.clear();
        groups.push(GroupFrame::new(root));
    }

    /// Closes the pass and drops the slots of groups that were not visited.
    /// Returns how many slots were disposed.
    pub(crate) fn end_pass(&self) -> Result<usize, NodeError> {
        let open_groups = self.core.groups.borrow().len().saturating_sub(1);
        let open_parents = self.core.parents.borrow().len();
        self.core.groups.borrow_mut().clear();
        let stale = self.core.slots.borrow_mut().finish_pass();
        let disposed = stale.len();
        drop(stale);
        if open_groups > 0 || open_parents > 0 {
            return Err(NodeError::Unbalanced {
                open_groups,
                open_parents,
            });
        }
        Ok(disposed)
    }

    pub fn with_group<R>(&self, key: Key, f: impl FnOnce(&Composer) -> R) -> R {
        let path = {
            let mut groups = self.core.groups.borrow_mut();
            let parent = groups
                .last_mut()
                .expect("with_group: composer has no open group");
            parent.child_path(key)
        };
        self.core.groups.borrow_mut().push(GroupFrame::new(path));
        let _guard = StackGuard {
            stack: &self.core.groups,
        };
        f(self)
    }

    pub fn with_key<K: std::hash::Hash + ?Sized, R>(
        &self,
        key: &K,
        f: impl FnOnce(&Composer) -> R,
    ) -> R {
        self.with_group(hash_key(key), f)
    }

    pub fn remember<T: 'static>(&self, init: impl FnOnce() -> T) -> Owned<T> {
        let address = {
            let mut groups = self.core.groups.borrow_mut();
            groups
                .last_mut()
                .expect("remember: composer has no open group")
                .next_address()
        };
        let existing = self.core.slots.borrow_mut().take(&address);
        let owned = match existing.map(|value| value.downcast::<Owned<T>>()) {
            Some(Ok(value)) => *value,
            Some(Err(_)) => {
                log::trace!("slot {address:?} changed type; reinitialising");
                Owned::new(init())
            }
            None => Owned::new(init()),
        };
        self.core
            .slots
            .borrow_mut()
            .store(address, Box::new(owned.clone()));
        owned
    }

    /// Remembers the result of `compute`, recomputing it only when `deps`
    /// differs from the dependencies of the previous pass.
    pub fn remember_keyed<D, T>(&self, deps: D, compute: impl FnOnce() -> T) -> Rc<T>
    where
        D: PartialEq + 'static,
        T: 'static,
    {
        let slot = self.remember(|| None::<(D, Rc<T>)>);
        let cached = slot.with(|entry| match entry {
            Some((previous, value)) if *previous == deps => Some(Rc::clone(value)),
            _ => None,
        });
        if let Some(value) = cached {
            return value;
        }
        let value = Rc::new(compute());
        slot.replace(Some((deps, Rc::clone(&value))));
        value
    }

    pub fn mutable_state_of<T: 'static>(&self, initial: T) -> MutableState<T> {
        MutableState::with_invalidation(initial, self.invalidation())
    }

    /// Emits `node` under the current parent and composes `content` as its
    /// children.
    pub fn emit(&self, node: Box<dyn Node>, content: impl FnOnce()) -> NodeId {
        let parent = self.core.parents.borrow().last().copied();
        let id = self.core.applier.borrow_mut().create(node, parent);
        self.core.parents.borrow_mut().push(id);
        let _guard = StackGuard {
            stack: &self.core.parents,
        };
        content();
        id
    }

    pub fn with_composition_locals<R>(
        &self,
        provided: Vec<ProvidedValue>,
        f: impl FnOnce(&Composer) -> R,
    ) -> R {
        let mut context = LocalContext::default();
        for value in provided {
            let (key, entry) = value.into_entry();
            context.values.insert(key, entry);
        }
        self.core.local_stack.borrow_mut().push(context);
        let _guard = StackGuard {
            stack: &self.core.local_stack,
        };
        f(self)
    }

    pub fn read_composition_local<T: Clone + 'static>(&self, local: &CompositionLocal<T>) -> T {
        let stack = self.core.local_stack.borrow();
        for context in stack.iter().rev() {
            if let Some(entry) = context.values.get(&local.key()) {
                if let Ok(typed) = Rc::clone(entry).downcast::<T>() {
                    return (*typed).clone();
                }
            }
        }
        local.default_value()
    }
}
