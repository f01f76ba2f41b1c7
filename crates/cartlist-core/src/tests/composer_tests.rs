use super::*;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
struct Label(String);

impl Node for Label {}

#[derive(Debug, Clone, PartialEq)]
struct Frame;

impl Node for Frame {}

fn label(text: &str) -> NodeId {
    emit(Label(text.to_string()), || {})
}

#[test]
fn remember_returns_same_value_across_passes() {
    thread_local! {
        static SEEN: RefCell<Vec<Owned<u32>>> = RefCell::new(Vec::new());
    }

    let mut composition = Composition::new();
    let mut content = || {
        let counter = remember(|| 0u32);
        counter.update(|value| *value += 1);
        SEEN.with(|seen| seen.borrow_mut().push(counter));
    };

    composition.render(1, &mut content).expect("first pass");
    composition.render(1, &mut content).expect("second pass");

    SEEN.with(|seen| {
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].ptr_eq(&seen[1]));
        assert_eq!(seen[1].get(), 2);
    });
}

#[test]
fn slots_of_groups_that_leave_are_disposed() {
    thread_local! {
        static INITS: Cell<usize> = const { Cell::new(0) };
    }

    let show = Rc::new(Cell::new(true));
    let mut composition = Composition::new();
    let mut content = {
        let show = Rc::clone(&show);
        move || {
            if show.get() {
                with_key("optional", || {
                    remember(|| INITS.with(|count| count.set(count.get() + 1)));
                });
            }
        }
    };

    composition.render(7, &mut content).expect("shown");
    composition.render(7, &mut content).expect("still shown");
    assert_eq!(INITS.with(Cell::get), 1);

    show.set(false);
    composition.render(7, &mut content).expect("hidden");
    show.set(true);
    composition.render(7, &mut content).expect("shown again");
    assert_eq!(INITS.with(Cell::get), 2);
}

#[test]
fn keyed_groups_keep_their_slots_when_reordered() {
    thread_local! {
        static VALUES: RefCell<Vec<(String, Owned<String>)>> = RefCell::new(Vec::new());
    }

    let order = Rc::new(RefCell::new(vec!["a", "b", "c"]));
    let mut composition = Composition::new();
    let mut content = {
        let order = Rc::clone(&order);
        move || {
            for key in order.borrow().iter() {
                with_key(*key, || {
                    let slot = remember(|| key.to_string());
                    VALUES.with(|values| values.borrow_mut().push((key.to_string(), slot)));
                });
            }
        }
    };

    composition.render(3, &mut content).expect("first order");
    let first: Vec<_> = VALUES.with(|values| values.borrow_mut().drain(..).collect());

    *order.borrow_mut() = vec!["c", "a", "b"];
    composition.render(3, &mut content).expect("second order");
    let second: Vec<_> = VALUES.with(|values| values.borrow_mut().drain(..).collect());

    for (key, slot) in &second {
        let (_, before) = first
            .iter()
            .find(|(k, _)| k == key)
            .expect("key present in both passes");
        assert!(slot.ptr_eq(before), "slot for {key} was recreated");
        assert_eq!(&slot.get(), key);
    }
}

#[test]
fn remember_keyed_recomputes_only_on_dependency_change() {
    thread_local! {
        static COMPUTES: Cell<usize> = const { Cell::new(0) };
        static RESULTS: RefCell<Vec<Rc<String>>> = RefCell::new(Vec::new());
    }

    let dep = Rc::new(Cell::new(1));
    let mut composition = Composition::new();
    let mut content = {
        let dep = Rc::clone(&dep);
        move || {
            let current = dep.get();
            let value = remember_keyed(current, || {
                COMPUTES.with(|count| count.set(count.get() + 1));
                format!("value-{current}")
            });
            RESULTS.with(|results| results.borrow_mut().push(value));
        }
    };

    composition.render(9, &mut content).expect("pass 1");
    composition.render(9, &mut content).expect("pass 2");
    dep.set(2);
    composition.render(9, &mut content).expect("pass 3");

    assert_eq!(COMPUTES.with(Cell::get), 2);
    RESULTS.with(|results| {
        let results = results.borrow();
        assert!(Rc::ptr_eq(&results[0], &results[1]));
        assert!(!Rc::ptr_eq(&results[1], &results[2]));
        assert_eq!(results[2].as_str(), "value-2");
    });
}

#[test]
fn composition_local_falls_back_to_default() {
    thread_local! {
        static READ: Cell<i32> = const { Cell::new(0) };
    }

    let local = compositionLocalOf(|| 7);
    let mut composition = Composition::new();
    composition
        .render(2, &mut || READ.with(|slot| slot.set(local.current())))
        .expect("compose reader");

    assert_eq!(READ.with(Cell::get), 7);
}

#[test]
fn composition_local_provider_scopes_values() {
    thread_local! {
        static READS: RefCell<Vec<i32>> = RefCell::new(Vec::new());
    }

    let local = compositionLocalOf(|| 0);
    let record = {
        let local = local.clone();
        move || READS.with(|reads| reads.borrow_mut().push(local.current()))
    };

    let mut composition = Composition::new();
    composition
        .render(4, &mut || {
            record();
            CompositionLocalProvider([local.provides(1)], || {
                record();
                CompositionLocalProvider([local.provides(2)], || record());
                record();
            });
            record();
        })
        .expect("compose nested providers");

    READS.with(|reads| assert_eq!(*reads.borrow(), vec![0, 1, 2, 1, 0]));
}

#[test]
fn emit_builds_parent_child_tree() {
    let mut composition = Composition::new();
    composition
        .render(5, &mut || {
            emit(Frame, || {
                label("first");
                emit(Frame, || {
                    label("nested");
                });
                label("last");
            });
        })
        .expect("compose tree");

    let applier = composition.applier();
    assert_eq!(applier.len(), 5);
    let root = composition.root().expect("root node");
    assert_eq!(applier.children(root).expect("root children").len(), 3);

    let labels = applier.collect::<Label>();
    let texts: Vec<_> = labels.iter().map(|l| l.0.as_str()).collect();
    assert_eq!(texts, vec!["first", "nested", "last"]);

    let nested = applier.find_all::<Label>()[1];
    assert!(applier.is_descendant_of(nested, root));

    let dump = applier.dump_tree();
    assert!(dump.contains("Label(\"nested\")"), "{dump}");
}

#[test]
fn with_node_reports_type_mismatch() {
    let mut composition = Composition::new();
    composition
        .render(6, &mut || {
            emit(Frame, || {});
        })
        .expect("compose frame");

    let applier = composition.applier();
    let root = applier.roots()[0];
    let result = applier.with_node::<Label, _>(root, |label| label.0.clone());
    assert!(matches!(result, Err(NodeError::TypeMismatch { id, .. }) if id == root));
    assert_eq!(
        applier.node(42).map(|_| ()),
        Err(NodeError::Missing { id: 42 })
    );
}

#[test]
fn mutable_state_invalidates_only_on_change() {
    let composition = Composition::new();
    let state = composition.mutable_state_of(3);
    assert!(!composition.should_render());

    assert!(!state.set(3));
    assert!(!composition.should_render());

    assert!(state.set(4));
    assert!(composition.should_render());
    assert_eq!(state.get(), 4);
}

#[test]
fn render_clears_pending_invalidation() {
    let mut composition = Composition::new();
    let state = composition.mutable_state_of(false);
    state.set(true);
    assert!(composition.should_render());

    composition.render(8, &mut || {}).expect("render");
    assert!(!composition.should_render());
    assert_eq!(composition.pass_count(), 1);
}

#[track_caller]
fn tracked_counter() -> Owned<u32> {
    with_key(&caller_key(), || remember(|| 0u32))
}

#[test]
fn call_site_groups_do_not_trade_slots() {
    thread_local! {
        static SLOTS: RefCell<Vec<Owned<u32>>> = RefCell::new(Vec::new());
    }

    let show_first = Rc::new(Cell::new(true));
    let mut composition = Composition::new();
    let mut content = {
        let show_first = Rc::clone(&show_first);
        move || {
            if show_first.get() {
                let first = tracked_counter();
                first.replace(1);
            }
            let second = tracked_counter();
            SLOTS.with(|slots| slots.borrow_mut().push(second));
        }
    };

    composition.render(10, &mut content).expect("both shown");
    show_first.set(false);
    composition.render(10, &mut content).expect("first hidden");

    SLOTS.with(|slots| {
        let slots = slots.borrow();
        assert!(slots[0].ptr_eq(&slots[1]));
        assert_eq!(slots[1].get(), 0);
    });
}

#[test]
fn downcast_ref_through_dyn_node() {
    let label: Box<dyn Node> = Box::new(Label("boxed".to_string()));
    let node: &dyn Node = &*label;
    assert_eq!(node.downcast_ref::<Label>(), Some(&Label("boxed".to_string())));
    assert!(node.downcast_ref::<Frame>().is_none());
}
