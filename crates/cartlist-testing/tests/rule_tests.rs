use cartlist_core::{emit, useState, MutableState, Node};
use cartlist_testing::ComposeTestRule;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Counter(i32);

impl Node for Counter {}

#[test]
fn set_content_renders_once() {
    let mut rule = ComposeTestRule::new();
    assert!(!rule.has_content());
    rule.set_content(|| {
        emit(Counter(1), || {});
    })
    .expect("initial render");

    assert!(rule.has_content());
    assert_eq!(rule.pass_count(), 1);
    assert_eq!(rule.nodes::<Counter>(), vec![Counter(1)]);
    assert!(rule.root_id().is_some());
}

#[test]
fn pump_recomposes_after_external_state_change() {
    let mut rule = ComposeTestRule::new();
    let state = rule.mutable_state_of(0);
    let content_state = state.clone();
    rule.set_content(move || {
        emit(Counter(content_state.get()), || {});
    })
    .expect("initial render");

    assert_eq!(rule.pump_until_idle().expect("idle"), 0);

    state.set(5);
    assert!(rule.should_render());
    assert_eq!(rule.pump_until_idle().expect("pump"), 1);
    assert_eq!(rule.nodes::<Counter>(), vec![Counter(5)]);
}

#[test]
fn remembered_state_survives_recomposition() {
    thread_local! {
        static CAPTURED: RefCell<Option<MutableState<i32>>> = const { RefCell::new(None) };
    }

    let mut rule = ComposeTestRule::new();
    rule.set_content(|| {
        let count = useState(|| 10);
        CAPTURED.with(|slot| *slot.borrow_mut() = Some(count.clone()));
        emit(Counter(count.get()), || {});
    })
    .expect("initial render");

    let captured = CAPTURED.with(|slot| slot.borrow().clone()).expect("state captured");
    captured.set(11);
    rule.pump_until_idle().expect("pump");

    let again = CAPTURED.with(|slot| slot.borrow().clone()).expect("state captured");
    assert!(captured.ptr_eq(&again));
    assert_eq!(rule.nodes::<Counter>(), vec![Counter(11)]);
}

#[test]
fn dump_tree_lists_nodes() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut rule = ComposeTestRule::new();
    let sink = Rc::clone(&log);
    rule.set_content(move || {
        sink.borrow_mut().push("composed");
        emit(Counter(1), || {
            emit(Counter(2), || {});
        });
    })
    .expect("initial render");

    let dump = rule.dump_tree();
    assert!(dump.contains("[0] Counter(1)"), "{dump}");
    assert!(dump.contains("  [1] Counter(2)"), "{dump}");
    assert_eq!(log.borrow().len(), 1);
}
