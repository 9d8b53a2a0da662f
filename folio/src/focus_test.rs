use super::*;

#[test]
fn memory_starts_empty() {
    let memory = FocusMemory::<&str>::new();
    assert!(memory.is_empty());
    assert!(memory.peek().is_none());
}

#[test]
fn capture_then_take_round_trips_once() {
    let mut memory = FocusMemory::new();
    memory.capture(Some("expand-rover"));
    assert_eq!(memory.peek(), Some(&"expand-rover"));
    assert_eq!(memory.take(), Some("expand-rover"));
    assert!(memory.is_empty());
    assert_eq!(memory.take(), None);
}

#[test]
fn capture_of_nothing_leaves_memory_empty() {
    let mut memory = FocusMemory::<&str>::new();
    memory.capture(None);
    assert!(memory.is_empty());
}

#[test]
fn tab_on_last_wraps_to_first() {
    let items = ["close", "link", "submit"];
    assert_eq!(cycle_target(&items, Some(&"submit"), false), Some("close"));
}

#[test]
fn shift_tab_on_first_wraps_to_last() {
    let items = ["close", "link", "submit"];
    assert_eq!(cycle_target(&items, Some(&"close"), true), Some("submit"));
}

#[test]
fn tab_in_the_middle_passes_through() {
    let items = ["close", "link", "submit"];
    assert_eq!(cycle_target(&items, Some(&"link"), false), None);
    assert_eq!(cycle_target(&items, Some(&"link"), true), None);
}

#[test]
fn tab_on_first_and_shift_tab_on_last_pass_through() {
    let items = ["close", "link", "submit"];
    assert_eq!(cycle_target(&items, Some(&"close"), false), None);
    assert_eq!(cycle_target(&items, Some(&"submit"), true), None);
}

#[test]
fn single_focusable_wraps_onto_itself() {
    let items = ["close"];
    assert_eq!(cycle_target(&items, Some(&"close"), false), Some("close"));
    assert_eq!(cycle_target(&items, Some(&"close"), true), Some("close"));
}

#[test]
fn empty_overlay_or_no_focus_is_untouched() {
    let empty: [&str; 0] = [];
    assert_eq!(cycle_target(&empty, Some(&"close"), false), None);
    assert_eq!(cycle_target(&["close"], None, false), None);
}

#[test]
fn selector_skips_negative_tabindex_on_every_term() {
    let terms = FOCUSABLE_SELECTOR.split(", ").collect::<Vec<_>>();
    assert_eq!(terms.len(), 6);
    for term in terms {
        assert!(term.ends_with(r#":not([tabindex^="-"])"#), "{term}");
    }
    assert!(FOCUSABLE_SELECTOR.starts_with("button"));
}
