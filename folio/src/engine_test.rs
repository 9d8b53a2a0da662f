use super::*;

type Core = OverlayCore<&'static str>;

fn core() -> Core {
    OverlayCore::new(Registry::standard(["rover", "uwfe"]))
}

fn id(raw: &str) -> SurfaceId {
    SurfaceId::from(raw)
}

fn rover() -> SurfaceId {
    SurfaceId::project("rover")
}

fn uwfe() -> SurfaceId {
    SurfaceId::project("uwfe")
}

// =============================================================
// open
// =============================================================

#[test]
fn open_unknown_surface_is_noop() {
    let mut core = core();
    assert!(core.open(&id("modal-ghost"), Some("btn")).is_empty());
    assert!(!core.any_active());
    assert!(!core.scroll_locked());
}

#[test]
fn open_emits_show_lock_and_deferred_focus() {
    let mut core = core();
    let effects = core.open(&rover(), Some("expand-rover"));
    assert_eq!(
        effects,
        vec![
            Effect::Shown(rover()),
            Effect::LockScroll,
            Effect::FocusInitial { surface: rover(), selector: ".modal-close".to_owned(), delay_ms: 100 },
        ]
    );
    assert!(core.is_active(&rover()));
    assert!(core.scroll_locked());
    assert!(core.is_backdrop_active(&id("modalOverlay")));
}

#[test]
fn open_without_initial_focus_selector_skips_focus_move() {
    let mut core = OverlayCore::<&str>::new(Registry::new());
    core.register(Overlay::new("plain", Family::Layer));
    let effects = core.open(&id("plain"), None);
    assert_eq!(effects, vec![Effect::Shown(id("plain")), Effect::LockScroll]);
}

#[test]
fn open_twice_is_idempotent() {
    let mut core = core();
    core.open(&rover(), Some("expand-rover"));
    assert!(core.open(&rover(), Some("close")).is_empty());
    assert_eq!(core.active().count(), 1);
}

#[test]
fn focus_delay_follows_timing() {
    let timing = Timing { focus_delay_ms: 250, ..Timing::default() };
    let mut core = core().with_timing(&timing);
    let effects = core.open(&rover(), None);
    assert!(effects.contains(&Effect::FocusInitial {
        surface: rover(),
        selector: ".modal-close".to_owned(),
        delay_ms: 250,
    }));
}

#[test]
fn opening_second_modal_replaces_first() {
    let mut core = core();
    core.open(&rover(), Some("expand-rover"));
    let effects = core.open(&uwfe(), Some("rover-close"));
    assert_eq!(effects[0], Effect::Hidden(rover()));
    assert_eq!(effects[1], Effect::Shown(uwfe()));
    assert!(!effects.contains(&Effect::LockScroll));
    assert!(!core.is_active(&rover()));
    assert!(core.is_active(&uwfe()));
    assert!(core.scroll_locked());
}

#[test]
fn resume_panel_is_in_the_modal_family() {
    let mut core = core();
    core.open(&rover(), None);
    core.open(&id("resumeModal"), None);
    assert!(!core.is_active(&rover()));
    assert!(core.is_active(&id("resumeModal")));
    assert!(!core.is_backdrop_active(&id("modalOverlay")));
    assert!(core.is_backdrop_active(&id("resumeModal")));
}

#[test]
fn replacement_restores_its_own_opener() {
    let mut core = core();
    core.open(&rover(), Some("expand-rover"));
    core.open(&uwfe(), Some("expand-uwfe"));
    let effects = core.close(&CloseTarget::Surface(uwfe()));
    assert_eq!(
        effects,
        vec![Effect::Hidden(uwfe()), Effect::UnlockScroll, Effect::Focus("expand-uwfe")]
    );
}

#[test]
fn replaced_modal_focus_memory_is_discarded() {
    let mut core = core();
    core.open(&rover(), Some("expand-rover"));
    core.open(&uwfe(), Some("expand-uwfe"));
    let effects = core.close(&CloseTarget::All);
    assert!(!effects.contains(&Effect::Focus("expand-rover")));
    assert_eq!(effects.last(), Some(&Effect::Focus("expand-uwfe")));
}

#[test]
fn layer_stacks_above_modal() {
    let mut core = core();
    core.open(&uwfe(), Some("expand-uwfe"));
    let effects = core.open(&id("lightbox"), Some("gallery-1"));
    assert_eq!(effects[0], Effect::Shown(id("lightbox")));
    assert!(core.is_active(&uwfe()));
    assert!(core.is_active(&id("lightbox")));
    assert_eq!(core.top(), Some(&id("lightbox")));
}

// =============================================================
// close
// =============================================================

#[test]
fn close_restores_focus_after_unlocking() {
    let mut core = core();
    core.open(&rover(), Some("expand-rover"));
    let effects = core.close(&CloseTarget::Surface(rover()));
    assert_eq!(effects, vec![Effect::Hidden(rover()), Effect::UnlockScroll, Effect::Focus("expand-rover")]);
    assert!(!core.any_active());
    assert!(!core.scroll_locked());
}

#[test]
fn close_without_captured_focus_does_not_refocus() {
    let mut core = core();
    core.open(&rover(), None);
    let effects = core.close(&CloseTarget::Surface(rover()));
    assert_eq!(effects, vec![Effect::Hidden(rover()), Effect::UnlockScroll]);
}

#[test]
fn close_inactive_or_unknown_is_noop() {
    let mut core = core();
    assert!(core.close(&CloseTarget::Surface(rover())).is_empty());
    assert!(core.close(&CloseTarget::Surface(id("nope"))).is_empty());
    core.open(&rover(), None);
    assert!(core.close(&CloseTarget::Surface(id("nope"))).is_empty());
    assert!(core.scroll_locked());
}

#[test]
fn close_all_twice_is_idempotent() {
    let mut core = core();
    core.open(&rover(), Some("expand-rover"));
    assert!(!core.close(&CloseTarget::All).is_empty());
    assert!(core.close(&CloseTarget::All).is_empty());
    assert!(!core.scroll_locked());
}

#[test]
fn close_all_leaves_layers_and_scroll_lock() {
    let mut core = core();
    core.open(&uwfe(), Some("expand-uwfe"));
    core.open(&id("uwfeModal"), Some("parts-btn"));
    let effects = core.close(&CloseTarget::All);
    assert_eq!(effects, vec![Effect::Hidden(uwfe()), Effect::Focus("expand-uwfe")]);
    assert!(core.is_active(&id("uwfeModal")));
    assert!(core.scroll_locked());
}

#[test]
fn closing_layer_keeps_scroll_locked_while_modal_open() {
    let mut core = core();
    core.open(&uwfe(), Some("expand-uwfe"));
    core.open(&id("lightbox"), Some("gallery-1"));
    let effects = core.close(&CloseTarget::Surface(id("lightbox")));
    assert_eq!(effects, vec![Effect::Hidden(id("lightbox")), Effect::Focus("gallery-1")]);
    assert!(core.scroll_locked());
}

// =============================================================
// Escape / backdrop
// =============================================================

#[test]
fn close_top_is_last_in_first_out() {
    let mut core = core();
    core.open(&uwfe(), Some("expand-uwfe"));
    core.open(&id("lightbox"), Some("gallery-1"));

    let first = core.close_top();
    assert_eq!(first[0], Effect::Hidden(id("lightbox")));
    assert!(core.is_active(&uwfe()));

    let second = core.close_top();
    assert_eq!(second[0], Effect::Hidden(uwfe()));
    assert!(!core.any_active());

    assert!(core.close_top().is_empty());
}

#[test]
fn backdrop_click_closes_overlays_on_that_backdrop_only() {
    let mut core = core();
    core.open(&uwfe(), Some("expand-uwfe"));
    core.open(&id("lightbox"), Some("gallery-1"));

    let effects = core.backdrop_click(&id("lightbox"));
    assert_eq!(effects, vec![Effect::Hidden(id("lightbox")), Effect::Focus("gallery-1")]);
    assert!(core.is_active(&uwfe()));

    let effects = core.backdrop_click(&id("modalOverlay"));
    assert_eq!(effects[0], Effect::Hidden(uwfe()));
    assert!(!core.any_active());
}

#[test]
fn backdrop_click_respects_policy() {
    let mut core = OverlayCore::<&str>::new(Registry::new());
    core.register(Overlay::new("sticky", Family::Modal).closes_on_backdrop(false));
    core.open(&id("sticky"), None);
    assert!(core.backdrop_click(&id("sticky")).is_empty());
    assert!(core.is_active(&id("sticky")));
}

#[test]
fn backdrop_click_with_nothing_open_is_noop() {
    let mut core = core();
    assert!(core.backdrop_click(&id("modalOverlay")).is_empty());
}

// =============================================================
// Tab trap
// =============================================================

#[test]
fn trap_tab_wraps_both_directions() {
    let mut core = core();
    core.open(&rover(), None);
    let items = ["close", "repo", "demo"];
    assert_eq!(core.trap_tab(&items, Some(&"demo"), false), vec![Effect::PreventDefault, Effect::Focus("close")]);
    assert_eq!(core.trap_tab(&items, Some(&"close"), true), vec![Effect::PreventDefault, Effect::Focus("demo")]);
    assert!(core.trap_tab(&items, Some(&"repo"), false).is_empty());
}

#[test]
fn trap_tab_inactive_when_nothing_open() {
    let core = core();
    assert!(core.trap_tab(&["a", "b"], Some(&"b"), false).is_empty());
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_closes_everything_and_restores_first_capture() {
    let mut core = core();
    core.open(&uwfe(), Some("expand-uwfe"));
    core.open(&id("lightbox"), Some("gallery-1"));
    let effects = core.reset();
    assert_eq!(
        effects,
        vec![
            Effect::Hidden(id("lightbox")),
            Effect::Hidden(uwfe()),
            Effect::UnlockScroll,
            Effect::Focus("expand-uwfe"),
        ]
    );
    assert!(!core.any_active());
    assert!(core.reset().is_empty());
}
