use super::*;

fn board() -> RevealBoard<&'static str> {
    let mut board = RevealBoard::new();
    board.register("hero-name", RevealZone::Stagger);
    board.register("hero-role", RevealZone::Stagger);
    board.register("hero-tagline", RevealZone::Stagger);
    board.register("hero-cta", RevealZone::Stagger);
    board.register("about-title", RevealZone::Heading);
    board.register("about-content", RevealZone::Body);
    board.register("hero-canvas", RevealZone::Immediate);
    board.register("projects", RevealZone::Viewport);
    board.register("contact", RevealZone::Viewport);
    board
}

// =============================================================
// One-way flags
// =============================================================

#[test]
fn reveal_transitions_once() {
    let mut board = board();
    assert!(!board.is_revealed(&"projects"));
    assert!(board.reveal(&"projects"));
    assert!(board.is_revealed(&"projects"));
    assert!(!board.reveal(&"projects"));
    assert!(board.is_revealed(&"projects"));
}

#[test]
fn reveal_unknown_key_is_noop() {
    let mut board = board();
    assert!(!board.reveal(&"ghost"));
    assert!(!board.is_revealed(&"ghost"));
}

#[test]
fn reregistering_keeps_revealed_flag_and_zone() {
    let mut board = board();
    board.reveal(&"projects");
    board.register("projects", RevealZone::Immediate);
    assert!(board.is_revealed(&"projects"));
    assert_eq!(board.zone(&"projects"), Some(RevealZone::Viewport));
    assert_eq!(board.len(), 9);
}

// =============================================================
// Viewport watch
// =============================================================

#[test]
fn watch_list_holds_unrevealed_viewport_entries() {
    let mut board = board();
    assert_eq!(board.watch_list(), vec!["contact", "projects"]);
    board.reveal(&"contact");
    assert_eq!(board.watch_list(), vec!["projects"]);
}

#[test]
fn observe_fires_once_across_reentries() {
    let mut board = board();
    assert_eq!(board.observe(&"projects", false), Watch::Keep);
    assert_eq!(board.observe(&"projects", true), Watch::Reveal);
    assert_eq!(board.observe(&"projects", false), Watch::Retire);
    assert_eq!(board.observe(&"projects", true), Watch::Retire);
    assert!(board.is_revealed(&"projects"));
}

#[test]
fn observe_retires_non_viewport_entries() {
    let mut board = board();
    assert_eq!(board.observe(&"hero-name", true), Watch::Retire);
    assert!(!board.is_revealed(&"hero-name"));
    assert_eq!(board.observe(&"ghost", true), Watch::Retire);
}

// =============================================================
// Immediate
// =============================================================

#[test]
fn immediate_entries_reveal_without_watch() {
    let mut board = board();
    assert_eq!(board.reveal_immediate(), vec!["hero-canvas"]);
    assert!(board.is_revealed(&"hero-canvas"));
    assert!(board.reveal_immediate().is_empty());
    assert!(!board.watch_list().contains(&"hero-canvas"));
}

// =============================================================
// Stagger
// =============================================================

#[test]
fn stagger_plan_follows_registration_order() {
    let plan = board().stagger_plan(&Timing::default());
    let keys = plan.items.iter().map(|s| s.key).collect::<Vec<_>>();
    assert_eq!(keys, vec!["hero-name", "hero-role", "hero-tagline", "hero-cta"]);
}

#[test]
fn stagger_plan_uses_constant_step() {
    let plan = board().stagger_plan(&Timing::default());
    let fires = plan.items.iter().map(|s| s.fire_at_ms).collect::<Vec<_>>();
    assert_eq!(fires, vec![100, 250, 400, 550]);
    let pops = plan.items.iter().map(|s| s.pop_delay_ms).collect::<Vec<_>>();
    assert_eq!(pops, vec![Some(0), Some(150), Some(300), Some(450)]);
}

#[test]
fn heading_and_body_follow_the_sequence() {
    let plan = board().stagger_plan(&Timing::default());
    let heading = plan.heading.as_ref().expect("heading scheduled");
    assert_eq!(heading.key, "about-title");
    assert_eq!(heading.pop_delay_ms, Some(800));
    assert_eq!(heading.fire_at_ms, 900);

    let body = plan.body.as_ref().expect("body scheduled");
    assert_eq!(body.key, "about-content");
    assert_eq!(body.fire_at_ms, 1200);
    assert_eq!(body.pop_delay_ms, None);

    let last_item = plan.items.last().map(|s| s.fire_at_ms).unwrap_or_default();
    assert!(heading.fire_at_ms > last_item);
}

#[test]
fn body_without_heading_is_not_scheduled() {
    let plan = StaggerPlan::build(vec!["a"], None, Some("body"), &Timing::default());
    assert!(plan.heading.is_none());
    assert!(plan.body.is_none());
}

#[test]
fn empty_sequence_still_schedules_heading() {
    let plan = StaggerPlan::build(Vec::<&str>::new(), Some("title"), Some("body"), &Timing::default());
    assert!(plan.items.is_empty());
    assert_eq!(plan.heading.as_ref().map(|s| s.fire_at_ms), Some(300));
    assert_eq!(plan.body.as_ref().map(|s| s.fire_at_ms), Some(600));
}

#[test]
fn custom_timing_changes_offsets() {
    let timing = Timing { stagger_step_ms: 50, stagger_initial_ms: 0, heading_gap_ms: 0, body_trail_ms: 10, ..Timing::default() };
    let plan = StaggerPlan::build(vec!["a", "b"], Some("h"), Some("b2"), &timing);
    let fires = plan.iter().map(|s| s.fire_at_ms).collect::<Vec<_>>();
    assert_eq!(fires, vec![0, 50, 100, 110]);
}
