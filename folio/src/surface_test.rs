use super::*;

#[test]
fn project_id_is_prefixed() {
    assert_eq!(SurfaceId::project("rover").as_str(), "modal-rover");
}

#[test]
fn document_pseudo_surface() {
    assert_eq!(SurfaceId::document().to_string(), "document");
}

#[test]
fn plain_overlay_is_its_own_backdrop() {
    let overlay = Overlay::new("panel", Family::Layer);
    assert_eq!(overlay.backdrop, overlay.id);
    assert!(overlay.close_on_backdrop);
    assert!(overlay.initial_focus.is_none());
}

#[test]
fn project_overlay_shares_modal_backdrop() {
    let overlay = Overlay::project("rover");
    assert_eq!(overlay.family, Family::Modal);
    assert_eq!(overlay.backdrop.as_str(), "modalOverlay");
    assert_eq!(overlay.initial_focus.as_deref(), Some(".modal-close"));
}

#[test]
fn builder_can_disable_backdrop_close() {
    let overlay = Overlay::new("sticky", Family::Modal).closes_on_backdrop(false);
    assert!(!overlay.close_on_backdrop);
}

#[test]
fn standard_registry_holds_every_surface() {
    let registry = Registry::standard(["rover", "uwfe"]);
    assert_eq!(registry.len(), 5);
    assert!(registry.contains(&SurfaceId::project("rover")));
    assert!(registry.contains(&SurfaceId::project("uwfe")));
    assert!(registry.contains(&SurfaceId::from("resumeModal")));
    assert!(registry.contains(&SurfaceId::from("lightbox")));
    assert!(registry.contains(&SurfaceId::from("uwfeModal")));
}

#[test]
fn ids_in_filters_by_family() {
    let registry = Registry::standard(["rover"]);
    let modals = registry.ids_in(Family::Modal).map(SurfaceId::as_str).collect::<Vec<_>>();
    assert_eq!(modals, vec!["modal-rover", "resumeModal"]);
    let layers = registry.ids_in(Family::Layer).map(SurfaceId::as_str).collect::<Vec<_>>();
    assert_eq!(layers, vec!["lightbox", "uwfeModal"]);
}

#[test]
fn register_replaces_existing_entry() {
    let mut registry = Registry::new();
    registry.register(Overlay::new("x", Family::Modal));
    registry.register(Overlay::new("x", Family::Layer));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(&SurfaceId::from("x")).map(|o| o.family), Some(Family::Layer));
}

#[test]
fn empty_registry() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert!(registry.get(&SurfaceId::from("nope")).is_none());
}
