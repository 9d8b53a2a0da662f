//! Overlay identifiers, families and the registry.
//!
//! Overlays are registered once when the page markup is in place and are
//! reused for the whole session. Nothing here knows whether an overlay is
//! open; that lives in [`crate::engine::OverlayCore`].

use std::collections::BTreeMap;
use std::fmt;

use crate::consts::{DOCUMENT, LIGHTBOX, MODAL_BACKDROP, PARTS, PROJECT_MODAL_PREFIX, RESUME};

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Stable identifier of a page surface (the element id in the markup).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(pub String);

impl SurfaceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier of the modal belonging to a project card.
    #[must_use]
    pub fn project(project_id: &str) -> Self {
        Self(format!("{PROJECT_MODAL_PREFIX}{project_id}"))
    }

    /// Pseudo-surface for listeners attached to the whole document.
    #[must_use]
    pub fn document() -> Self {
        Self(DOCUMENT.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SurfaceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Which stacking rules an overlay follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Primary modal family: at most one is active at a time.
    Modal,
    /// Secondary layers (image viewer, parts list) that may stack on a modal.
    Layer,
}

/// A dialog-like surface the page can open and close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub id: SurfaceId,
    pub family: Family,
    /// Background surface shown while this overlay is active.
    pub backdrop: SurfaceId,
    /// A click directly on the backdrop closes the overlay.
    pub close_on_backdrop: bool,
    /// Selector, relative to the overlay, of the control that receives focus
    /// after opening.
    pub initial_focus: Option<String>,
}

impl Overlay {
    /// An overlay that is its own backdrop and closes on background clicks.
    #[must_use]
    pub fn new(id: impl Into<SurfaceId>, family: Family) -> Self {
        let id = id.into();
        Self { backdrop: id.clone(), id, family, close_on_backdrop: true, initial_focus: None }
    }

    #[must_use]
    pub fn with_backdrop(mut self, backdrop: impl Into<SurfaceId>) -> Self {
        self.backdrop = backdrop.into();
        self
    }

    #[must_use]
    pub fn with_initial_focus(mut self, selector: impl Into<String>) -> Self {
        self.initial_focus = Some(selector.into());
        self
    }

    #[must_use]
    pub fn closes_on_backdrop(mut self, enabled: bool) -> Self {
        self.close_on_backdrop = enabled;
        self
    }

    /// Project modal: primary family behind the shared modal backdrop.
    #[must_use]
    pub fn project(project_id: &str) -> Self {
        Self::new(SurfaceId::project(project_id), Family::Modal)
            .with_backdrop(MODAL_BACKDROP)
            .with_initial_focus(".modal-close")
    }

    /// Resume panel.
    #[must_use]
    pub fn resume() -> Self {
        Self::new(RESUME, Family::Modal).with_initial_focus(".resume-modal-close")
    }

    /// Image viewer.
    #[must_use]
    pub fn lightbox() -> Self {
        Self::new(LIGHTBOX, Family::Layer).with_initial_focus(".lightbox-close")
    }

    /// Parts list panel, opened from inside a project modal.
    #[must_use]
    pub fn parts() -> Self {
        Self::new(PARTS, Family::Layer).with_initial_focus(".uwfe-modal-close")
    }
}

/// Every overlay known to the page, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    overlays: BTreeMap<SurfaceId, Overlay>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the standard page: one modal per project plus the resume
    /// panel, the lightbox and the parts panel.
    #[must_use]
    pub fn standard<'a>(project_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut registry = Self::new();
        for id in project_ids {
            registry.register(Overlay::project(id));
        }
        registry.register(Overlay::resume());
        registry.register(Overlay::lightbox());
        registry.register(Overlay::parts());
        registry
    }

    /// Add or replace an overlay.
    pub fn register(&mut self, overlay: Overlay) {
        self.overlays.insert(overlay.id.clone(), overlay);
    }

    #[must_use]
    pub fn get(&self, id: &SurfaceId) -> Option<&Overlay> {
        self.overlays.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &SurfaceId) -> bool {
        self.overlays.contains_key(id)
    }

    /// Identifiers of every overlay in `family`, in identifier order.
    pub fn ids_in(&self, family: Family) -> impl Iterator<Item = &SurfaceId> {
        self.overlays
            .values()
            .filter(move |overlay| overlay.family == family)
            .map(|overlay| &overlay.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
