//! Dispatch table and the page host.
//!
//! DESIGN
//! ======
//! Instead of one closure per DOM node, every interaction is looked up in a
//! [`DispatchTable`] keyed by `(surface, event kind)`. The browser host and
//! the tests feed the same [`UiEvent`]s into [`Page::dispatch`], so the whole
//! page can be driven without a rendering environment.

use std::collections::HashMap;

use crate::config::Timing;
use crate::consts::{
    EXPAND_PREFIX, GALLERY_IMAGE, LIGHTBOX, LIGHTBOX_CLOSE, MODAL_BACKDROP, MODAL_CLOSE, NAV_LINK, NAV_TOGGLE, PARTS,
    PARTS_BUTTON, PARTS_CLOSE, RESUME, RESUME_BUTTON, RESUME_CLOSE,
};
use crate::engine::{CloseTarget, Effect, OverlayCore};
use crate::input::{EventKind, UiEvent};
use crate::nav::NavMenu;
use crate::surface::{Registry, SurfaceId};

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// What a dispatch entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(SurfaceId),
    Close(SurfaceId),
    /// Close every primary modal.
    CloseAll,
    /// Close the most recently opened overlay.
    CloseTop,
    /// Close overlays sitting on this backdrop.
    CloseBackdrop(SurfaceId),
    ToggleNav,
    CloseNav,
    TrapTab,
}

/// Identifier of the expand button on a project card.
#[must_use]
pub fn expand_control(project_id: &str) -> SurfaceId {
    SurfaceId(format!("{EXPAND_PREFIX}{project_id}"))
}

/// `(surface, event kind)` to [`Command`] lookup.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    entries: HashMap<(SurfaceId, EventKind), Command>,
}

impl DispatchTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wiring for the standard page.
    #[must_use]
    pub fn standard<'a>(project_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = Self::new();
        for id in project_ids {
            table.bind(expand_control(id), EventKind::Click, Command::Open(SurfaceId::project(id)));
        }
        table.bind(MODAL_CLOSE, EventKind::Click, Command::CloseAll);
        table.bind(MODAL_BACKDROP, EventKind::BackdropClick, Command::CloseBackdrop(MODAL_BACKDROP.into()));

        table.bind(RESUME_BUTTON, EventKind::Click, Command::Open(RESUME.into()));
        table.bind(RESUME_CLOSE, EventKind::Click, Command::Close(RESUME.into()));
        table.bind(RESUME, EventKind::BackdropClick, Command::CloseBackdrop(RESUME.into()));

        table.bind(PARTS_BUTTON, EventKind::Click, Command::Open(PARTS.into()));
        table.bind(PARTS_CLOSE, EventKind::Click, Command::Close(PARTS.into()));
        table.bind(PARTS, EventKind::BackdropClick, Command::CloseBackdrop(PARTS.into()));

        table.bind(GALLERY_IMAGE, EventKind::Click, Command::Open(LIGHTBOX.into()));
        table.bind(LIGHTBOX_CLOSE, EventKind::Click, Command::Close(LIGHTBOX.into()));
        table.bind(LIGHTBOX, EventKind::BackdropClick, Command::CloseBackdrop(LIGHTBOX.into()));

        table.bind(NAV_TOGGLE, EventKind::Click, Command::ToggleNav);
        table.bind(NAV_LINK, EventKind::Click, Command::CloseNav);

        table.bind(SurfaceId::document(), EventKind::Escape, Command::CloseTop);
        table.bind(SurfaceId::document(), EventKind::Tab, Command::TrapTab);
        table
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, surface: impl Into<SurfaceId>, kind: EventKind, command: Command) {
        self.entries.insert((surface.into(), kind), command);
    }

    #[must_use]
    pub fn lookup(&self, surface: &SurfaceId, kind: EventKind) -> Option<&Command> {
        self.entries.get(&(surface.clone(), kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Page session: overlay context, navigation menu and dispatch table.
#[derive(Debug, Clone)]
pub struct Page<E> {
    pub overlays: OverlayCore<E>,
    pub nav: NavMenu,
    table: DispatchTable,
}

impl<E> Page<E> {
    #[must_use]
    pub fn new(overlays: OverlayCore<E>, table: DispatchTable) -> Self {
        Self { overlays, nav: NavMenu::new(), table }
    }

    /// Standard page for the given project identifiers.
    #[must_use]
    pub fn standard(project_ids: &[&str], timing: &Timing) -> Self {
        let registry = Registry::standard(project_ids.iter().copied());
        let overlays = OverlayCore::new(registry).with_timing(timing);
        Self::new(overlays, DispatchTable::standard(project_ids.iter().copied()))
    }

    #[must_use]
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Whether `event` has a binding. Unbound events leave the page as is.
    #[must_use]
    pub fn handles(&self, event: &UiEvent<E>) -> bool {
        event.kind().is_some_and(|kind| self.table.lookup(event.surface(), kind).is_some())
    }
}

impl<E: Clone + PartialEq> Page<E> {
    /// Route one event through the table. Unbound events do nothing.
    pub fn dispatch(&mut self, event: UiEvent<E>) -> Vec<Effect<E>> {
        let Some(kind) = event.kind() else {
            return Vec::new();
        };
        let Some(command) = self.table.lookup(event.surface(), kind).cloned() else {
            return Vec::new();
        };

        match (command, event) {
            (Command::Open(id), UiEvent::Click { focused, .. }) => self.overlays.open(&id, focused),
            (Command::Open(id), _) => self.overlays.open(&id, None),
            (Command::Close(id), _) => self.overlays.close(&CloseTarget::Surface(id)),
            (Command::CloseAll, _) => self.overlays.close(&CloseTarget::All),
            (Command::CloseTop, _) => self.overlays.close_top(),
            (Command::CloseBackdrop(backdrop), _) => self.overlays.backdrop_click(&backdrop),
            (Command::ToggleNav, _) => {
                self.nav.toggle();
                Vec::new()
            }
            (Command::CloseNav, _) => {
                self.nav.close();
                Vec::new()
            }
            (Command::TrapTab, UiEvent::KeyDown { modifiers, focused, focusables, .. }) => {
                self.overlays.trap_tab(&focusables, focused.as_ref(), modifiers.shift)
            }
            (Command::TrapTab, _) => Vec::new(),
        }
    }
}
