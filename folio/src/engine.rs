//! The overlay context object and the effects it asks the host to apply.
//!
//! [`OverlayCore`] replaces the page-wide globals a script would keep (the
//! "last focused element" and the set of open dialogs). It is created once
//! per page session and handed to whatever dispatches input events. Every
//! operation is a pure state transition that returns a list of [`Effect`]s;
//! the host turns those into class changes, focus calls and scroll locking.
//!
//! Unknown identifiers, already-open overlays and already-closed overlays
//! all produce an empty effect list.

use crate::config::Timing;
use crate::consts::FOCUS_DELAY_MS;
use crate::focus::{FocusMemory, cycle_target};
use crate::surface::{Family, Overlay, Registry, SurfaceId};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects returned from overlay operations for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<E> {
    /// The overlay became active.
    Shown(SurfaceId),
    /// The overlay became inactive.
    Hidden(SurfaceId),
    /// Suppress page scrolling.
    LockScroll,
    /// Allow page scrolling again.
    UnlockScroll,
    /// Move keyboard focus now.
    Focus(E),
    /// Move keyboard focus to `selector` inside `surface` once the overlay
    /// has had time to become visible.
    FocusInitial { surface: SurfaceId, selector: String, delay_ms: u32 },
    /// Cancel the browser's default handling of the current event.
    PreventDefault,
}

/// What `close` should act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseTarget {
    /// A single overlay.
    Surface(SurfaceId),
    /// Every active overlay of the primary modal family.
    All,
}

#[derive(Debug, Clone)]
struct OpenEntry<E> {
    id: SurfaceId,
    family: Family,
    focus: FocusMemory<E>,
}

/// Overlay registry plus the session state that goes with it: the open
/// stack (most recent last), one focus memory per open overlay, and whether
/// page scrolling is locked.
#[derive(Debug, Clone)]
pub struct OverlayCore<E> {
    registry: Registry,
    open: Vec<OpenEntry<E>>,
    scroll_locked: bool,
    focus_delay_ms: u32,
}

impl<E> Default for OverlayCore<E> {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

impl<E> OverlayCore<E> {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { registry, open: Vec::new(), scroll_locked: false, focus_delay_ms: FOCUS_DELAY_MS }
    }

    /// Use the focus delay from `timing`.
    #[must_use]
    pub fn with_timing(mut self, timing: &Timing) -> Self {
        self.focus_delay_ms = timing.focus_delay_ms;
        self
    }

    /// Register an overlay after construction (markup rendered late).
    pub fn register(&mut self, overlay: Overlay) {
        self.registry.register(overlay);
    }

    // --- Queries ---

    #[must_use]
    pub fn is_active(&self, id: &SurfaceId) -> bool {
        self.open.iter().any(|entry| &entry.id == id)
    }

    /// Whether any active overlay sits on `backdrop`.
    #[must_use]
    pub fn is_backdrop_active(&self, backdrop: &SurfaceId) -> bool {
        self.open
            .iter()
            .filter_map(|entry| self.registry.get(&entry.id))
            .any(|overlay| &overlay.backdrop == backdrop)
    }

    /// The most recently opened overlay that is still active.
    #[must_use]
    pub fn top(&self) -> Option<&SurfaceId> {
        self.open.last().map(|entry| &entry.id)
    }

    /// Active overlays, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &SurfaceId> {
        self.open.iter().map(|entry| &entry.id)
    }

    #[must_use]
    pub fn any_active(&self) -> bool {
        !self.open.is_empty()
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl<E: Clone + PartialEq> OverlayCore<E> {
    // --- Transitions ---

    /// Activate `id`, remembering `focused` so it can be restored on close.
    ///
    /// Opening a primary modal first deactivates any other active primary
    /// modal, discarding its focus memory.
    pub fn open(&mut self, id: &SurfaceId, focused: Option<E>) -> Vec<Effect<E>> {
        let Some(overlay) = self.registry.get(id).cloned() else {
            return Vec::new();
        };
        if self.is_active(id) {
            return Vec::new();
        }

        let mut effects = Vec::new();
        let mut focus = FocusMemory::new();
        focus.capture(focused);

        if overlay.family == Family::Modal {
            let mut kept = Vec::with_capacity(self.open.len());
            for entry in self.open.drain(..) {
                if entry.family == Family::Modal {
                    log::debug!("overlay {} replaced by {}", entry.id, overlay.id);
                    effects.push(Effect::Hidden(entry.id));
                } else {
                    kept.push(entry);
                }
            }
            self.open = kept;
        }

        self.open.push(OpenEntry { id: overlay.id.clone(), family: overlay.family, focus });
        effects.push(Effect::Shown(overlay.id.clone()));
        if !self.scroll_locked {
            self.scroll_locked = true;
            effects.push(Effect::LockScroll);
        }
        if let Some(selector) = overlay.initial_focus {
            effects.push(Effect::FocusInitial { surface: overlay.id.clone(), selector, delay_ms: self.focus_delay_ms });
        }
        log::debug!("overlay {} opened ({} active)", overlay.id, self.open.len());
        effects
    }

    /// Deactivate the target, unlock scrolling once nothing is active, and
    /// return focus to where it was before the matching open.
    pub fn close(&mut self, target: &CloseTarget) -> Vec<Effect<E>> {
        let closed = match target {
            CloseTarget::Surface(id) => self.take_where(|entry| &entry.id == id),
            CloseTarget::All => self.take_where(|entry| entry.family == Family::Modal),
        };
        self.finish_close(closed)
    }

    /// Close whichever overlay was opened last (Escape).
    pub fn close_top(&mut self) -> Vec<Effect<E>> {
        match self.top().cloned() {
            Some(id) => self.close(&CloseTarget::Surface(id)),
            None => Vec::new(),
        }
    }

    /// A click landed directly on `backdrop` (not on overlay content).
    pub fn backdrop_click(&mut self, backdrop: &SurfaceId) -> Vec<Effect<E>> {
        let registry = &self.registry;
        let closed = Self::drain_where(&mut self.open, |entry| {
            registry
                .get(&entry.id)
                .is_some_and(|overlay| &overlay.backdrop == backdrop && overlay.close_on_backdrop)
        });
        self.finish_close(closed)
    }

    /// Confine Tab to the topmost overlay's focusable elements.
    ///
    /// `focusables` must be freshly queried from the overlay in document
    /// order.
    pub fn trap_tab(&self, focusables: &[E], focused: Option<&E>, shift: bool) -> Vec<Effect<E>> {
        if self.open.is_empty() {
            return Vec::new();
        }
        match cycle_target(focusables, focused, shift) {
            Some(target) => vec![Effect::PreventDefault, Effect::Focus(target)],
            None => Vec::new(),
        }
    }

    /// Close everything and return to the session-start state.
    pub fn reset(&mut self) -> Vec<Effect<E>> {
        let closed = std::mem::take(&mut self.open);
        self.finish_close(closed)
    }

    fn take_where(&mut self, pred: impl Fn(&OpenEntry<E>) -> bool) -> Vec<OpenEntry<E>> {
        Self::drain_where(&mut self.open, pred)
    }

    fn drain_where(open: &mut Vec<OpenEntry<E>>, pred: impl Fn(&OpenEntry<E>) -> bool) -> Vec<OpenEntry<E>> {
        let mut closed = Vec::new();
        let mut kept = Vec::with_capacity(open.len());
        for entry in open.drain(..) {
            if pred(&entry) {
                closed.push(entry);
            } else {
                kept.push(entry);
            }
        }
        *open = kept;
        closed
    }

    /// `closed` is oldest first. Focus goes back to what the oldest closed
    /// overlay captured.
    fn finish_close(&mut self, closed: Vec<OpenEntry<E>>) -> Vec<Effect<E>> {
        if closed.is_empty() {
            return Vec::new();
        }

        let mut effects = Vec::new();
        let mut restore = None;
        for mut entry in closed.into_iter().rev() {
            log::debug!("overlay {} closed", entry.id);
            if let Some(element) = entry.focus.take() {
                restore = Some(element);
            }
            effects.push(Effect::Hidden(entry.id));
        }
        if self.open.is_empty() && self.scroll_locked {
            self.scroll_locked = false;
            effects.push(Effect::UnlockScroll);
        }
        if let Some(element) = restore {
            effects.push(Effect::Focus(element));
        }
        effects
    }
}
