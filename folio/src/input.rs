//! Input model: keys, modifiers and the synthetic events fed to
//! [`crate::dispatch::Page`].
//!
//! The host translates DOM events into [`UiEvent`]s. Element handles that
//! only the host can query (the focused element, an overlay's focusable
//! descendants) travel inside the event so the core never reaches back into
//! the document.

use crate::surface::SurfaceId;

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A keyboard key, as named by the browser (`"Escape"`, `"Tab"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    #[must_use]
    pub fn is_tab(&self) -> bool {
        self.0 == "Tab"
    }
}

/// Modifier keys held during a key press.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    #[must_use]
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// The second half of a dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Activation of a control.
    Click,
    /// A click whose target is the surface itself, not its content.
    BackdropClick,
    /// Escape key.
    Escape,
    /// Tab key, with or without Shift.
    Tab,
}

/// A UI event addressed to a surface.
#[derive(Debug, Clone)]
pub enum UiEvent<E> {
    Click {
        surface: SurfaceId,
        /// Element holding focus when the click happened.
        focused: Option<E>,
    },
    BackdropClick {
        surface: SurfaceId,
    },
    KeyDown {
        surface: SurfaceId,
        key: Key,
        modifiers: Modifiers,
        focused: Option<E>,
        /// Focusable descendants of the topmost overlay, in document order.
        focusables: Vec<E>,
    },
}

impl<E> UiEvent<E> {
    #[must_use]
    pub fn click(surface: impl Into<SurfaceId>, focused: Option<E>) -> Self {
        Self::Click { surface: surface.into(), focused }
    }

    #[must_use]
    pub fn backdrop(surface: impl Into<SurfaceId>) -> Self {
        Self::BackdropClick { surface: surface.into() }
    }

    /// Key press on the document.
    #[must_use]
    pub fn key(key: &str, modifiers: Modifiers, focused: Option<E>, focusables: Vec<E>) -> Self {
        Self::KeyDown { surface: SurfaceId::document(), key: Key::new(key), modifiers, focused, focusables }
    }

    #[must_use]
    pub fn surface(&self) -> &SurfaceId {
        match self {
            Self::Click { surface, .. } | Self::BackdropClick { surface } | Self::KeyDown { surface, .. } => surface,
        }
    }

    /// Dispatch kind, or `None` for keys the page does not handle.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Self::Click { .. } => Some(EventKind::Click),
            Self::BackdropClick { .. } => Some(EventKind::BackdropClick),
            Self::KeyDown { key, .. } if key.is_escape() => Some(EventKind::Escape),
            Self::KeyDown { key, .. } if key.is_tab() => Some(EventKind::Tab),
            Self::KeyDown { .. } => None,
        }
    }
}
