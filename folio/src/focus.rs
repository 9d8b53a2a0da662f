//! Focus memory and Tab cycling.
//!
//! The host passes element handles in; nothing here touches the DOM. `E` is
//! whatever the host uses to identify an element (`web_sys::HtmlElement` in
//! the browser, plain labels in tests).

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

/// Elements that take part in Tab cycling inside an overlay. Re-queried on
/// every Tab press because overlay content can change.
pub const FOCUSABLE_SELECTOR: &str = r#"button:not([tabindex^="-"]), [href]:not([tabindex^="-"]), input:not([tabindex^="-"]), select:not([tabindex^="-"]), textarea:not([tabindex^="-"]), [tabindex]:not([tabindex^="-"])"#;

/// The element that held focus just before an overlay opened.
///
/// Filled once per open transition and consumed once by the matching close.
#[derive(Debug, Clone)]
pub struct FocusMemory<E> {
    slot: Option<E>,
}

impl<E> Default for FocusMemory<E> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<E> FocusMemory<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `focused`, replacing anything held before.
    pub fn capture(&mut self, focused: Option<E>) {
        self.slot = focused;
    }

    /// Hand back the remembered element and clear the slot.
    pub fn take(&mut self) -> Option<E> {
        self.slot.take()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&E> {
        self.slot.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

/// Where Tab should land instead of the browser default, if anywhere.
///
/// Shift+Tab on the first focusable wraps to the last; Tab on the last wraps
/// to the first. Everything else passes through (`None`).
#[must_use]
pub fn cycle_target<E: Clone + PartialEq>(focusables: &[E], focused: Option<&E>, shift: bool) -> Option<E> {
    let (first, last) = (focusables.first()?, focusables.last()?);
    let focused = focused?;
    if shift && focused == first {
        Some(last.clone())
    } else if !shift && focused == last {
        Some(first.clone())
    } else {
        None
    }
}
