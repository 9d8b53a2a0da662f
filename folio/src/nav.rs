//! Mobile navigation menu and in-page anchors.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Collapsible navigation menu state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    expanded: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu open or closed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Collapse the menu. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    #[must_use]
    pub fn expanded(self) -> bool {
        self.expanded
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

/// Element id an in-page link should smooth-scroll to.
///
/// `"#about"` yields `Some("about")`. A bare `"#"` and links that leave the
/// page yield `None` and are left to the browser.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
