//! Reveal state for the page: the one-way board plus the `--pop-delay`
//! values handed out by the stagger plan.

use std::collections::BTreeMap;

use folio::config::Timing;
use folio::reveal::{RevealBoard, StaggerPlan, Watch};
use leptos::prelude::*;

use crate::content;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Debug, Default)]
pub struct RevealState {
    pub board: RevealBoard<String>,
    pop_delays: BTreeMap<String, u32>,
}

impl RevealState {
    /// Board with every entry from [`content::reveal_entries`].
    #[must_use]
    pub fn standard() -> Self {
        let mut board = RevealBoard::new();
        for (key, zone) in content::reveal_entries() {
            board.register(key, zone);
        }
        Self { board, pop_delays: BTreeMap::new() }
    }

    /// Build the stagger plan and remember each entry's pop delay.
    pub fn schedule(&mut self, timing: &Timing) -> StaggerPlan<String> {
        let plan = self.board.stagger_plan(timing);
        for scheduled in plan.iter() {
            if let Some(delay) = scheduled.pop_delay_ms {
                self.pop_delays.insert(scheduled.key.clone(), delay);
            }
        }
        plan
    }

    #[must_use]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.board.is_revealed(&key.to_owned())
    }

    pub fn reveal(&mut self, key: &str) -> bool {
        self.board.reveal(&key.to_owned())
    }

    pub fn observe(&mut self, key: &str, is_intersecting: bool) -> Watch {
        self.board.observe(&key.to_owned(), is_intersecting)
    }

    /// Inline style carrying the element's `--pop-delay`, empty until scheduled.
    #[must_use]
    pub fn pop_style(&self, key: &str) -> String {
        self.pop_delays.get(key).map(|delay| format!("--pop-delay: {delay}ms")).unwrap_or_default()
    }
}

/// Reactive "is this entry visible" reader for `class:visible`.
pub fn revealed(reveal: RwSignal<RevealState>, key: &'static str) -> impl Fn() -> bool + Copy + 'static {
    move || reveal.with(|state| state.is_revealed(key))
}

/// Reactive `--pop-delay` style reader.
pub fn pop_style(reveal: RwSignal<RevealState>, key: &'static str) -> impl Fn() -> String + Copy + 'static {
    move || reveal.with(|state| state.pop_style(key))
}
