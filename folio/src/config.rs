//! Timing configuration.
//!
//! Every delay and ratio the page uses lives in [`Timing`]. Defaults match the
//! constants in [`crate::consts`]; a host may override any subset of fields
//! from a JSON document (the client reads it from an inline
//! `<script type="application/json" id="folio-config">` block).

use serde::Deserialize;

use crate::consts::{
    BODY_TRAIL_MS, FOCUS_DELAY_MS, HEADING_GAP_MS, REVEAL_BOTTOM_INSET_PX, REVEAL_GRACE_MS, REVEAL_THRESHOLD,
    STAGGER_INITIAL_MS, STAGGER_STEP_MS,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Errors produced while reading a timing override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("timing config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reveal threshold must be in (0, 1], got {0}")]
    Threshold(f64),
}

/// Delays (milliseconds) and ratios driving focus and reveal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    pub focus_delay_ms: u32,
    pub reveal_grace_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_bottom_inset_px: u32,
    pub stagger_step_ms: u32,
    pub stagger_initial_ms: u32,
    pub heading_gap_ms: u32,
    pub body_trail_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            focus_delay_ms: FOCUS_DELAY_MS,
            reveal_grace_ms: REVEAL_GRACE_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_bottom_inset_px: REVEAL_BOTTOM_INSET_PX,
            stagger_step_ms: STAGGER_STEP_MS,
            stagger_initial_ms: STAGGER_INITIAL_MS,
            heading_gap_ms: HEADING_GAP_MS,
            body_trail_ms: BODY_TRAIL_MS,
        }
    }
}

impl Timing {
    /// Parse a JSON override. Fields left out keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or wrongly typed
    /// fields, and [`ConfigError::Threshold`] when the reveal threshold is
    /// outside `(0, 1]`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let timing: Self = serde_json::from_str(raw)?;
        timing.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(ConfigError::Threshold(self.reveal_threshold));
        }
        Ok(self)
    }

    /// `rootMargin` string for the viewport watch: the trigger region is the
    /// viewport with its bottom edge pulled up by the configured inset.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_inset_px)
    }
}
