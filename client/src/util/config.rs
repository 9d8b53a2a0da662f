//! Timing configuration read from the page.
//!
//! The host page may carry a `<script type="application/json" id="folio-config">`
//! block. A missing block means defaults; a malformed one is reported once
//! and ignored.

use folio::config::Timing;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Parse an optional raw config block, falling back to defaults.
pub fn timing_from(raw: Option<&str>) -> Timing {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Timing::default();
    };
    match Timing::from_json(raw) {
        Ok(timing) => timing,
        Err(err) => {
            leptos::logging::warn!("ignoring page timing config: {err}");
            Timing::default()
        }
    }
}

/// Read timing from the document, or defaults outside a browser.
pub fn load_timing() -> Timing {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(folio::consts::CONFIG_SCRIPT))
            .and_then(|el| el.text_content());
        timing_from(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Timing::default()
    }
}
