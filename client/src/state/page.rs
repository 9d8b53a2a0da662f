//! The page session signal and the lightbox image.

use folio::dispatch::Page;
use leptos::prelude::*;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Element handle carried through focus effects.
#[cfg(feature = "csr")]
pub type FocusTarget = web_sys::HtmlElement;

/// Without a browser there is nothing to focus.
#[cfg(not(feature = "csr"))]
pub type FocusTarget = ();

/// Page session signal. Element handles are not `Send`, so it is local.
pub type PageSignal = RwSignal<Page<FocusTarget>, LocalStorage>;

/// Image currently shown by the lightbox.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

impl LightboxImage {
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}
