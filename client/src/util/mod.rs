//! Browser glue shared by the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `folio` decides what should happen; these helpers make it happen in the
//! document. Everything touching `web_sys` is gated behind `csr` so the
//! crate still builds and tests natively.

pub mod config;
pub mod dom;
pub mod markdown;
pub mod notify;
pub mod reveal;
