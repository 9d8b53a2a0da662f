//! Presentation core for the portfolio page.
//!
//! This crate holds every piece of page behavior that can be decided without
//! a browser: which overlay is open, where keyboard focus goes, when an
//! element is revealed, and whether the contact form is acceptable. The
//! `client` crate owns the DOM. It feeds input events in and applies the
//! [`engine::Effect`]s that come back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Overlay context object ([`engine::OverlayCore`]) and its effects |
//! | [`surface`] | Overlay identifiers, families and the registry |
//! | [`focus`] | Focus memory and Tab cycling |
//! | [`input`] | Keys, modifiers and synthetic UI events |
//! | [`dispatch`] | `(surface, event kind)` dispatch table and the [`dispatch::Page`] host |
//! | [`nav`] | Mobile navigation menu and in-page anchors |
//! | [`reveal`] | One-way reveal flags, viewport watch and staggered pop-in |
//! | [`form`] | Contact form validation and acknowledgment |
//! | [`config`] | Timing configuration |
//! | [`consts`] | Default timings and well-known surface names |

pub mod config;
pub mod consts;
pub mod dispatch;
pub mod engine;
pub mod focus;
pub mod form;
pub mod input;
pub mod nav;
pub mod reveal;
pub mod surface;
