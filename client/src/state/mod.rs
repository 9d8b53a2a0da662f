//! Shared client-side state, provided through Leptos context by
//! [`crate::app::App`].

pub mod page;
pub mod reveal;
