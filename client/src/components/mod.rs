//! Page sections and overlay surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections read the page and reveal signals from context. Controls never
//! change overlay state directly: they send a `UiEvent` through
//! [`crate::util::dom::run`] and render whatever the page reports.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod lightbox;
pub mod nav;
pub mod parts_panel;
pub mod project_modal;
pub mod projects;
pub mod resume_panel;
