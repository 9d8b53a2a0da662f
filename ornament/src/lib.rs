//! Decorative hero ornament: a slowly turning wireframe icosahedron inside a
//! cloud of particles, draggable with mouse or touch.
//!
//! The ornament is pure decoration. If the canvas is missing or the browser
//! cannot give a 2D context, [`engine::mount`] returns an error and the page
//! simply goes without it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Surface`] capability, testable [`engine::OrnamentCore`], browser mount |
//! | [`geometry`] | Vectors, subdivided icosahedron wireframe, particle cloud |
//! | [`camera`] | Perspective projection onto the canvas |
//! | [`motion`] | Drag, auto-rotate and easing state |
//! | [`scene`] | Meshes, colors and per-frame projection |
//! | [`render`] | 2D canvas surface (the only module touching the context) |
//! | [`error`] | [`error::OrnamentError`] |
//! | [`consts`] | Tuning constants |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod render;
pub mod scene;
