//! Tuning constants for the ornament.

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in degrees.
pub const FOV_DEG: f64 = 50.0;

/// Near clipping distance.
pub const NEAR: f64 = 0.1;

/// Far clipping distance.
pub const FAR: f64 = 1000.0;

/// Distance of the camera from the origin along +z.
pub const CAMERA_DISTANCE: f64 = 7.0;

/// Upper bound on the device pixel ratio used for the backing store.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// ── Meshes ──────────────────────────────────────────────────────

/// Outer wireframe radius.
pub const OUTER_RADIUS: f64 = 2.5;

/// Inner wireframe radius.
pub const INNER_RADIUS: f64 = 1.8;

/// Icosahedron subdivision level for both meshes.
pub const DETAIL: u32 = 1;

/// Accent blue (`#3b82f6`).
pub const ACCENT: u32 = 0x003b_82f6;

/// Light accent blue (`#93c5fd`).
pub const ACCENT_LIGHT: u32 = 0x0093_c5fd;

pub const OUTER_OPACITY: f64 = 0.8;
pub const INNER_OPACITY: f64 = 0.4;

// ── Particles ───────────────────────────────────────────────────

pub const PARTICLE_COUNT: usize = 50;

/// Side of the cube the particles are scattered in.
pub const PARTICLE_SPREAD: f64 = 8.0;

/// Particle size in world units.
pub const PARTICLE_SIZE: f64 = 0.05;

pub const PARTICLE_OPACITY: f64 = 0.6;

// ── Motion (per frame) ──────────────────────────────────────────

/// Radians of rotation per pixel of drag.
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Auto-rotation about y while idle.
pub const AUTO_ROTATE_Y: f64 = 0.003;

/// Auto-rotation about x while idle.
pub const AUTO_ROTATE_X: f64 = 0.001;

/// Fraction of the remaining distance to the target covered each frame.
pub const EASING: f64 = 0.05;

/// Inner mesh rotation as a multiple of the outer one.
pub const INNER_COUNTER_RATIO: f64 = -0.7;

/// Particle cloud spin about y.
pub const PARTICLE_SPIN: f64 = 0.001;
