//! Rotation state driven by drag gestures and an idle auto-rotate.
//!
//! Drag deltas move a target rotation; every frame the shown rotation eases a
//! fixed fraction of the way toward it.

use crate::consts::{AUTO_ROTATE_X, AUTO_ROTATE_Y, DRAG_SENSITIVITY, EASING, INNER_COUNTER_RATIO, PARTICLE_SPIN};

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// A pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euler rotation about x then y, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Motion {
    /// Last pointer position while a drag is in progress.
    drag: Option<Point>,
    target: Rotation,
    current: Rotation,
    particle_spin: f64,
}

impl Motion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.drag = Some(at);
    }

    /// Horizontal movement turns about y, vertical about x. Ignored unless a
    /// drag is in progress.
    pub fn pointer_move(&mut self, at: Point) {
        let Some(previous) = self.drag else {
            return;
        };
        self.target.y += (at.x - previous.x) * DRAG_SENSITIVITY;
        self.target.x += (at.y - previous.y) * DRAG_SENSITIVITY;
        self.drag = Some(at);
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Advance one animation frame.
    pub fn tick(&mut self) {
        if self.drag.is_none() {
            self.target.y += AUTO_ROTATE_Y;
            self.target.x += AUTO_ROTATE_X;
        }
        self.current.x += (self.target.x - self.current.x) * EASING;
        self.current.y += (self.target.y - self.current.y) * EASING;
        self.particle_spin += PARTICLE_SPIN;
    }

    #[must_use]
    pub fn target(&self) -> Rotation {
        self.target
    }

    /// Rotation of the outer mesh.
    #[must_use]
    pub fn outer(&self) -> Rotation {
        self.current
    }

    /// The inner mesh turns against the outer one, a little slower.
    #[must_use]
    pub fn inner(&self) -> Rotation {
        self.current.scale(INNER_COUNTER_RATIO)
    }

    /// Rotation of the particle cloud about y.
    #[must_use]
    pub fn particle_spin(&self) -> f64 {
        self.particle_spin
    }
}
