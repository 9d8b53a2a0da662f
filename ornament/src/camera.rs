use crate::consts::{CAMERA_DISTANCE, FAR, FOV_DEG, MAX_PIXEL_RATIO, NEAR};
use crate::geometry::Vec3;

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// Canvas size in CSS pixels plus the pixel ratio of the backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// `device_pixel_ratio` is capped at [`MAX_PIXEL_RATIO`].
    #[must_use]
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self { width, height, pixel_ratio: device_pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO) }
    }

    /// Width over height; a collapsed canvas reports 1.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.width > 0.0 && self.height > 0.0 { self.width / self.height } else { 1.0 }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Backing store size in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round().max(0.0) as u32,
            (self.height * self.pixel_ratio).round().max(0.0) as u32,
        )
    }
}

/// A projected point in CSS pixels, with its distance in front of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Perspective camera on the +z axis looking at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Perspective {
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    pub distance: f64,
}

impl Default for Perspective {
    fn default() -> Self {
        Self { fov_deg: FOV_DEG, near: NEAR, far: FAR, distance: CAMERA_DISTANCE }
    }
}

impl Perspective {
    /// Focal scale derived from the vertical field of view.
    fn focal(&self) -> f64 {
        1.0 / (self.fov_deg.to_radians() / 2.0).tan()
    }

    /// Project a world point onto the viewport. Points outside the near/far
    /// range yield `None`.
    #[must_use]
    pub fn project(&self, point: Vec3, viewport: Viewport) -> Option<Projected> {
        let depth = self.distance - point.z;
        if depth <= self.near || depth >= self.far {
            return None;
        }
        let f = self.focal();
        let ndc_x = f / viewport.aspect() * point.x / depth;
        let ndc_y = f * point.y / depth;
        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * viewport.width,
            y: (1.0 - ndc_y) / 2.0 * viewport.height,
            depth,
        })
    }

    /// On-screen diameter in CSS pixels of a point sprite of `size` world
    /// units at `depth`.
    #[must_use]
    pub fn point_size(&self, size: f64, depth: f64, viewport: Viewport) -> f64 {
        size * (viewport.height / 2.0) / depth
    }
}
