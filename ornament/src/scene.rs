//! The three scene objects and their projection into a drawable [`Frame`].

use crate::camera::{Perspective, Projected, Viewport};
use crate::consts::{
    ACCENT, ACCENT_LIGHT, DETAIL, INNER_OPACITY, INNER_RADIUS, OUTER_OPACITY, OUTER_RADIUS, PARTICLE_COUNT,
    PARTICLE_OPACITY, PARTICLE_SIZE, PARTICLE_SPREAD,
};
use crate::geometry::{Vec3, Wireframe, icosahedron, particle_cloud};
use crate::motion::{Motion, Rotation};

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Build from a `0xRRGGBB` literal.
    #[must_use]
    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self { r, g, b, a: alpha }
    }

    /// CSS `rgba()` string for canvas stroke and fill styles.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A wireframe mesh with its line color.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub wire: Wireframe,
    pub color: Rgba,
}

/// Projected line segments sharing one color.
#[derive(Debug, Clone)]
pub struct Stroke {
    pub color: Rgba,
    pub segments: Vec<(Projected, Projected)>,
}

/// A projected particle; `size` is its diameter in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Everything the surface draws for one animation frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub viewport: Viewport,
    pub strokes: Vec<Stroke>,
    pub dots: Vec<Dot>,
    pub dot_color: Rgba,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Perspective,
    pub outer: Mesh,
    pub inner: Mesh,
    pub particles: Vec<Vec3>,
    pub particle_color: Rgba,
}

impl Scene {
    /// Build the standard scene. `random` places the particles.
    pub fn new(random: impl FnMut() -> f64) -> Self {
        Self {
            camera: Perspective::default(),
            outer: Mesh { wire: icosahedron(OUTER_RADIUS, DETAIL), color: Rgba::from_hex(ACCENT, OUTER_OPACITY) },
            inner: Mesh {
                wire: icosahedron(INNER_RADIUS, DETAIL),
                color: Rgba::from_hex(ACCENT_LIGHT, INNER_OPACITY),
            },
            particles: particle_cloud(PARTICLE_COUNT, PARTICLE_SPREAD, random),
            particle_color: Rgba::from_hex(ACCENT, PARTICLE_OPACITY),
        }
    }

    /// Project the scene for the current motion state. Segments with an
    /// endpoint outside the clip range are dropped.
    #[must_use]
    pub fn frame(&self, motion: &Motion, viewport: Viewport) -> Frame {
        let strokes = vec![
            self.stroke(&self.inner, motion.inner(), viewport),
            self.stroke(&self.outer, motion.outer(), viewport),
        ];
        let spin = Rotation::new(0.0, motion.particle_spin());
        let dots = self
            .particles
            .iter()
            .filter_map(|p| self.camera.project(p.rotate(spin.x, spin.y), viewport))
            .map(|p| Dot { x: p.x, y: p.y, size: self.camera.point_size(PARTICLE_SIZE, p.depth, viewport) })
            .collect();
        Frame { viewport, strokes, dots, dot_color: self.particle_color }
    }

    fn stroke(&self, mesh: &Mesh, rotation: Rotation, viewport: Viewport) -> Stroke {
        let projected: Vec<Option<Projected>> = mesh
            .wire
            .vertices
            .iter()
            .map(|v| self.camera.project(v.rotate(rotation.x, rotation.y), viewport))
            .collect();
        let segments = mesh
            .wire
            .edges
            .iter()
            .filter_map(|&(a, b)| Some((projected[a]?, projected[b]?)))
            .collect();
        Stroke { color: mesh.color, segments }
    }
}
