//! Vectors, the subdivided icosahedron wireframe and the particle cloud.

use std::collections::{BTreeSet, HashMap};

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Same direction, given length. The zero vector stays zero.
    #[must_use]
    pub fn with_length(self, length: f64) -> Self {
        let current = self.length();
        if current == 0.0 { self } else { self.scale(length / current) }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Rotate by Euler angles in XYZ order (z rotation is always zero here):
    /// about y first, then about x.
    #[must_use]
    pub fn rotate(self, rx: f64, ry: f64) -> Self {
        let (sin_y, cos_y) = ry.sin_cos();
        let x = self.x * cos_y + self.z * sin_y;
        let z = -self.x * sin_y + self.z * cos_y;

        let (sin_x, cos_x) = rx.sin_cos();
        let y = self.y * cos_x - z * sin_x;
        let z = self.y * sin_x + z * cos_x;
        Self::new(x, y, z)
    }
}

/// Vertices plus unique undirected edges.
#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Deduplicates vertices that land on the same spot after projection onto
/// the sphere, and collects triangle edges once each.
struct Builder {
    radius: f64,
    vertices: Vec<Vec3>,
    index: HashMap<(i64, i64, i64), usize>,
    edges: BTreeSet<(usize, usize)>,
}

impl Builder {
    fn vertex(&mut self, p: Vec3) -> usize {
        let p = p.with_length(self.radius);
        #[allow(clippy::cast_possible_truncation)]
        let key = ((p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64, (p.z * 1e6).round() as i64);
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        self.vertices.push(p);
        let i = self.vertices.len() - 1;
        self.index.insert(key, i);
        i
    }

    fn triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let ids = [self.vertex(a), self.vertex(b), self.vertex(c)];
        for (p, q) in [(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[0])] {
            self.edges.insert((p.min(q), p.max(q)));
        }
    }

    /// Split face `(a, b, c)` into `(detail + 1)^2` triangles.
    #[allow(clippy::cast_precision_loss)]
    fn subdivide(&mut self, a: Vec3, b: Vec3, c: Vec3, detail: u32) {
        let cols = detail as usize + 1;
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let aj = a.lerp(c, i as f64 / cols as f64);
            let bj = b.lerp(c, i as f64 / cols as f64);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| if rows == 0 { aj } else { aj.lerp(bj, j as f64 / rows as f64) })
                .collect();
            grid.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    self.triangle(grid[i][k + 1], grid[i + 1][k], grid[i][k]);
                } else {
                    self.triangle(grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]);
                }
            }
        }
    }
}

/// Icosahedron of `radius`, each face subdivided `detail` times, with every
/// vertex pushed onto the sphere.
#[must_use]
pub fn icosahedron(radius: f64, detail: u32) -> Wireframe {
    let corners = icosahedron_corners();
    let mut builder = Builder { radius, vertices: Vec::new(), index: HashMap::new(), edges: BTreeSet::new() };
    for [a, b, c] in ICOSAHEDRON_FACES {
        builder.subdivide(corners[a], corners[b], corners[c], detail);
    }
    Wireframe { vertices: builder.vertices, edges: builder.edges.into_iter().collect() }
}

/// `count` points scattered uniformly in a cube of side `spread` centered on
/// the origin. `random` yields values in `[0, 1)`.
#[must_use]
pub fn particle_cloud(count: usize, spread: f64, mut random: impl FnMut() -> f64) -> Vec<Vec3> {
    let mut coord = move || (random() - 0.5) * spread;
    (0..count)
        .map(|_| {
            let x = coord();
            let y = coord();
            let z = coord();
            Vec3::new(x, y, z)
        })
        .collect()
}
