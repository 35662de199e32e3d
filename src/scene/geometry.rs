//! Procedural wireframes for the floating background bodies.

use std::f32::consts::{PI, TAU};

use super::math::Vec3;

const PHI: f32 = 1.618_034;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

impl Wireframe {
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}

/// Connects every vertex pair that sits `edge` apart. Works for the regular
/// solids, where all edges share one length and no diagonal matches it.
fn connect_by_length(vertices: Vec<Vec3>, edge: f32, radius: f32) -> Wireframe {
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if (vertices[i].distance(vertices[j]) - edge).abs() < edge * 1e-3 {
                edges.push((i, j));
            }
        }
    }
    let vertices = vertices
        .into_iter()
        .map(|v| v.normalize() * radius)
        .collect();
    Wireframe { vertices, edges }
}

fn signs() -> [f32; 2] {
    [1.0, -1.0]
}

pub fn octahedron(radius: f32) -> Wireframe {
    let vertices = vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    connect_by_length(vertices, 2.0_f32.sqrt(), radius)
}

pub fn icosahedron(radius: f32) -> Wireframe {
    let mut vertices = Vec::with_capacity(12);
    for a in signs() {
        for b in signs() {
            vertices.push(Vec3::new(a, b * PHI, 0.0));
            vertices.push(Vec3::new(0.0, a, b * PHI));
            vertices.push(Vec3::new(b * PHI, 0.0, a));
        }
    }
    connect_by_length(vertices, 2.0, radius)
}

pub fn dodecahedron(radius: f32) -> Wireframe {
    let inv = 1.0 / PHI;
    let mut vertices = Vec::with_capacity(20);
    for a in signs() {
        for b in signs() {
            for c in signs() {
                vertices.push(Vec3::new(a, b, c));
            }
            vertices.push(Vec3::new(0.0, a * inv, b * PHI));
            vertices.push(Vec3::new(a * inv, b * PHI, 0.0));
            vertices.push(Vec3::new(a * PHI, 0.0, b * inv));
        }
    }
    connect_by_length(vertices, 2.0 * inv, radius)
}

/// Wraps a `rows x cols` vertex grid into edges, closing rows and/or columns.
fn grid_edges(rows: usize, cols: usize, wrap_rows: bool, wrap_cols: bool) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let here = r * cols + c;
            if c + 1 < cols || wrap_cols {
                edges.push((here, r * cols + (c + 1) % cols));
            }
            if r + 1 < rows || wrap_rows {
                edges.push((here, ((r + 1) % rows) * cols + c));
            }
        }
    }
    edges
}

pub fn uv_sphere(radius: f32, width_segments: usize, height_segments: usize) -> Wireframe {
    let rings = height_segments.saturating_sub(1).max(1);
    let mut vertices = Vec::with_capacity(rings * width_segments + 2);
    for ring in 1..=rings {
        let theta = ring as f32 / height_segments as f32 * PI;
        for seg in 0..width_segments {
            let phi = seg as f32 / width_segments as f32 * TAU;
            vertices.push(Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }
    let mut edges = grid_edges(rings, width_segments, false, true);

    let north = vertices.len();
    vertices.push(Vec3::new(0.0, radius, 0.0));
    let south = vertices.len();
    vertices.push(Vec3::new(0.0, -radius, 0.0));
    for seg in 0..width_segments {
        edges.push((north, seg));
        edges.push((south, (rings - 1) * width_segments + seg));
    }
    Wireframe { vertices, edges }
}

pub fn torus(radius: f32, tube: f32, radial_segments: usize, tubular_segments: usize) -> Wireframe {
    let mut vertices = Vec::with_capacity(radial_segments * tubular_segments);
    for j in 0..radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let ring = radius + tube * v.cos();
            vertices.push(Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin()));
        }
    }
    Wireframe {
        vertices,
        edges: grid_edges(radial_segments, tubular_segments, true, true),
    }
}

fn torus_knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// A `(p, q)` torus knot swept by a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: usize,
    radial_segments: usize,
    p: u32,
    q: u32,
) -> Wireframe {
    let (p, q) = (p as f32, q as f32);
    let mut vertices = Vec::with_capacity(tubular_segments * radial_segments);
    for i in 0..tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let p1 = torus_knot_curve(u, p, q, radius);
        let p2 = torus_knot_curve(u + 0.01, p, q, radius);

        // frame around the curve
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize();
        let n = b.cross(t).normalize();

        for j in 0..radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            vertices.push(p1 + n * cx + b * cy);
        }
    }
    Wireframe {
        vertices,
        edges: grid_edges(tubular_segments, radial_segments, true, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_on_sphere(w: &Wireframe, radius: f32) {
        for v in &w.vertices {
            assert!((v.length() - radius).abs() < 1e-4, "{v:?} not on sphere");
        }
    }

    fn assert_valid_edges(w: &Wireframe) {
        for &(a, b) in &w.edges {
            assert!(a < w.vertices.len() && b < w.vertices.len());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_platonic_solids() {
        let octa = octahedron(1.0);
        assert_eq!(octa.vertices.len(), 6);
        assert_eq!(octa.edges.len(), 12);
        assert_on_sphere(&octa, 1.0);

        let ico = icosahedron(1.2);
        assert_eq!(ico.vertices.len(), 12);
        assert_eq!(ico.edges.len(), 30);
        assert_on_sphere(&ico, 1.2);

        let dodeca = dodecahedron(0.8);
        assert_eq!(dodeca.vertices.len(), 20);
        assert_eq!(dodeca.edges.len(), 30);
        assert_on_sphere(&dodeca, 0.8);
    }

    #[test]
    fn test_sphere() {
        let sphere = uv_sphere(1.5, 16, 12);
        assert_eq!(sphere.vertices.len(), 11 * 16 + 2);
        assert_on_sphere(&sphere, 1.5);
        assert_valid_edges(&sphere);
    }

    #[test]
    fn test_torus() {
        let t = torus(1.2, 0.4, 10, 48);
        assert_eq!(t.vertices.len(), 480);
        assert_eq!(t.edges.len(), 960);
        assert_valid_edges(&t);
        assert!(t.bounding_radius() <= 1.6 + 1e-4);
    }

    #[test]
    fn test_torus_knot() {
        let knot = torus_knot(1.0, 0.3, 96, 6, 2, 3);
        assert_eq!(knot.vertices.len(), 96 * 6);
        assert_valid_edges(&knot);
        assert!(knot.vertices.iter().all(|v| v.is_finite()));
        // curve stays within (2 + 1) * 0.5 * radius plus the tube
        assert!(knot.bounding_radius() <= 1.5 + 0.3 + 1e-3);
    }
}
