//! The floating decorative bodies and their per-frame transforms.

use std::f32::consts::TAU;

use super::{
    geometry::{self, Wireframe},
    math::{Euler, Vec3},
};

/// Pointer position normalized to `[-1, 1]` on both axes, `y` pointing up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.0, y: 0.0 };

    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Pointer {
        if width <= 0.0 || height <= 0.0 {
            return Pointer::CENTER;
        }
        let x = (client_x / width) * 2.0 - 1.0;
        let y = -(client_y / height) * 2.0 + 1.0;
        Pointer {
            x: (x as f32).clamp(-1.0, 1.0),
            y: (y as f32).clamp(-1.0, 1.0),
        }
    }

    fn along(self, axis: PointerAxis) -> f32 {
        match axis {
            PointerAxis::X => self.x,
            PointerAxis::Y => self.y,
        }
    }
}

/// Gentle bob and sway applied around a body's local origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatMotion {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    /// Returns the sway rotation and the vertical offset at time `t`.
    pub fn sample(&self, t: f32) -> (Euler, f32) {
        let phase = t / 4.0 * self.speed;
        let (s, c) = phase.sin_cos();
        let sway = Euler::new(
            c / 8.0 * self.rotation_intensity,
            s / 8.0 * self.rotation_intensity,
            s / 20.0 * self.rotation_intensity,
        );
        let bob = s / 10.0 * self.float_intensity;
        (sway, bob)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAxis {
    X,
    Y,
}

/// `angle(axis) = t * rate + pointer(follows) * gain`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Axis,
    pub rate: f32,
    pub follows: PointerAxis,
    pub gain: f32,
}

const fn spin(axis: Axis, rate: f32, follows: PointerAxis, gain: f32) -> Spin {
    Spin {
        axis,
        rate,
        follows,
        gain,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Icosahedron { radius: f32 },
    TorusKnot { radius: f32, tube: f32, p: u32, q: u32 },
    Sphere { radius: f32 },
    Octahedron { radius: f32 },
    Torus { radius: f32, tube: f32 },
    Dodecahedron { radius: f32 },
}

impl Shape {
    pub fn wireframe(self) -> Wireframe {
        match self {
            Shape::Icosahedron { radius } => geometry::icosahedron(radius),
            Shape::TorusKnot { radius, tube, p, q } => {
                geometry::torus_knot(radius, tube, 96, 6, p, q)
            }
            Shape::Sphere { radius } => geometry::uv_sphere(radius, 16, 12),
            Shape::Octahedron { radius } => geometry::octahedron(radius),
            Shape::Torus { radius, tube } => geometry::torus(radius, tube, 10, 48),
            Shape::Dodecahedron { radius } => geometry::dodecahedron(radius),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub rate: f32,
    pub amplitude: f32,
}

/// Surface wobble: radial scale `1 ± 0.15 * amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distort {
    pub amount: f32,
    pub speed: f32,
}

impl Distort {
    pub fn apply(&self, v: Vec3, t: f32) -> Vec3 {
        let phase = v.x * 1.7 + v.y * 2.3 + v.z * 1.3;
        v * (1.0 + self.amount * 0.15 * (self.speed * t * 2.0 + phase).sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    pub shape: Shape,
    pub position: Vec3,
    pub color: &'static str,
    pub spin: [Spin; 2],
    pub float: FloatMotion,
    pub distort: Distort,
    pub pulse: Option<Pulse>,
}

pub const BODIES: [BodySpec; 6] = [
    BodySpec {
        name: "icosahedron",
        shape: Shape::Icosahedron { radius: 1.2 },
        position: Vec3::new(-3.0, 1.0, -2.0),
        color: "#00ffff",
        spin: [
            spin(Axis::X, 0.15, PointerAxis::Y, 0.1),
            spin(Axis::Y, 0.2, PointerAxis::X, 0.1),
        ],
        float: FloatMotion::new(1.5, 0.5, 0.8),
        distort: Distort {
            amount: 0.3,
            speed: 1.2,
        },
        pulse: None,
    },
    BodySpec {
        name: "torus-knot",
        shape: Shape::TorusKnot {
            radius: 1.0,
            tube: 0.3,
            p: 2,
            q: 3,
        },
        position: Vec3::new(3.0, -1.0, -3.0),
        color: "#a855f7",
        spin: [
            spin(Axis::X, 0.1, PointerAxis::X, 0.15),
            spin(Axis::Y, 0.15, PointerAxis::Y, 0.1),
        ],
        float: FloatMotion::new(2.0, 0.8, 1.0),
        distort: Distort {
            amount: 0.25,
            speed: 1.0,
        },
        pulse: None,
    },
    BodySpec {
        name: "sphere",
        shape: Shape::Sphere { radius: 1.5 },
        position: Vec3::new(0.0, -2.0, -4.0),
        color: "#ff66d9",
        spin: [
            spin(Axis::X, 0.08, PointerAxis::Y, 0.15),
            spin(Axis::Y, 0.08, PointerAxis::X, 0.15),
        ],
        float: FloatMotion::new(1.8, 0.3, 0.6),
        distort: Distort {
            amount: 0.3,
            speed: 1.2,
        },
        pulse: Some(Pulse {
            rate: 1.0,
            amplitude: 0.1,
        }),
    },
    BodySpec {
        name: "octahedron",
        shape: Shape::Octahedron { radius: 1.0 },
        position: Vec3::new(2.0, 2.0, -5.0),
        color: "#06b6d4",
        spin: [
            spin(Axis::X, 0.25, PointerAxis::X, 0.2),
            spin(Axis::Z, 0.15, PointerAxis::Y, 0.15),
        ],
        float: FloatMotion::new(2.2, 1.0, 1.2),
        distort: Distort {
            amount: 0.3,
            speed: 1.3,
        },
        pulse: None,
    },
    BodySpec {
        name: "torus",
        shape: Shape::Torus {
            radius: 1.2,
            tube: 0.4,
        },
        position: Vec3::new(-2.0, 1.0, -6.0),
        color: "#ec4899",
        spin: [
            spin(Axis::X, 0.2, PointerAxis::Y, 0.12),
            spin(Axis::Y, 0.1, PointerAxis::X, 0.12),
        ],
        float: FloatMotion::new(1.6, 0.6, 0.9),
        distort: Distort {
            amount: 0.2,
            speed: 1.0,
        },
        pulse: None,
    },
    BodySpec {
        name: "dodecahedron",
        shape: Shape::Dodecahedron { radius: 0.8 },
        position: Vec3::new(0.0, 3.0, -4.0),
        color: "#8b5cf6",
        spin: [
            spin(Axis::X, 0.12, PointerAxis::X, 0.17),
            spin(Axis::Y, 0.17, PointerAxis::Y, 0.12),
        ],
        float: FloatMotion::new(1.4, 0.4, 0.7),
        distort: Distort {
            amount: 0.25,
            speed: 1.1,
        },
        pulse: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: f32,
    pub sway: Euler,
    pub bob: f32,
}

impl BodyTransform {
    /// Local mesh vertex to world space.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let local = self.position + self.rotation.rotate(v * self.scale);
        self.sway.rotate(local) + Vec3::new(0.0, self.bob, 0.0)
    }

    pub fn center(&self) -> Vec3 {
        self.apply(Vec3::ZERO)
    }
}

impl BodySpec {
    pub fn transform(&self, t: f32, pointer: Pointer) -> BodyTransform {
        let mut rotation = Euler::default();
        for s in self.spin {
            let angle = t * s.rate + pointer.along(s.follows) * s.gain;
            match s.axis {
                Axis::X => rotation.x = angle,
                Axis::Y => rotation.y = angle,
                Axis::Z => rotation.z = angle,
            }
        }
        let scale = self
            .pulse
            .map_or(1.0, |p| 1.0 + (t * p.rate).sin() * p.amplitude);
        let (sway, bob) = self.float.sample(t);
        BodyTransform {
            position: self.position,
            rotation,
            scale,
            sway,
            bob,
        }
    }
}

/// Every body's transform at time `t` for the given pointer.
pub fn body_transforms(t: f32, pointer: Pointer) -> Vec<BodyTransform> {
    BODIES.iter().map(|b| b.transform(t, pointer)).collect()
}

pub const HELIX_ORIGIN: Vec3 = Vec3::new(-4.0, -1.0, -7.0);
pub const HELIX_BEADS: usize = 20;
pub const HELIX_BEAD_RADIUS: f32 = 0.1;
const HELIX_COLORS: [&str; 2] = ["#00ffff", "#a855f7"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bead {
    pub position: Vec3,
    pub color: &'static str,
}

/// The double-helix bead chain in world space.
pub fn helix_beads(t: f32, pointer: Pointer) -> Vec<Bead> {
    let group_rotation = Euler::new(0.0, t * 0.15 + pointer.x * 0.1, 0.0);
    let group_position = HELIX_ORIGIN + Vec3::new(0.0, (t * 0.3).sin() * 0.2, 0.0);
    (0..HELIX_BEADS)
        .map(|i| {
            let fraction = i as f32 / HELIX_BEADS as f32;
            let angle = fraction * 2.0 * TAU;
            let local = Vec3::new(angle.cos() * 0.5, fraction * 4.0 - 2.0, angle.sin() * 0.5);
            let (sway, bob) = FloatMotion::new(1.0 + i as f32 * 0.1, 0.2, 0.3).sample(t);
            let floated = sway.rotate(local) + Vec3::new(0.0, bob, 0.0);
            Bead {
                position: group_position + group_rotation.rotate(floated),
                color: HELIX_COLORS[i % 2],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_normalization() {
        assert_eq!(
            Pointer::from_client(0.0, 0.0, 800.0, 600.0),
            Pointer { x: -1.0, y: 1.0 }
        );
        assert_eq!(
            Pointer::from_client(400.0, 300.0, 800.0, 600.0),
            Pointer::CENTER
        );
        assert_eq!(
            Pointer::from_client(800.0, 600.0, 800.0, 600.0),
            Pointer { x: 1.0, y: -1.0 }
        );
        // outside the viewport and degenerate sizes stay in range
        assert_eq!(
            Pointer::from_client(1600.0, -10.0, 800.0, 600.0),
            Pointer { x: 1.0, y: 1.0 }
        );
        assert_eq!(Pointer::from_client(5.0, 5.0, 0.0, 600.0), Pointer::CENTER);
    }

    #[test]
    fn test_six_bodies() {
        assert_eq!(BODIES.len(), 6);
        assert_eq!(body_transforms(0.0, Pointer::CENTER).len(), 6);
        assert_eq!(BODIES.iter().filter(|b| b.pulse.is_some()).count(), 1);
    }

    #[test]
    fn test_rotation_rule() {
        let ico = &BODIES[0];
        let at_rest = ico.transform(10.0, Pointer::CENTER);
        assert!((at_rest.rotation.x - 1.5).abs() < 1e-5);
        assert!((at_rest.rotation.y - 2.0).abs() < 1e-5);
        assert_eq!(at_rest.rotation.z, 0.0);

        let pointed = ico.transform(10.0, Pointer { x: 1.0, y: -1.0 });
        assert!((pointed.rotation.x - 1.4).abs() < 1e-5);
        assert!((pointed.rotation.y - 2.1).abs() < 1e-5);

        let octa = &BODIES[3];
        let r = octa.transform(2.0, Pointer { x: 0.5, y: 0.0 }).rotation;
        assert!((r.x - 0.6).abs() < 1e-5);
        assert!((r.z - 0.3).abs() < 1e-5);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn test_sphere_pulse_bounded() {
        let sphere = &BODIES[2];
        for step in 0..2000 {
            let t = step as f32 * 0.05;
            let scale = sphere.transform(t, Pointer::CENTER).scale;
            assert!((0.9 - 1e-6..=1.1 + 1e-6).contains(&scale));
        }
        assert!((sphere.transform(std::f32::consts::FRAC_PI_2, Pointer::CENTER).scale - 1.1).abs() < 1e-5);
        assert_eq!(BODIES[0].transform(3.0, Pointer::CENTER).scale, 1.0);
    }

    #[test]
    fn test_transforms_continuous_and_bounded() {
        let pointer = Pointer { x: 0.3, y: -0.7 };
        for step in 0..500 {
            let t = step as f32 * 0.1;
            let now = body_transforms(t, pointer);
            let next = body_transforms(t + 1.0 / 60.0, pointer);
            for ((a, b), body) in now.iter().zip(&next).zip(&BODIES) {
                assert!(a.rotation.is_finite());
                // one frame never moves a body's center far
                assert!(a.center().distance(b.center()) < 0.05);
                // bobbing stays near the anchor
                assert!(a.center().distance(body.position) < body.position.length() * 0.35 + 0.2);
            }
        }
    }

    #[test]
    fn test_float_motion() {
        let motion = FloatMotion::new(2.0, 1.0, 1.0);
        let (sway, bob) = motion.sample(0.0);
        assert!((sway.x - 0.125).abs() < 1e-6);
        assert!(sway.y.abs() < 1e-6);
        assert!(bob.abs() < 1e-6);
        for step in 0..100 {
            let (sway, bob) = motion.sample(step as f32 * 0.37);
            assert!(sway.x.abs() <= 0.125 + 1e-6);
            assert!(sway.z.abs() <= 0.05 + 1e-6);
            assert!(bob.abs() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn test_distort_bounded() {
        let distort = Distort {
            amount: 0.3,
            speed: 1.2,
        };
        let v = Vec3::new(0.0, 1.0, 0.0);
        for step in 0..100 {
            let len = distort.apply(v, step as f32 * 0.1).length();
            assert!((len - 1.0).abs() <= 0.045 + 1e-6);
        }
    }

    #[test]
    fn test_helix() {
        let beads = helix_beads(0.0, Pointer::CENTER);
        assert_eq!(beads.len(), HELIX_BEADS);
        assert_eq!(beads[0].color, "#00ffff");
        assert_eq!(beads[1].color, "#a855f7");
        for bead in &beads {
            assert!(bead.position.distance(HELIX_ORIGIN) < 2.6);
        }
    }

    #[test]
    fn test_wireframes_build() {
        for body in &BODIES {
            let wireframe = body.shape.wireframe();
            assert!(!wireframe.vertices.is_empty(), "{} has no vertices", body.name);
            assert!(!wireframe.edges.is_empty(), "{} has no edges", body.name);
        }
    }
}
