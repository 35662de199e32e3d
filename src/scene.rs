//! Decorative background scene: a drifting particle cloud, six floating
//! wireframe solids and a bead helix, reacting to the pointer.
//!
//! Everything here is plain math so a frame can be sampled at a fixed time and
//! pointer. The canvas binding in `app::background` only replays the
//! [`DrawList`] produced by [`Scene::frame`].

pub mod bodies;
pub mod camera;
pub mod geometry;
pub mod math;
pub mod particles;
pub mod projection;

use bodies::{body_transforms, helix_beads, Pointer, BODIES, HELIX_BEAD_RADIUS};
use camera::{CameraRig, FOV_DEGREES};
use geometry::Wireframe;
use particles::{ParticleField, PALETTE, PARTICLE_COUNT};
use projection::{fog_alpha, Projector};

const PARTICLE_SIZE: f32 = 0.04;
const PARTICLE_OPACITY: f32 = 0.5;
const MESH_OPACITY: f32 = 0.55;
const PARTICLE_SEED: u64 = 0x5eed_2025;

#[derive(Debug, Clone, PartialEq)]
pub struct MeshStroke {
    pub color: &'static str,
    pub alpha: f32,
    pub segments: Vec<[(f32, f32); 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: &'static str,
    pub alpha: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub meshes: Vec<MeshStroke>,
    pub particles: Vec<Sprite>,
    pub beads: Vec<Sprite>,
}

pub struct Scene {
    wireframes: Vec<Wireframe>,
    particles: ParticleField,
    camera: CameraRig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(PARTICLE_COUNT, PARTICLE_SEED)
    }
}

impl Scene {
    pub fn new(particle_count: usize, seed: u64) -> Self {
        Self {
            wireframes: BODIES.iter().map(|b| b.shape.wireframe()).collect(),
            particles: ParticleField::new(particle_count, seed),
            camera: CameraRig::default(),
        }
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Advances the retained state (particle buffer, camera easing) by one
    /// frame and returns what to draw on a `width x height` surface.
    pub fn frame(&mut self, t: f32, pointer: Pointer, width: f32, height: f32) -> DrawList {
        self.camera.update(pointer);
        self.particles.advance(t);

        let projector = Projector::new(width, height, FOV_DEGREES);
        let eye = self.camera.position;

        let meshes = body_transforms(t, pointer)
            .into_iter()
            .zip(BODIES.iter())
            .zip(self.wireframes.iter())
            .filter_map(|((transform, body), wireframe)| {
                let center = projector.project(eye, transform.center())?;
                let screen = wireframe
                    .vertices
                    .iter()
                    .map(|&v| {
                        let world = transform.apply(body.distort.apply(v, t));
                        projector.project(eye, world).map(|p| (p.x, p.y))
                    })
                    .collect::<Vec<_>>();
                let segments = wireframe
                    .edges
                    .iter()
                    .filter_map(|&(a, b)| Some([screen[a]?, screen[b]?]))
                    .collect::<Vec<_>>();
                Some(MeshStroke {
                    color: body.color,
                    alpha: MESH_OPACITY * fog_alpha(center.depth),
                    segments,
                })
            })
            .collect();

        let field_rotation = ParticleField::rotation(t, pointer);
        let particles = self
            .particles
            .particles()
            .iter()
            .filter_map(|p| {
                let world = field_rotation.rotate(p.position);
                let projected = projector.project(eye, world)?;
                Some(Sprite {
                    x: projected.x,
                    y: projected.y,
                    size: (PARTICLE_SIZE * projected.scale).max(0.5),
                    color: PALETTE[p.color],
                    alpha: PARTICLE_OPACITY * fog_alpha(projected.depth),
                })
            })
            .filter(|s| s.alpha > 0.0)
            .collect();

        let beads = helix_beads(t, pointer)
            .into_iter()
            .filter_map(|bead| {
                let projected = projector.project(eye, bead.position)?;
                Some(Sprite {
                    x: projected.x,
                    y: projected.y,
                    size: HELIX_BEAD_RADIUS * projected.scale,
                    color: bead.color,
                    alpha: fog_alpha(projected.depth),
                })
            })
            .collect();

        DrawList {
            meshes,
            particles,
            beads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_contents() {
        let mut scene = Scene::new(500, 11);
        let list = scene.frame(0.0, Pointer::CENTER, 1280.0, 720.0);
        assert_eq!(list.meshes.len(), BODIES.len());
        assert_eq!(list.beads.len(), bodies::HELIX_BEADS);
        assert!(!list.particles.is_empty());
        assert!(list.particles.len() <= 500);
        for mesh in &list.meshes {
            assert!(!mesh.segments.is_empty());
            assert!(mesh.alpha > 0.0 && mesh.alpha <= MESH_OPACITY);
        }
    }

    #[test]
    fn test_frame_is_finite_over_time() {
        let mut scene = Scene::new(200, 5);
        for step in 0..240 {
            let t = step as f32 / 60.0;
            let pointer = Pointer {
                x: (t * 0.7).sin(),
                y: (t * 0.3).cos(),
            };
            let list = scene.frame(t, pointer, 800.0, 600.0);
            for sprite in list.particles.iter().chain(&list.beads) {
                assert!(sprite.x.is_finite() && sprite.y.is_finite());
                assert!(sprite.alpha >= 0.0 && sprite.alpha <= 1.0);
            }
            for mesh in &list.meshes {
                for [(x1, y1), (x2, y2)] in &mesh.segments {
                    assert!(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite());
                }
            }
        }
        let camera = scene.camera().position;
        assert!(camera.x.abs() <= 0.5 && camera.y.abs() <= 0.5);
        assert_eq!(camera.z, 5.0);
    }

    #[test]
    fn test_same_inputs_same_frame() {
        let mut a = Scene::new(100, 9);
        let mut b = Scene::new(100, 9);
        let pointer = Pointer { x: 0.2, y: -0.4 };
        assert_eq!(
            a.frame(1.5, pointer, 640.0, 480.0),
            b.frame(1.5, pointer, 640.0, 480.0)
        );
    }
}
