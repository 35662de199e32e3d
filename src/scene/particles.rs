use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::{
    bodies::Pointer,
    math::{Euler, Vec3},
};

pub const PARTICLE_COUNT: usize = 2000;
pub const PALETTE: [&str; 4] = ["#00ffff", "#a855f7", "#ec4899", "#06b6d4"];
/// Edge length of the cube the particles start in.
const SPREAD: f32 = 20.0;
const JITTER: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Index into [`PALETTE`].
    pub color: usize,
}

/// Point-sprite cloud. The position buffer is the only state kept between frames.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut coord = || (rng.random::<f32>() - 0.5) * SPREAD;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Vec3::new(coord(), coord(), coord());
            particles.push(Particle {
                position,
                color: 0,
            });
        }
        for p in particles.iter_mut() {
            p.color = rng.random_range(0..PALETTE.len());
        }
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Nudges every particle along a small sinusoid of time and its own position.
    pub fn advance(&mut self, t: f32) {
        for p in self.particles.iter_mut() {
            let Vec3 { x, y, .. } = p.position;
            p.position.y = y + (t + x).sin() * JITTER;
            p.position.x = x + (t + y).cos() * JITTER;
        }
    }

    /// Whole-field rotation: slow spin plus a pointer tilt.
    pub fn rotation(t: f32, pointer: Pointer) -> Euler {
        Euler::new(pointer.y * 0.2, t * 0.05, pointer.x * 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_seeded() {
        let a = ParticleField::new(PARTICLE_COUNT, 7);
        let b = ParticleField::new(PARTICLE_COUNT, 7);
        let c = ParticleField::new(PARTICLE_COUNT, 8);
        assert_eq!(a.particles().len(), PARTICLE_COUNT);
        assert_eq!(a.particles(), b.particles());
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn test_field_within_cube() {
        let field = ParticleField::new(500, 1);
        for p in field.particles() {
            for axis in [p.position.x, p.position.y, p.position.z] {
                assert!(axis.abs() <= SPREAD / 2.0);
            }
            assert!(p.color < PALETTE.len());
        }
        // all four colors show up in a field this size
        for color in 0..PALETTE.len() {
            assert!(field.particles().iter().any(|p| p.color == color));
        }
    }

    #[test]
    fn test_advance_jitter_is_small_and_bounded() {
        let mut field = ParticleField::new(200, 3);
        let before = field.particles().to_vec();
        field.advance(0.5);
        for (old, new) in before.iter().zip(field.particles()) {
            assert!((new.position.x - old.position.x).abs() <= JITTER + 1e-5);
            assert!((new.position.y - old.position.y).abs() <= JITTER + 1e-5);
            assert_eq!(new.position.z, old.position.z);
        }

        // a minute of frames drifts at most one jitter step per frame
        for frame in 0..3600 {
            field.advance(frame as f32 / 60.0);
        }
        for (old, new) in before.iter().zip(field.particles()) {
            assert!(new.position.distance(old.position) <= 3601.0 * JITTER * 2.0_f32.sqrt());
        }
    }

    #[test]
    fn test_rotation() {
        let r = ParticleField::rotation(10.0, Pointer { x: 1.0, y: -0.5 });
        assert!((r.x + 0.1).abs() < 1e-6);
        assert!((r.y - 0.5).abs() < 1e-6);
        assert!((r.z - 0.1).abs() < 1e-6);
    }
}
