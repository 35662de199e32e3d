use super::{
    bodies::Pointer,
    math::{lerp, Vec3},
};

pub const FOV_DEGREES: f32 = 75.0;
const START: Vec3 = Vec3::new(0.0, 0.0, 5.0);
/// How far the camera drifts for a pointer at the viewport edge.
const POINTER_REACH: f32 = 0.5;
/// Fraction of the remaining distance covered each frame.
const DAMPING: f32 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self { position: START }
    }
}

impl CameraRig {
    pub fn target(pointer: Pointer) -> (f32, f32) {
        (pointer.x * POINTER_REACH, pointer.y * POINTER_REACH)
    }

    /// Eases the camera one frame toward the pointer-derived target.
    pub fn update(&mut self, pointer: Pointer) {
        let (tx, ty) = Self::target(pointer);
        self.position.x = lerp(self.position.x, tx, DAMPING);
        self.position.y = lerp(self.position.y, ty, DAMPING);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step() {
        let mut camera = CameraRig::default();
        camera.update(Pointer { x: 1.0, y: -1.0 });
        assert!((camera.position.x - 0.015).abs() < 1e-6);
        assert!((camera.position.y + 0.015).abs() < 1e-6);
        assert_eq!(camera.position.z, 5.0);
    }

    #[test]
    fn test_eases_monotonically_toward_target() {
        let mut camera = CameraRig::default();
        let pointer = Pointer { x: 0.8, y: 0.4 };
        let (tx, _) = CameraRig::target(pointer);
        let mut last_gap = tx;
        for _ in 0..300 {
            camera.update(pointer);
            let gap = tx - camera.position.x;
            assert!(gap >= 0.0 && gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 0.001);
        assert!((camera.position.y - 0.2).abs() < 0.001);
    }
}
