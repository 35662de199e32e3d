use super::math::Vec3;

const NEAR: f32 = 0.1;
pub const FOG_NEAR: f32 = 8.0;
pub const FOG_FAR: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance in front of the camera.
    pub depth: f32,
    /// Screen pixels per world unit at this depth.
    pub scale: f32,
}

/// Perspective projection for a camera looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: f32,
    height: f32,
    focal: f32,
    aspect: f32,
}

impl Projector {
    pub fn new(width: f32, height: f32, fov_degrees: f32) -> Self {
        let height = height.max(1.0);
        let width = width.max(1.0);
        Self {
            width,
            height,
            focal: 1.0 / (fov_degrees.to_radians() / 2.0).tan(),
            aspect: width / height,
        }
    }

    /// `None` for points behind the near plane.
    pub fn project(&self, camera: Vec3, world: Vec3) -> Option<Projected> {
        let view = world - camera;
        let depth = -view.z;
        if depth <= NEAR {
            return None;
        }
        let ndc_x = view.x * self.focal / self.aspect / depth;
        let ndc_y = view.y * self.focal / depth;
        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * self.width,
            y: (1.0 - ndc_y) / 2.0 * self.height,
            depth,
            scale: self.focal * self.height / 2.0 / depth,
        })
    }
}

/// Linear fog: fully visible before [`FOG_NEAR`], gone past [`FOG_FAR`].
pub fn fog_alpha(depth: f32) -> f32 {
    1.0 - ((depth - FOG_NEAR) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_center() {
        let projector = Projector::new(800.0, 600.0, 75.0);
        let camera = Vec3::new(0.0, 0.0, 5.0);
        let p = projector.project(camera, Vec3::ZERO).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert_eq!(p.depth, 5.0);
    }

    #[test]
    fn test_axes_orientation() {
        let projector = Projector::new(800.0, 600.0, 75.0);
        let camera = Vec3::new(0.0, 0.0, 5.0);
        let right_up = projector.project(camera, Vec3::new(1.0, 1.0, 0.0)).unwrap();
        assert!(right_up.x > 400.0);
        assert!(right_up.y < 300.0);

        // farther objects shrink
        let near = projector.project(camera, Vec3::new(0.0, 0.0, 0.0)).unwrap();
        let far = projector.project(camera, Vec3::new(0.0, 0.0, -10.0)).unwrap();
        assert!(far.scale < near.scale);
    }

    #[test]
    fn test_behind_camera_culled() {
        let projector = Projector::new(800.0, 600.0, 75.0);
        let camera = Vec3::new(0.0, 0.0, 5.0);
        assert!(projector.project(camera, Vec3::new(0.0, 0.0, 6.0)).is_none());
        assert!(projector.project(camera, Vec3::new(0.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn test_fog() {
        assert_eq!(fog_alpha(2.0), 1.0);
        assert_eq!(fog_alpha(FOG_NEAR), 1.0);
        assert_eq!(fog_alpha(FOG_FAR), 0.0);
        assert_eq!(fog_alpha(40.0), 0.0);
        assert!((fog_alpha(16.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_size() {
        let projector = Projector::new(0.0, 0.0, 75.0);
        let p = projector
            .project(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO)
            .unwrap();
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
