//! Orbit camera circling the figure.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera on a horizontal circle around the scene, looking at a fixed target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Position on the orbit in degrees. 0 puts the eye on -X.
    pub yaw: f32,

    /// Horizontal distance from the orbit axis.
    pub distance: f32,

    /// Eye height.
    pub height: f32,

    /// Point the camera looks at.
    pub target: Vec3,

    /// Vertical field of view in degrees.
    pub fov: f32,

    /// Near clipping plane.
    pub near: f32,

    /// Far clipping plane.
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            distance: 10.0,
            height: 5.0,
            target: Vec3::new(0.0, 1.0, 0.0),
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl OrbitCamera {
    /// Eye position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(
            -self.distance * cos_yaw,
            self.height,
            -self.distance * sin_yaw,
        )
    }
}
