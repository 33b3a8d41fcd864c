//! Euler rotation stored as three independent angles.

use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Rotation of a node about its local axes, in degrees.
///
/// Angles accumulate without wrapping. The field names come from a rig
/// convention where `on_z` is the yaw about the vertical Y axis
/// and `on_y` swings a limb about the Z axis:
///
/// | Field  | Axis |
/// |--------|------|
/// | `on_x` | X    |
/// | `on_z` | Y    |
/// | `on_y` | Z    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Roll about the X axis.
    pub on_x: f32,

    /// Yaw about the Y axis.
    pub on_z: f32,

    /// Swing about the Z axis.
    pub on_y: f32,
}

impl Rotation {
    /// No rotation.
    pub const ZERO: Self = Self {
        on_x: 0.0,
        on_z: 0.0,
        on_y: 0.0,
    };

    /// Create a rotation from its three angles in degrees.
    ///
    /// Argument order follows the field order: X, then the Y-axis yaw
    /// (`on_z`), then the Z-axis swing (`on_y`).
    pub const fn new(on_x: f32, on_z: f32, on_y: f32) -> Self {
        Self { on_x, on_z, on_y }
    }

    /// Rotation about X only.
    pub const fn about_x(degrees: f32) -> Self {
        Self::new(degrees, 0.0, 0.0)
    }

    /// Rotation-only matrix: `rotY(on_z) * rotZ(on_y) * rotX(on_x)`.
    pub fn matrix(&self) -> Mat4 {
        let rot_x = Mat4::from_rotation_x(self.on_x.to_radians());
        let rot_y = Mat4::from_rotation_y(self.on_z.to_radians());
        let rot_z = Mat4::from_rotation_z(self.on_y.to_radians());
        rot_y * rot_z * rot_x
    }
}
