//! Secondary gesture layered on top of the walk cycle.
//!
//! Toggling the gesture runs it forward to its full pose over
//! `gesture_ticks` ticks; toggling again runs it back to rest. Each tick adds
//! a fixed fraction of the full offsets, so a toggle halfway through simply
//! reverses from where it is.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::figure::{Figure, Part};

/// Full-pose offsets of the gesture.
mod offsets {
    pub const HEAD_YAW: f32 = 60.0;
    pub const BODY_SWING: f32 = 45.0;
    pub const LEFT_THIGH_SWING: f32 = -45.0;
    pub const RIGHT_CALF_FLEX: f32 = 45.0;
    pub const ARM_SWING: f32 = -135.0;
    pub const ARM_DROP: f32 = -0.25;
    pub const LEAN_DEGREES: f32 = 45.0;

    /// Arm roll that brings the hands together: `asin(3/8)` in degrees.
    pub fn arm_roll() -> f32 {
        (3.0f32 / 8.0).asin().to_degrees()
    }
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    /// Progress in ticks, from 0 (rest) to `gesture_ticks` (full pose).
    pub ticks: i32,

    /// Running toward the full pose (`true`) or back to rest.
    pub enabled: bool,

    /// Reached the end it was running toward.
    pub done: bool,

    /// Body displacement at full pose, captured when the gesture starts.
    pub shift_vector: Vec3,
}

impl Default for Gesture {
    fn default() -> Self {
        Self {
            ticks: 0,
            enabled: false,
            done: true,
            shift_vector: Vec3::ZERO,
        }
    }
}

impl Gesture {
    /// Flip the gesture direction.
    ///
    /// Starting the gesture captures the body lean from the body's current
    /// orientation; it stays fixed until the next start.
    pub fn toggle(&mut self, figure: &Figure) {
        if !self.enabled {
            let sin = offsets::LEAN_DEGREES.to_radians().sin();
            let lean = Vec3::new(-sin, sin - 1.0, 0.0);
            self.shift_vector = figure
                .part(Part::Body)
                .rotation_matrix()
                .transform_vector3(lean);
        }
        self.enabled = !self.enabled;
        self.done = false;
        log::debug!(
            "Gesture toggled: enabled={} at tick {}",
            self.enabled,
            self.ticks
        );
    }

    /// Tick count the gesture is currently running toward.
    pub fn target(&self, config: &AnimationConfig) -> i32 {
        if self.enabled {
            config.gesture_ticks
        } else {
            0
        }
    }

    /// The gesture is held in its full pose.
    pub fn is_held(&self) -> bool {
        self.done && self.enabled
    }

    /// Advance one tick toward the target and pose the figure.
    pub fn advance(&mut self, figure: &mut Figure, config: &AnimationConfig) {
        let target = self.target(config);
        if self.ticks == target {
            self.done = true;
            return;
        }

        let direction = if self.ticks < target { 1 } else { -1 };
        self.ticks += direction;
        let rate = direction as f32 / config.gesture_ticks as f32;
        self.apply_delta(figure, rate);

        if self.ticks == target {
            self.done = true;
            log::debug!("Gesture finished at tick {}", self.ticks);
        }
    }

    fn apply_delta(&self, figure: &mut Figure, rate: f32) {
        let arm_roll = offsets::arm_roll();
        let arm_drop = Vec3::new(0.0, offsets::ARM_DROP, 0.0);

        figure.part_mut(Part::Head).rotation.on_z += rate * offsets::HEAD_YAW;

        let body = figure.part_mut(Part::Body);
        body.rotation.on_y += rate * offsets::BODY_SWING;
        body.shift += rate * self.shift_vector;

        figure.part_mut(Part::LeftThigh).rotation.on_y += rate * offsets::LEFT_THIGH_SWING;
        figure.part_mut(Part::RightCalf).rotation.on_y += rate * offsets::RIGHT_CALF_FLEX;

        let left_arm = figure.part_mut(Part::LeftUpperArm);
        left_arm.rotation.on_x += rate * arm_roll;
        left_arm.rotation.on_y += rate * offsets::ARM_SWING;
        left_arm.shift += rate * arm_drop;

        let right_arm = figure.part_mut(Part::RightUpperArm);
        right_arm.rotation.on_x -= rate * arm_roll;
        right_arm.rotation.on_y += rate * offsets::ARM_SWING;
        right_arm.shift += rate * arm_drop;
    }
}
