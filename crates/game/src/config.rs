//! Animation and simulation tuning constants.
//!
//! All values are per tick (one rendered frame) unless noted.

use serde::{Deserialize, Serialize};

/// Configuration for the procedural animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    // ========================================================================
    // Locomotion
    // ========================================================================
    /// Distance the body travels per tick while walking.
    pub walk_distance: f32,

    /// Body yaw change per tick while turning toward the heading (degrees).
    pub turn_rate: f32,

    /// Heading vectors shorter than this count as "no direction".
    pub heading_epsilon: f32,

    // ========================================================================
    // Walk cycle
    // ========================================================================
    /// Ticks-to-degrees divisor: phase angle is `phase / walk_period` degrees.
    pub walk_period: f32,

    /// `|sin(phase)|` at or below which a settling walk snaps to idle.
    pub settle_threshold: f32,

    /// Peak upper-arm and thigh swing (degrees).
    pub limb_swing: f32,

    /// Peak calf flex (degrees).
    pub calf_flex: f32,

    /// Forearm bend while not idle (degrees).
    pub forearm_bend: f32,

    // ========================================================================
    // Gesture
    // ========================================================================
    /// Ticks from rest to the full gesture pose.
    pub gesture_ticks: i32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            walk_distance: 0.18,
            turn_rate: 5.4,
            heading_epsilon: 1e-4,

            walk_period: 0.175,
            settle_threshold: 0.1,
            limb_swing: 60.0,
            calf_flex: 30.0,
            forearm_bend: -60.0,

            gesture_ticks: 10,
        }
    }
}

/// Simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Animation tuning.
    pub animation: AnimationConfig,

    /// Camera orbit controls.
    pub camera: CameraControlConfig,
}

/// Camera orbit controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraControlConfig {
    /// Yaw change per tick while a camera key is held (degrees).
    pub turn_rate: f32,
}

impl Default for CameraControlConfig {
    fn default() -> Self {
        Self { turn_rate: 1.5 }
    }
}
