//! Walk cycle: a tick counter whose sine swings the limbs.
//!
//! While walking the phase only moves forward. When the walker stops, the
//! phase steps toward the nearest zero of the sine and snaps to exactly 0
//! once it is inside the settle band, which puts the figure back at rest.

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::figure::{Figure, Part};

/// Walk-cycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkCycle {
    /// Accumulated ticks. Unbounded while walking.
    pub phase: i64,

    /// The figure is standing still with the phase at 0.
    pub idle: bool,
}

impl Default for WalkCycle {
    fn default() -> Self {
        Self {
            phase: 0,
            idle: true,
        }
    }
}

impl WalkCycle {
    /// Phase angle in radians.
    pub fn angle(&self, config: &AnimationConfig) -> f32 {
        (self.phase as f32 / config.walk_period).to_radians()
    }

    /// Advance the phase by one tick.
    pub fn advance(&mut self, is_walking: bool, config: &AnimationConfig) {
        self.idle = false;

        if is_walking {
            self.phase += 1;
            return;
        }

        let (sin, cos) = self.angle(config).sin_cos();
        if sin.abs() <= config.settle_threshold {
            self.phase = 0;
            self.idle = true;
        } else if sin * cos > 0.0 {
            self.phase -= 1;
        } else {
            self.phase += 1;
        }
    }

    /// Write the limb angles and body bob for the current phase.
    ///
    /// Only the vertical component of the body shift is touched; horizontal
    /// travel belongs to locomotion.
    pub fn apply(&self, figure: &mut Figure, config: &AnimationConfig) {
        let angle = self.angle(config);
        let swing = angle.sin();
        let bob = ((2.0 * angle).sin() + 1.0) / 3.0;

        figure.part_mut(Part::LeftUpperArm).rotation.on_y = config.limb_swing * swing;
        figure.part_mut(Part::RightUpperArm).rotation.on_y = -config.limb_swing * swing;
        figure.part_mut(Part::LeftThigh).rotation.on_y = -config.limb_swing * swing;
        figure.part_mut(Part::RightThigh).rotation.on_y = config.limb_swing * swing;

        let flex = (config.calf_flex * swing).abs();
        figure.part_mut(Part::LeftCalf).rotation.on_y = flex;
        figure.part_mut(Part::RightCalf).rotation.on_y = flex;

        figure.part_mut(Part::Body).shift.y = bob;

        let forearm = if self.idle { 0.0 } else { config.forearm_bend };
        figure.part_mut(Part::LeftForearm).rotation.on_y = forearm;
        figure.part_mut(Part::RightForearm).rotation.on_y = forearm;
    }

    /// Advance one tick and pose the figure.
    pub fn step(&mut self, is_walking: bool, figure: &mut Figure, config: &AnimationConfig) {
        self.advance(is_walking, config);
        self.apply(figure, config);
    }
}
