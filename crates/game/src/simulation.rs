//! Frame simulation - the per-tick update.
//!
//! One tick is one rendered frame. The frame driver records input, calls
//! [`Simulation::tick`] once, then reads the figure's world matrices to draw.
//! Nothing else mutates the figure, so a frame always sees fully settled
//! animation state.

use marionette_rig::SkeletonError;

use crate::animation::{AnimationMode, AnimationState};
use crate::config::SimulationConfig;
use crate::figure::Figure;
use crate::input::{Action, InputState};

/// The viewer's complete mutable state.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Ticks since start.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    figure: Figure,
    animation: AnimationState,

    /// Orbit camera yaw (degrees). Directions are relative to it.
    camera_yaw: f32,
}

impl Simulation {
    /// Create a simulation around the humanoid figure.
    pub fn new(config: SimulationConfig) -> Result<Self, SkeletonError> {
        Ok(Self {
            frame: 0,
            config,
            figure: Figure::humanoid()?,
            animation: AnimationState::default(),
            camera_yaw: 0.0,
        })
    }

    #[inline]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    #[inline]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    #[inline]
    pub fn camera_yaw(&self) -> f32 {
        self.camera_yaw
    }

    /// Advance by one tick.
    pub fn tick(&mut self, input: &InputState) -> AnimationMode {
        let turn = self.config.camera.turn_rate;
        if input.is_pressed(Action::CameraLeft) {
            self.camera_yaw += turn;
        }
        if input.is_pressed(Action::CameraRight) {
            self.camera_yaw -= turn;
        }

        let mode = self.animation.update(
            &mut self.figure,
            input,
            self.camera_yaw,
            &self.config.animation,
        );

        self.frame += 1;
        mode
    }

    /// Start or reverse the gesture.
    pub fn toggle_gesture(&mut self) {
        self.animation.toggle_gesture(&self.figure);
    }

    /// Put the figure, animations and camera back to their start state.
    pub fn reset(&mut self) {
        self.figure.reset();
        self.animation.reset();
        self.camera_yaw = 0.0;
        log::debug!("Simulation reset at frame {}", self.frame);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Part;
    use glam::Vec3;

    fn sim() -> Simulation {
        Simulation::new(SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_simulation_creation() {
        let sim = sim();
        assert_eq!(sim.frame, 0);
        assert_eq!(sim.camera_yaw(), 0.0);
        assert!(sim.animation().is_idle());
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = sim();
        sim.tick(&InputState::new());
        assert_eq!(sim.frame, 1);
        sim.tick(&InputState::new());
        assert_eq!(sim.frame, 2);
    }

    #[test]
    fn test_camera_keys_orbit() {
        let mut sim = sim();
        let mut input = InputState::new();
        input.set(Action::CameraLeft, true);

        for _ in 0..4 {
            sim.tick(&input);
        }
        assert!((sim.camera_yaw() - 6.0).abs() < 1e-5);

        input.set(Action::CameraRight, true);
        sim.tick(&input);
        assert!((sim.camera_yaw() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_reset_clears_pose_and_camera() {
        let mut sim = sim();
        let mut input = InputState::new();
        input.set(Action::Left, true);
        input.set(Action::CameraRight, true);
        for _ in 0..25 {
            sim.tick(&input);
        }
        sim.toggle_gesture();

        sim.reset();
        let body = sim.figure().part(Part::Body);
        assert_eq!(body.shift, Vec3::ZERO);
        assert_eq!(body.rotation.on_z, 0.0);
        assert_eq!(sim.camera_yaw(), 0.0);
        assert_eq!(sim.animation().walk.phase, 0);
        assert!(sim.animation().gesture.done);
        assert!(!sim.animation().gesture.enabled);
    }
}
