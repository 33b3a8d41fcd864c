//! Per-tick animation controller.
//!
//! Decides each tick which of the procedural animations drives the figure:
//!
//! 1. A gesture that has not finished runs, but only once the walker stands
//!    still; until then the walk cycle keeps settling.
//! 2. Otherwise, unless the gesture is held in its full pose, locomotion
//!    moves the body and the walk cycle advances.
//! 3. A held gesture freezes the figure until it is toggled back.

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::figure::Figure;
use crate::gesture::Gesture;
use crate::input::InputState;
use crate::locomotion;
use crate::walk::WalkCycle;

/// Which animation drove the figure on a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationMode {
    /// Standing or walking under player control.
    #[default]
    Locomotion,

    /// Walk cycle winding down before a gesture can run.
    Settling,

    /// Gesture advancing.
    Gesture,

    /// Gesture finished in its full pose.
    Hold,
}

/// Animation state carried from tick to tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub walk: WalkCycle,
    pub gesture: Gesture,

    /// Mode of the most recent tick.
    pub mode: AnimationMode,
}

impl AnimationState {
    /// The figure is standing at rest.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.walk.idle
    }

    /// Start or reverse the gesture.
    pub fn toggle_gesture(&mut self, figure: &Figure) {
        self.gesture.toggle(figure);
    }

    /// Advance every animation by one tick.
    pub fn update(
        &mut self,
        figure: &mut Figure,
        input: &InputState,
        camera_yaw: f32,
        config: &AnimationConfig,
    ) -> AnimationMode {
        let mode = if !self.gesture.done {
            if self.walk.idle {
                self.gesture.advance(figure, config);
                AnimationMode::Gesture
            } else {
                self.walk.step(false, figure, config);
                AnimationMode::Settling
            }
        } else if !self.gesture.is_held() {
            let is_walking = locomotion::step(figure, input, camera_yaw, config);
            self.walk.step(is_walking, figure, config);
            AnimationMode::Locomotion
        } else {
            AnimationMode::Hold
        };

        if mode != self.mode {
            log::debug!("Animation mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
        mode
    }

    /// Back to rest: phases zeroed, gesture cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Part;
    use crate::input::Action;

    #[test]
    fn test_gesture_waits_for_walker_to_settle() {
        let config = AnimationConfig::default();
        let mut figure = Figure::humanoid().unwrap();
        let mut state = AnimationState::default();

        let mut input = InputState::new();
        input.set(Action::Forward, true);
        for _ in 0..7 {
            state.update(&mut figure, &input, 0.0, &config);
        }
        assert!(!state.is_idle());

        state.toggle_gesture(&figure);
        input.clear();

        let mut settled = false;
        for _ in 0..40 {
            let mode = state.update(&mut figure, &input, 0.0, &config);
            if mode == AnimationMode::Gesture {
                settled = true;
                break;
            }
            assert_eq!(mode, AnimationMode::Settling);
            assert_eq!(state.gesture.ticks, 0);
        }
        assert!(settled, "walker never settled");
        assert_eq!(state.gesture.ticks, 1);
    }

    #[test]
    fn test_held_gesture_ignores_input() {
        let config = AnimationConfig::default();
        let mut figure = Figure::humanoid().unwrap();
        let mut state = AnimationState::default();

        state.toggle_gesture(&figure);
        for _ in 0..10 {
            assert_eq!(
                state.update(&mut figure, &InputState::new(), 0.0, &config),
                AnimationMode::Gesture
            );
        }

        let mut input = InputState::new();
        input.set(Action::Forward, true);
        let before = figure.part(Part::Body).shift;
        assert_eq!(state.update(&mut figure, &input, 0.0, &config), AnimationMode::Hold);
        assert_eq!(figure.part(Part::Body).shift, before);
        assert_eq!(state.walk.phase, 0);
    }

    #[test]
    fn test_locomotion_after_gesture_returns() {
        let config = AnimationConfig::default();
        let mut figure = Figure::humanoid().unwrap();
        let mut state = AnimationState::default();

        state.toggle_gesture(&figure);
        for _ in 0..10 {
            state.update(&mut figure, &InputState::new(), 0.0, &config);
        }
        state.toggle_gesture(&figure);
        for _ in 0..10 {
            state.update(&mut figure, &InputState::new(), 0.0, &config);
        }
        assert!(state.gesture.done);
        assert!(!state.gesture.enabled);

        let mut input = InputState::new();
        input.set(Action::Back, true);
        assert_eq!(
            state.update(&mut figure, &input, 0.0, &config),
            AnimationMode::Locomotion
        );
        assert_eq!(state.walk.phase, 1);
    }

    #[test]
    fn test_reset_state() {
        let mut state = AnimationState::default();
        state.walk.phase = 42;
        state.walk.idle = false;
        state.gesture.ticks = 3;
        state.gesture.enabled = true;
        state.gesture.done = false;
        state.mode = AnimationMode::Gesture;

        state.reset();
        assert_eq!(state, AnimationState::default());
        assert!(state.is_idle());
        assert!(state.gesture.done);
    }
}
