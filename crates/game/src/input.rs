//! Logical input state.
//!
//! The frame driver maps platform key events onto [`Action`]s and records
//! them here. The animation controller only reads this state.

use serde::{Deserialize, Serialize};

/// Logical actions the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    Back,
    Left,
    Right,
    CameraLeft,
    CameraRight,
    Reset,
    ToggleGesture,
    Quit,
}

impl Action {
    /// The four locomotion keys.
    pub const DIRECTIONS: [Self; 4] = [Self::Right, Self::Back, Self::Left, Self::Forward];

    #[inline]
    const fn bit(self) -> u16 {
        1 << self as u16
    }

    /// Heading offset added to the camera yaw for a direction key (degrees).
    pub const fn heading_offset(self) -> Option<f32> {
        match self {
            Self::Right => Some(0.0),
            Self::Back => Some(90.0),
            Self::Left => Some(180.0),
            Self::Forward => Some(270.0),
            _ => None,
        }
    }
}

/// Pressed/released state of every [`Action`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    bits: u16,
}

impl InputState {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Record a key transition.
    ///
    /// Returns `true` if the state changed, so callers can trigger one-shot
    /// actions on the press edge only.
    pub fn set(&mut self, action: Action, pressed: bool) -> bool {
        let before = self.bits;
        if pressed {
            self.bits |= action.bit();
        } else {
            self.bits &= !action.bit();
        }
        before != self.bits
    }

    #[inline]
    pub const fn is_pressed(&self, action: Action) -> bool {
        self.bits & action.bit() != 0
    }

    /// Number of direction keys currently held.
    pub fn direction_count(&self) -> u32 {
        Action::DIRECTIONS
            .iter()
            .filter(|a| self.is_pressed(**a))
            .count() as u32
    }

    /// Direction keys currently held.
    pub fn held_directions(&self) -> impl Iterator<Item = Action> + '_ {
        Action::DIRECTIONS
            .into_iter()
            .filter(move |a| self.is_pressed(*a))
    }

    /// Release everything (e.g. when the window loses focus).
    pub fn clear(&mut self) {
        self.bits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_query() {
        let mut input = InputState::new();
        assert!(!input.is_pressed(Action::Forward));

        input.set(Action::Forward, true);
        input.set(Action::CameraLeft, true);
        assert!(input.is_pressed(Action::Forward));
        assert!(input.is_pressed(Action::CameraLeft));
        assert!(!input.is_pressed(Action::Back));

        input.set(Action::Forward, false);
        assert!(!input.is_pressed(Action::Forward));
        assert!(input.is_pressed(Action::CameraLeft));
    }

    #[test]
    fn test_set_reports_edges() {
        let mut input = InputState::new();
        assert!(input.set(Action::Reset, true));
        // Key repeat
        assert!(!input.set(Action::Reset, true));
        assert!(input.set(Action::Reset, false));
        assert!(!input.set(Action::Reset, false));
    }

    #[test]
    fn test_direction_count() {
        let mut input = InputState::new();
        assert_eq!(input.direction_count(), 0);

        input.set(Action::Forward, true);
        input.set(Action::Left, true);
        input.set(Action::CameraRight, true);
        assert_eq!(input.direction_count(), 2);

        // Repeated press does not double count
        input.set(Action::Forward, true);
        assert_eq!(input.direction_count(), 2);

        let held: Vec<_> = input.held_directions().collect();
        assert_eq!(held, vec![Action::Left, Action::Forward]);

        input.clear();
        assert_eq!(input.direction_count(), 0);
    }

    #[test]
    fn test_heading_offsets() {
        assert_eq!(Action::Right.heading_offset(), Some(0.0));
        assert_eq!(Action::Forward.heading_offset(), Some(270.0));
        assert_eq!(Action::Quit.heading_offset(), None);
        for action in Action::DIRECTIONS {
            assert!(action.heading_offset().is_some());
        }
    }
}
