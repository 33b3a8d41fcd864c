//! Turning and moving the figure from the direction keys.
//!
//! The held direction keys, rotated by the camera yaw, give a heading in the
//! ground plane. The body always walks along its own facing and turns toward
//! the heading at a fixed rate, so a new direction makes the figure swing
//! round while it keeps stepping.

use glam::{Vec2, Vec3};

use crate::config::AnimationConfig;
use crate::figure::{Figure, Part};
use crate::input::InputState;

/// Heading requested by the held direction keys.
///
/// Each held key contributes `(sin, cos)` of `camera_yaw + offset`, averaged
/// over the held keys. Returns `None` when no key is held or the keys cancel
/// out.
pub fn heading(input: &InputState, camera_yaw: f32, config: &AnimationConfig) -> Option<Vec2> {
    let count = input.direction_count();
    if count == 0 {
        return None;
    }

    let share = 1.0 / count as f32;
    let sum: Vec2 = input
        .held_directions()
        .filter_map(|action| action.heading_offset())
        .map(|offset| {
            let (sin, cos) = (camera_yaw + offset).to_radians().sin_cos();
            Vec2::new(sin, cos) * share
        })
        .sum();

    (sum.length() > config.heading_epsilon).then_some(sum)
}

/// Move and turn the body for one tick.
///
/// Returns whether the figure is walking. When it is not, the body is left
/// exactly where it was.
pub fn step(
    figure: &mut Figure,
    input: &InputState,
    camera_yaw: f32,
    config: &AnimationConfig,
) -> bool {
    let Some(heading) = heading(input, camera_yaw, config) else {
        return false;
    };

    let count = input.direction_count();
    let body = figure.part_mut(Part::Body);

    // Every held key takes an equal share of the stride along the facing
    // the body had before this tick's turn.
    let share = config.walk_distance / count as f32;
    let stride = body.rotation_matrix().transform_vector3(Vec3::X * share);
    for _ in 0..count {
        body.shift -= stride;
    }

    let target = heading.y.atan2(heading.x);
    let misalignment = (body.rotation.on_z.to_radians() - target).sin();
    if misalignment > 0.0 {
        body.rotation.on_z -= config.turn_rate;
    } else {
        body.rotation.on_z += config.turn_rate;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;

    fn pressed(actions: &[Action]) -> InputState {
        let mut input = InputState::new();
        for action in actions {
            input.set(*action, true);
        }
        input
    }

    #[test]
    fn test_no_keys_no_heading() {
        let config = AnimationConfig::default();
        let input = InputState::new();
        assert_eq!(heading(&input, 0.0, &config), None);

        // Camera keys are not directions
        let input = pressed(&[Action::CameraLeft]);
        assert_eq!(heading(&input, 0.0, &config), None);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let config = AnimationConfig::default();
        let input = pressed(&[Action::Forward, Action::Back]);
        assert_eq!(heading(&input, 37.0, &config), None);

        let mut figure = Figure::humanoid().unwrap();
        figure.part_mut(Part::Body).shift = Vec3::new(1.0, 0.25, -2.0);
        assert!(!step(&mut figure, &input, 37.0, &config));
        assert_eq!(figure.part(Part::Body).shift, Vec3::new(1.0, 0.25, -2.0));
        assert_eq!(figure.part(Part::Body).rotation.on_z, 0.0);
    }

    #[test]
    fn test_forward_heading_at_zero_yaw() {
        let config = AnimationConfig::default();
        let input = pressed(&[Action::Forward]);
        let h = heading(&input, 0.0, &config).unwrap();
        assert!(h.abs_diff_eq(Vec2::new(-1.0, 0.0), 1e-5), "got {h:?}");
    }

    #[test]
    fn test_step_length_independent_of_key_count() {
        let config = AnimationConfig::default();

        let mut single = Figure::humanoid().unwrap();
        let mut diagonal = Figure::humanoid().unwrap();
        for figure in [&mut single, &mut diagonal] {
            figure.part_mut(Part::Body).rotation.on_z = 20.0;
        }

        assert!(step(&mut single, &pressed(&[Action::Forward]), 0.0, &config));
        assert!(step(
            &mut diagonal,
            &pressed(&[Action::Forward, Action::Left]),
            0.0,
            &config
        ));

        let a = single.part(Part::Body).shift.length();
        let b = diagonal.part(Part::Body).shift.length();
        assert!((a - config.walk_distance).abs() < 1e-5, "single {a}");
        assert!((a - b).abs() < 1e-5, "single {a} vs diagonal {b}");
    }

    #[test]
    fn test_walks_along_facing() {
        let config = AnimationConfig::default();
        let mut figure = Figure::humanoid().unwrap();

        // Facing yaw 180 walks toward +X
        figure.part_mut(Part::Body).rotation.on_z = 180.0;
        step(&mut figure, &pressed(&[Action::Forward]), 0.0, &config);

        let shift = figure.part(Part::Body).shift;
        assert!(shift.abs_diff_eq(Vec3::new(config.walk_distance, 0.0, 0.0), 1e-5), "got {shift:?}");
    }

    #[test]
    fn test_turns_toward_heading() {
        let config = AnimationConfig::default();
        let mut figure = Figure::humanoid().unwrap();

        // Right at yaw 0 asks for heading (0, 1): atan2 = 90 degrees
        let input = pressed(&[Action::Right]);
        let mut previous_error = f32::MAX;
        for _ in 0..10 {
            step(&mut figure, &input, 0.0, &config);
            let yaw = figure.part(Part::Body).rotation.on_z;
            let error = (yaw - 90.0).abs();
            assert!(error < previous_error, "yaw {yaw}");
            previous_error = error;
        }
        let yaw = figure.part(Part::Body).rotation.on_z;
        assert!((yaw - 54.0).abs() < 1e-3, "yaw {yaw}");
    }
}
