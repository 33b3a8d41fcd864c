//! Affine matrix helpers for composing a node's local transform.

use glam::{Mat4, Vec3};

use crate::rotation::Rotation;

/// Local transform of a rigid body relative to its parent.
///
/// `translate(shift + offset) * rotation * translate(pivot)`
///
/// The pivot moves the mesh before it is rotated, so a limb whose pivot is
/// `(0, -0.5, 0)` swings about its top end.
#[inline]
pub fn compose_local(rotation: &Rotation, pivot: Vec3, offset: Vec3, shift: Vec3) -> Mat4 {
    let redirect = Mat4::from_translation(pivot);
    let translate = Mat4::from_translation(shift + offset);
    translate * rotation.matrix() * redirect
}

/// Scale matrix applied to a node's own mesh only.
#[inline]
pub fn mesh_scale(scale: Vec3) -> Mat4 {
    Mat4::from_scale(scale)
}
