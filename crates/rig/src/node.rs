//! Articulated node: one rigid body segment of the figure.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::appearance::{ShapeKind, TextureKind};
use crate::rotation::Rotation;
use crate::transform;

/// Index of a node inside its [`Skeleton`](crate::Skeleton).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Mutable part of a node's transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Current rotation (degrees).
    pub rotation: Rotation,

    /// Translation added on top of the fixed offset.
    pub shift: Vec3,
}

/// Construction parameters for a node.
#[derive(Debug, Clone)]
pub struct NodeDesc {
    pub name: String,
    pub shape: ShapeKind,
    pub texture: TextureKind,

    /// Scale of this node's mesh. Not inherited by children.
    pub scale: Vec3,

    /// Translation applied before rotating, moves the rotation center.
    pub pivot: Vec3,

    /// Fixed translation from the parent's origin.
    pub offset: Vec3,

    /// Rotation the node starts in and returns to on reset.
    pub rotation: Rotation,

    pub parent: Option<NodeId>,
}

impl NodeDesc {
    /// Start describing a node with unit scale and no offsets.
    pub fn new(name: impl Into<String>, shape: ShapeKind, texture: TextureKind) -> Self {
        Self {
            name: name.into(),
            shape,
            texture,
            scale: Vec3::ONE,
            pivot: Vec3::ZERO,
            offset: Vec3::ZERO,
            rotation: Rotation::ZERO,
            parent: None,
        }
    }

    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn pivot(mut self, pivot: Vec3) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// A rigid body segment.
///
/// The structural parameters (appearance, scale, pivot, offset, parent) are
/// fixed at construction. Only the pose changes from frame to frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    name: String,
    shape: ShapeKind,
    texture: TextureKind,
    scale: Vec3,
    pivot: Vec3,
    offset: Vec3,
    initial_rotation: Rotation,
    parent: Option<NodeId>,

    /// Current rotation (degrees).
    pub rotation: Rotation,

    /// Translation added on top of the fixed offset.
    pub shift: Vec3,
}

impl Node {
    pub(crate) fn from_desc(desc: NodeDesc) -> Self {
        Self {
            name: desc.name,
            shape: desc.shape,
            texture: desc.texture,
            scale: desc.scale,
            pivot: desc.pivot,
            offset: desc.offset,
            initial_rotation: desc.rotation,
            parent: desc.parent,
            rotation: desc.rotation,
            shift: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn texture(&self) -> TextureKind {
        self.texture
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    #[inline]
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn initial_rotation(&self) -> Rotation {
        self.initial_rotation
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        Pose {
            rotation: self.rotation,
            shift: self.shift,
        }
    }

    /// Pose the node was constructed with.
    pub fn initial_pose(&self) -> Pose {
        Pose {
            rotation: self.initial_rotation,
            shift: Vec3::ZERO,
        }
    }

    fn set_pose(&mut self, pose: Pose) {
        self.rotation = pose.rotation;
        self.shift = pose.shift;
    }

    /// Restore the initial rotation and clear the shift.
    pub fn reset(&mut self) {
        self.set_pose(self.initial_pose());
    }

    /// Transform relative to the parent (without this node's scale).
    pub fn local_transform(&self) -> Mat4 {
        transform::compose_local(&self.rotation, self.pivot, self.offset, self.shift)
    }

    /// Rotation-only matrix of the current pose.
    pub fn rotation_matrix(&self) -> Mat4 {
        self.rotation.matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limb() -> Node {
        Node::from_desc(
            NodeDesc::new("limb", ShapeKind::Cube, TextureKind::Forearm)
                .scale(Vec3::new(0.5, 1.0, 0.5))
                .pivot(Vec3::new(0.0, -0.5, 0.0))
                .rotation(Rotation::about_x(30.0)),
        )
    }

    #[test]
    fn test_new_node_starts_at_initial_pose() {
        let node = limb();
        assert_eq!(node.pose(), node.initial_pose());
        assert_eq!(node.rotation.on_x, 30.0);
        assert_eq!(node.shift, Vec3::ZERO);
    }

    #[test]
    fn test_reset_restores_initial_pose() {
        let mut node = limb();
        node.rotation.on_y += 45.0;
        node.rotation.on_x = -12.5;
        node.shift = Vec3::new(1.0, 2.0, 3.0);

        node.reset();
        assert_eq!(node.rotation, Rotation::about_x(30.0));
        assert_eq!(node.shift, Vec3::ZERO);

        // Idempotent
        node.reset();
        assert_eq!(node.pose(), node.initial_pose());
    }
}
