//! Identifiers for the meshes and textures a node is drawn with.
//!
//! The rig only stores these identifiers; the renderer maps them to GPU
//! handles.

use serde::{Deserialize, Serialize};

/// Primitive mesh a node is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Cone,
    Cube,
    Plane,
    Sphere,
}

impl ShapeKind {
    /// All shapes, in registration order.
    pub const ALL: [Self; 4] = [Self::Cone, Self::Cube, Self::Plane, Self::Sphere];
}

/// Texture a node is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureKind {
    /// Dark floor texture.
    Floor,
    Head,
    Torso,
    UpperArm,
    Forearm,
    LeftThigh,
    RightThigh,
    Calf,
    Horn,
}

impl TextureKind {
    /// All textures, in registration order.
    pub const ALL: [Self; 9] = [
        Self::Floor,
        Self::Head,
        Self::Torso,
        Self::UpperArm,
        Self::Forearm,
        Self::LeftThigh,
        Self::RightThigh,
        Self::Calf,
        Self::Horn,
    ];
}
