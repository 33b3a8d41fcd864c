//! Marionette Rig
//!
//! Rigid-body hierarchy for the articulated figure: Euler rotations, local
//! transform composition and an arena of nodes linked to their parents.
//!
//! # Architecture
//!
//! The rig is split into three layers:
//!
//! - **Primitives**: [`Rotation`] and the [`transform`] helpers that turn a
//!   pose into a 4x4 affine matrix
//! - **Nodes**: [`Node`] holds the fixed structure (appearance, scale, pivot,
//!   offset, parent) and the mutable pose (rotation, shift)
//! - **Skeleton**: [`Skeleton`] owns every node and composes world matrices
//!
//! # Conventions
//!
//! Matrices use glam's column-vector convention: `parent_world * local` places
//! a child in the parent's frame. Angles are stored in degrees and converted
//! at composition time.
//!
//! Parent links are indices into the skeleton arena and are fixed when the
//! node is inserted. A parent must already exist when its child is added, so
//! every skeleton is a tree by construction.

pub mod appearance;
pub mod error;
pub mod node;
pub mod rotation;
pub mod skeleton;
pub mod transform;

pub use appearance::{ShapeKind, TextureKind};
pub use error::SkeletonError;
pub use node::{Node, NodeDesc, NodeId, Pose};
pub use rotation::Rotation;
pub use skeleton::Skeleton;
