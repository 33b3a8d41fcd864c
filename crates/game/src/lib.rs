//! Marionette Game Logic
//!
//! This crate drives the articulated figure from player input:
//!
//! - Input state for the logical actions
//! - The humanoid figure blueprint
//! - Locomotion, walk cycle and gesture animations
//! - The per-tick simulation that ties them together
//!
//! # Architecture
//!
//! Everything runs on a single thread, one tick per rendered frame. The
//! frame driver owns the [`InputState`] and the [`Simulation`]; the
//! simulation owns the figure and the animation state and threads them by
//! `&mut` through the update.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Simulation::tick                     │
//! │  ┌─────────┐    ┌──────────────┐    ┌─────────────────┐  │
//! │  │ Input   │───►│ Animation    │───►│ Figure          │  │
//! │  │ State   │    │ (locomotion, │    │ (skeleton poses)│  │
//! │  └─────────┘    │ walk, gesture│    └─────────────────┘  │
//! │                 └──────────────┘                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod animation;
pub mod config;
pub mod figure;
pub mod gesture;
pub mod input;
pub mod locomotion;
pub mod simulation;
pub mod walk;

// Re-export main types
pub use animation::{AnimationMode, AnimationState};
pub use config::{AnimationConfig, CameraControlConfig, SimulationConfig};
pub use figure::{Figure, Part};
pub use gesture::Gesture;
pub use input::{Action, InputState};
pub use simulation::Simulation;
pub use walk::WalkCycle;

// Re-export rig types for convenience
pub use marionette_rig::{NodeId, Pose, Rotation, ShapeKind, Skeleton, SkeletonError, TextureKind};
