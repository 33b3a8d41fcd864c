//! Renderer errors.

use marionette_rig::{ShapeKind, TextureKind};
use thiserror::Error;

/// Error type for draw list construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("no mesh registered for shape {0:?}")]
    MissingMesh(ShapeKind),

    #[error("no texture registered for {0:?}")]
    MissingTexture(TextureKind),
}
