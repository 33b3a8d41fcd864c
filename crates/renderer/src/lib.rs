//! Marionette Renderer
//!
//! Backend-agnostic rendering support for the marionette viewer.
//!
//! # Features
//!
//! - Orbit camera placement around the figure
//! - Asset catalog mapping shape/texture identifiers to backend handles
//! - Draw list with one world matrix per skeleton node
//!
//! # Usage
//!
//! The frame driver uploads meshes and textures with its graphics backend,
//! registers the handles in an [`AssetCatalog`], and each frame turns the
//! figure's skeleton into [`DrawCommand`]s.

pub mod assets;
pub mod camera;
pub mod draw;
pub mod error;

pub use assets::{AssetCatalog, MeshHandle, MeshInfo, TextureHandle};
pub use camera::OrbitCamera;
pub use draw::{build_draw_list, draw_skeleton, DrawCommand, DrawTarget};
pub use error::RenderError;
