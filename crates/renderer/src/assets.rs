//! Asset catalog: opaque GPU handles for shapes and textures.
//!
//! Loading and uploading is the frame driver's job. It registers whatever
//! handle its backend hands out, and the draw list looks them up here.

use std::collections::HashMap;

use marionette_rig::{ShapeKind, TextureKind};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Opaque handle to an uploaded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u32);

/// Opaque handle to an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// A registered mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshInfo {
    pub handle: MeshHandle,
    pub vertex_count: u32,
}

/// Lookup from shape/texture identifiers to backend handles.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    meshes: HashMap<ShapeKind, MeshInfo>,
    textures: HashMap<TextureKind, TextureHandle>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh, replacing any previous registration.
    pub fn register_mesh(&mut self, shape: ShapeKind, handle: MeshHandle, vertex_count: u32) {
        log::info!("Load {} vertices for {:?}", vertex_count, shape);
        self.meshes.insert(
            shape,
            MeshInfo {
                handle,
                vertex_count,
            },
        );
    }

    /// Register a texture, replacing any previous registration.
    pub fn register_texture(&mut self, texture: TextureKind, handle: TextureHandle) {
        log::debug!("Registered texture {:?} as {:?}", texture, handle);
        self.textures.insert(texture, handle);
    }

    pub fn mesh(&self, shape: ShapeKind) -> Result<MeshInfo, RenderError> {
        self.meshes
            .get(&shape)
            .copied()
            .ok_or(RenderError::MissingMesh(shape))
    }

    pub fn texture(&self, texture: TextureKind) -> Result<TextureHandle, RenderError> {
        self.textures
            .get(&texture)
            .copied()
            .ok_or(RenderError::MissingTexture(texture))
    }
}
