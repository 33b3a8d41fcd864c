//! Draw list: one draw call per skeleton node.

use glam::Mat4;
use marionette_rig::{NodeId, Skeleton};

use crate::assets::{AssetCatalog, MeshHandle, TextureHandle};
use crate::error::RenderError;

/// Everything a backend needs to draw one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub node: NodeId,
    pub mesh: MeshHandle,
    pub texture: TextureHandle,
    pub vertex_count: u32,

    /// Places the mesh in world space.
    pub model: Mat4,
}

/// Build the draw list for every node, in skeleton order.
pub fn build_draw_list(
    skeleton: &Skeleton,
    catalog: &AssetCatalog,
) -> Result<Vec<DrawCommand>, RenderError> {
    let models = skeleton.model_matrices();

    skeleton
        .iter()
        .zip(models)
        .map(|((id, node), model)| {
            let mesh = catalog.mesh(node.shape())?;
            Ok(DrawCommand {
                node: id,
                mesh: mesh.handle,
                texture: catalog.texture(node.texture())?,
                vertex_count: mesh.vertex_count,
                model,
            })
        })
        .collect()
}

/// Backend that issues the actual draw calls.
pub trait DrawTarget {
    fn draw(&mut self, command: &DrawCommand);
}

/// Build the draw list and hand every command to the target.
pub fn draw_skeleton<T: DrawTarget>(
    skeleton: &Skeleton,
    catalog: &AssetCatalog,
    target: &mut T,
) -> Result<usize, RenderError> {
    let commands = build_draw_list(skeleton, catalog)?;
    for command in &commands {
        target.draw(command);
    }
    Ok(commands.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use marionette_rig::{NodeDesc, Rotation, ShapeKind, TextureKind};

    fn catalog() -> AssetCatalog {
        let mut catalog = AssetCatalog::new();
        for (i, shape) in ShapeKind::ALL.into_iter().enumerate() {
            catalog.register_mesh(shape, MeshHandle(i as u32), 6 * (i as u32 + 1));
        }
        for (i, texture) in TextureKind::ALL.into_iter().enumerate() {
            catalog.register_texture(texture, TextureHandle(i as u32));
        }
        catalog
    }

    fn skeleton() -> Skeleton {
        let mut skeleton = Skeleton::new();
        let body = skeleton
            .add(
                NodeDesc::new("body", ShapeKind::Cube, TextureKind::Torso)
                    .scale(Vec3::new(1.0, 2.0, 1.2))
                    .offset(Vec3::new(0.0, 3.0, 0.0)),
            )
            .unwrap();
        skeleton
            .add(
                NodeDesc::new("head", ShapeKind::Sphere, TextureKind::Head)
                    .offset(Vec3::new(0.0, 1.5, 0.0))
                    .rotation(Rotation::new(0.0, 45.0, 0.0))
                    .parent(body),
            )
            .unwrap();
        skeleton
    }

    #[derive(Default)]
    struct Recorder(Vec<DrawCommand>);

    impl DrawTarget for Recorder {
        fn draw(&mut self, command: &DrawCommand) {
            self.0.push(*command);
        }
    }

    #[test]
    fn test_one_command_per_node() {
        let skeleton = skeleton();
        let commands = build_draw_list(&skeleton, &catalog()).unwrap();

        assert_eq!(commands.len(), 2);
        for command in &commands {
            assert!(command
                .model
                .abs_diff_eq(skeleton.model_matrix(command.node), 1e-5));
        }
        assert_eq!(commands[1].texture, TextureHandle(1));
        assert_eq!(commands[1].mesh, MeshHandle(3));
        assert_eq!(commands[1].vertex_count, 24);
    }

    #[test]
    fn test_missing_texture_fails() {
        let mut catalog = AssetCatalog::new();
        catalog.register_mesh(ShapeKind::Cube, MeshHandle(0), 36);
        catalog.register_mesh(ShapeKind::Sphere, MeshHandle(1), 960);

        let err = build_draw_list(&skeleton(), &catalog).unwrap_err();
        assert_eq!(err, RenderError::MissingTexture(TextureKind::Torso));
    }

    #[test]
    fn test_draw_skeleton_forwards_commands() {
        let mut recorder = Recorder::default();
        let drawn = draw_skeleton(&skeleton(), &catalog(), &mut recorder).unwrap();
        assert_eq!(drawn, 2);
        assert_eq!(recorder.0[0].node, NodeId(0));
        assert_eq!(recorder.0[1].node, NodeId(1));
    }
}
