//! Marionette - Main Entry Point
//!
//! Interactive viewer for an articulated figure with a procedural walk cycle
//! and a toggled gesture animation.
//!
//! Controls: W/A/S/D walk, Left/Right orbit the camera, T toggles the
//! gesture, R resets, Escape quits.

use anyhow::anyhow;
use marionette_game::{Action, InputState, ShapeKind, Simulation, SimulationConfig, TextureKind};
use marionette_renderer::{
    draw_skeleton, AssetCatalog, DrawCommand, DrawTarget, MeshHandle, OrbitCamera, TextureHandle,
};
use three_d::*;

const WINDOW_SIZE: (u32, u32) = (1600, 900);
const FLOOR_SIZE: f32 = 50.0;

/// Map a platform key to a logical action.
fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::W => Some(Action::Forward),
        Key::S => Some(Action::Back),
        Key::A => Some(Action::Left),
        Key::D => Some(Action::Right),
        Key::ArrowLeft => Some(Action::CameraLeft),
        Key::ArrowRight => Some(Action::CameraRight),
        Key::R => Some(Action::Reset),
        Key::T => Some(Action::ToggleGesture),
        Key::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// three-d primitive standing in for each shape.
fn shape_mesh(shape: ShapeKind) -> CpuMesh {
    match shape {
        ShapeKind::Cone => CpuMesh::cone(16),
        ShapeKind::Cube => CpuMesh::cube(),
        ShapeKind::Plane => CpuMesh::square(),
        ShapeKind::Sphere => CpuMesh::sphere(16),
    }
}

/// Fits a three-d primitive to the unit-sized, Y-up mesh the rig expects.
///
/// three-d's cube, sphere and square span [-1, 1]; its cone points along +X
/// from 0 to 1.
fn shape_correction(shape: ShapeKind) -> glam::Mat4 {
    let half = glam::Mat4::from_scale(glam::Vec3::splat(0.5));
    match shape {
        ShapeKind::Cube | ShapeKind::Sphere => half,
        ShapeKind::Plane => glam::Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2) * half,
        ShapeKind::Cone => {
            glam::Mat4::from_translation(glam::Vec3::new(0.0, -0.5, 0.0))
                * glam::Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2)
                * glam::Mat4::from_scale(glam::Vec3::new(1.0, 0.5, 0.5))
        }
    }
}

/// Flat colour standing in for each texture.
fn texture_color(texture: TextureKind) -> Srgba {
    match texture {
        TextureKind::Floor => Srgba::new(40, 40, 45, 255),
        TextureKind::Head => Srgba::new(240, 214, 196, 255),
        TextureKind::Torso => Srgba::new(60, 70, 110, 255),
        TextureKind::UpperArm => Srgba::new(70, 80, 125, 255),
        TextureKind::Forearm | TextureKind::Calf => Srgba::new(236, 205, 185, 255),
        TextureKind::LeftThigh => Srgba::new(45, 45, 60, 255),
        TextureKind::RightThigh => Srgba::new(55, 55, 72, 255),
        TextureKind::Horn => Srgba::new(30, 30, 30, 255),
    }
}

fn to_three_d(matrix: glam::Mat4) -> Mat4 {
    Mat4::from(matrix.to_cols_array_2d())
}

/// GPU-side resources, indexed by the handles registered in the catalog.
struct SceneAssets {
    catalog: AssetCatalog,
    meshes: Vec<(CpuMesh, glam::Mat4)>,
    colors: Vec<Srgba>,
}

impl SceneAssets {
    fn load() -> Self {
        let mut catalog = AssetCatalog::new();

        let meshes: Vec<_> = ShapeKind::ALL
            .into_iter()
            .enumerate()
            .map(|(i, shape)| {
                let mesh = shape_mesh(shape);
                catalog.register_mesh(shape, MeshHandle(i as u32), mesh.vertex_count() as u32);
                (mesh, shape_correction(shape))
            })
            .collect();

        let colors = TextureKind::ALL
            .into_iter()
            .enumerate()
            .map(|(i, texture)| {
                catalog.register_texture(texture, TextureHandle(i as u32));
                texture_color(texture)
            })
            .collect();

        Self {
            catalog,
            meshes,
            colors,
        }
    }

    fn object(&self, context: &Context, mesh: MeshHandle, texture: TextureHandle) -> Gm<Mesh, ColorMaterial> {
        let (cpu_mesh, _) = &self.meshes[mesh.0 as usize];
        Gm::new(
            Mesh::new(context, cpu_mesh),
            ColorMaterial {
                color: self.colors[texture.0 as usize],
                ..Default::default()
            },
        )
    }
}

/// One render object per skeleton node, created on first draw.
struct FigureObjects<'a> {
    context: &'a Context,
    assets: &'a SceneAssets,
    objects: &'a mut Vec<Gm<Mesh, ColorMaterial>>,
}

impl DrawTarget for FigureObjects<'_> {
    fn draw(&mut self, command: &DrawCommand) {
        let index = command.node.index();
        if index >= self.objects.len() {
            let object = self.assets.object(self.context, command.mesh, command.texture);
            self.objects.push(object);
        }

        let correction = self.assets.meshes[command.mesh.0 as usize].1;
        self.objects[index].set_transformation(to_three_d(command.model * correction));
    }
}

fn run() -> anyhow::Result<()> {
    // Create window
    let window = Window::new(WindowSettings {
        title: "Marionette".to_string(),
        max_size: Some(WINDOW_SIZE),
        ..Default::default()
    })
    .map_err(|e| anyhow!("failed to create window: {e}"))?;

    let context = window.gl();

    // Create simulation
    let mut simulation = Simulation::new(SimulationConfig::default())?;
    let mut input = InputState::new();
    let mut orbit = OrbitCamera::default();

    let assets = SceneAssets::load();
    let mut objects: Vec<Gm<Mesh, ColorMaterial>> = Vec::new();

    let floor_mesh = assets.catalog.mesh(ShapeKind::Plane)?;
    let floor_texture = assets.catalog.texture(TextureKind::Floor)?;
    let mut floor = assets.object(&context, floor_mesh.handle, floor_texture);
    floor.set_transformation(to_three_d(
        glam::Mat4::from_scale(glam::Vec3::splat(FLOOR_SIZE)) * shape_correction(ShapeKind::Plane),
    ));

    log::info!(
        "Figure ready with {} parts",
        simulation.figure().skeleton().len()
    );

    // Main loop
    window.render_loop(move |frame_input| {
        // Handle input events
        for event in frame_input.events.iter() {
            match event {
                Event::KeyPress { kind, handled, .. } if !*handled => {
                    log::debug!("Key {:?} pressed", kind);
                    let Some(action) = action_for_key(*kind) else {
                        continue;
                    };
                    let pressed_now = input.set(action, true);
                    match action {
                        Action::Quit => {
                            return FrameOutput {
                                exit: true,
                                ..Default::default()
                            };
                        }
                        Action::Reset if pressed_now => simulation.reset(),
                        Action::ToggleGesture if pressed_now => simulation.toggle_gesture(),
                        _ => {}
                    }
                }
                Event::KeyRelease { kind, handled, .. } if !*handled => {
                    if let Some(action) = action_for_key(*kind) {
                        input.set(action, false);
                    }
                }
                Event::MousePress {
                    button, position, ..
                } => {
                    log::debug!("Mouse {:?} pressed at {:?}", button, position);
                }
                _ => {}
            }
        }

        // Update simulation
        simulation.tick(&input);

        // Update camera from simulation state
        orbit.yaw = simulation.camera_yaw();
        let eye = orbit.eye();
        let camera = Camera::new_perspective(
            frame_input.viewport,
            vec3(eye.x, eye.y, eye.z),
            vec3(orbit.target.x, orbit.target.y, orbit.target.z),
            vec3(0.0, 1.0, 0.0),
            degrees(orbit.fov),
            orbit.near,
            orbit.far,
        );

        // Pose the figure
        let mut target = FigureObjects {
            context: &context,
            assets: &assets,
            objects: &mut objects,
        };
        if let Err(e) = draw_skeleton(simulation.figure().skeleton(), &assets.catalog, &mut target) {
            log::error!("Failed to build draw list: {e}");
            return FrameOutput {
                exit: true,
                ..Default::default()
            };
        }

        // Render
        frame_input
            .screen()
            .clear(ClearState::color_and_depth(1.0, 1.0, 1.0, 1.0, 1.0))
            .render(&camera, &[&floor], &[])
            .render(&camera, objects.iter().collect::<Vec<_>>().as_slice(), &[]);

        FrameOutput::default()
    });

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_has_a_key() {
        let keys = [
            Key::W,
            Key::S,
            Key::A,
            Key::D,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::R,
            Key::T,
            Key::Escape,
        ];
        let actions: Vec<_> = keys.into_iter().filter_map(action_for_key).collect();
        assert_eq!(
            actions,
            vec![
                Action::Forward,
                Action::Back,
                Action::Left,
                Action::Right,
                Action::CameraLeft,
                Action::CameraRight,
                Action::Reset,
                Action::ToggleGesture,
                Action::Quit,
            ]
        );
        assert_eq!(action_for_key(Key::Q), None);
    }
}
