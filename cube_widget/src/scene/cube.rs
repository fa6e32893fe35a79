//! Cube scene: camera, the rotating root, six face panels, resize handling.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::faces::FaceSet;
use crate::math::{self, FACE_COUNT, FACE_NORMALS};
use crate::scene::materials::face_material;

pub const CAMERA_DISTANCE: f32 = 10.0;

/// The entity whose `Transform` holds the cube orientation.
#[derive(Component)]
pub struct CubeRoot;

/// One quad child per face index.
#[derive(Component)]
pub struct FacePanel {
    pub index: usize,
}

/// The shared quad mesh and the current edge length.
#[derive(Resource)]
pub struct CubeGeometry {
    pub edge: f32,
    pub mesh: Handle<Mesh>,
}

impl CubeGeometry {
    pub fn half_extent(&self) -> f32 {
        self.edge * 0.5
    }
}

/// Material handles by face index, for highlight and depth-bias writes.
#[derive(Resource)]
pub struct FaceMaterials(pub [Handle<StandardMaterial>; FACE_COUNT]);

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    faces: Res<FaceSet>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0., 0., CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let aspect = windows
        .get_single()
        .map(|window| window.width() / window.height())
        .unwrap_or(1.0);
    let edge = math::edge_for_aspect(aspect);
    let mesh = meshes.add(Rectangle::new(edge, edge));

    let handles: [Handle<StandardMaterial>; FACE_COUNT] =
        std::array::from_fn(|i| materials.add(face_material(faces.get(i), &asset_server)));

    commands
        .spawn((CubeRoot, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            for (index, &normal) in FACE_NORMALS.iter().enumerate() {
                parent.spawn((
                    FacePanel { index },
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(handles[index].clone()),
                    panel_transform(normal, edge * 0.5),
                ));
            }
        });

    commands.insert_resource(CubeGeometry { edge, mesh });
    commands.insert_resource(FaceMaterials(handles));
}

fn panel_transform(normal: Vec3, half_extent: f32) -> Transform {
    Transform::from_translation(normal * half_extent)
        .with_rotation(Quat::from_rotation_arc(Vec3::Z, normal))
}

/// Rebuilds the cube on window resize: the edge length follows the aspect
/// rule, every panel points at the new quad, and the stale mesh asset is
/// removed so repeated resizes don't accumulate geometry.
pub fn resize_cube(
    mut resize_events: EventReader<WindowResized>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut geometry: ResMut<CubeGeometry>,
    mut panels: Query<(&FacePanel, &mut Mesh3d, &mut Transform)>,
) {
    let Some(event) = resize_events.read().last() else {
        return;
    };
    if event.width <= 0.0 || event.height <= 0.0 {
        return;
    }

    let edge = math::edge_for_aspect(event.width / event.height);
    if (edge - geometry.edge).abs() < f32::EPSILON {
        return;
    }

    let new_mesh = meshes.add(Rectangle::new(edge, edge));
    let old_mesh = std::mem::replace(&mut geometry.mesh, new_mesh.clone());
    geometry.edge = edge;

    for (panel, mut mesh, mut transform) in &mut panels {
        *mesh = Mesh3d(new_mesh.clone());
        transform.translation = FACE_NORMALS[panel.index] * (edge * 0.5);
    }

    meshes.remove(&old_mesh);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::{FaceDescriptor, FaceStyle};

    fn color_faces() -> FaceSet {
        let faces = (0..6)
            .map(|i| FaceDescriptor {
                style: FaceStyle::Color {
                    hex: "#282431".into(),
                },
                name: format!("Face {}", i + 1),
                link: "https://example.com/".parse().unwrap(),
                opacity: 0.2,
            })
            .collect();
        FaceSet::from_vec(faces).unwrap()
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()));
        app.add_event::<WindowResized>();
        app.init_asset::<Mesh>();
        app.init_asset::<StandardMaterial>();
        app.insert_resource(color_faces());
        app.add_systems(Startup, setup_scene);
        app
    }

    #[test]
    fn setup_spawns_camera_root_and_six_panels() {
        let mut app = test_app();
        app.update();

        assert!(app.world().get_resource::<CubeGeometry>().is_some());
        assert!(app.world().get_resource::<FaceMaterials>().is_some());

        let world = app.world_mut();
        let cameras = world.query::<&Camera3d>().iter(world).count();
        assert_eq!(cameras, 1);

        let mut indices: Vec<usize> = world
            .query::<&FacePanel>()
            .iter(world)
            .map(|panel| panel.index)
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn setup_without_window_uses_base_edge() {
        let mut app = test_app();
        app.update();

        let geometry = app.world().resource::<CubeGeometry>();
        assert_eq!(geometry.edge, math::BASE_EDGE);
    }

    #[test]
    fn resize_narrow_window_grows_cube_and_drops_old_mesh() {
        let mut app = test_app();
        app.add_systems(Update, resize_cube);
        app.update();

        let old_mesh = app.world().resource::<CubeGeometry>().mesh.clone();
        let window = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(WindowResized {
            window,
            width: 400.0,
            height: 800.0,
        });
        app.update();

        let geometry = app.world().resource::<CubeGeometry>();
        assert_eq!(geometry.edge, 12.0);
        assert_ne!(geometry.mesh, old_mesh);
        assert!(app.world().resource::<Assets<Mesh>>().get(&old_mesh).is_none());

        let world = app.world_mut();
        for (panel, transform) in world.query::<(&FacePanel, &Transform)>().iter(world) {
            let expected = FACE_NORMALS[panel.index] * 6.0;
            assert!((transform.translation - expected).length() < 1e-5);
        }
    }

    #[test]
    fn resize_wide_window_keeps_base_edge() {
        let mut app = test_app();
        app.add_systems(Update, resize_cube);
        app.update();

        let window = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(WindowResized {
            window,
            width: 1600.0,
            height: 900.0,
        });
        app.update();

        assert_eq!(app.world().resource::<CubeGeometry>().edge, math::BASE_EDGE);
    }
}
