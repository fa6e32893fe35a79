//! Face draw ordering: painter's-algorithm approximation for the
//! semi-transparent faces, recomputed whenever the cube orientation changes.

use bevy::prelude::*;

use crate::math::{self, FACE_COUNT};
use crate::scene::cube::{CubeGeometry, CubeRoot, FaceMaterials};

/// Face indices, farthest from the camera first. Always a permutation of
/// 0..6.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceDrawOrder(pub [usize; FACE_COUNT]);

impl Default for FaceDrawOrder {
    fn default() -> Self {
        Self([0, 1, 2, 3, 4, 5])
    }
}

pub fn depth_sort_plugin(app: &mut App) {
    app.init_resource::<FaceDrawOrder>()
        .add_systems(Update, depth_sort_system);
}

/// Recomputes the draw order and applies it through material depth bias:
/// nearer faces get a higher bias so they composite over farther ones.
fn depth_sort_system(
    cube: Query<&Transform, (With<CubeRoot>, Changed<Transform>)>,
    cameras: Query<&Transform, (With<Camera3d>, Without<CubeRoot>)>,
    geometry: Option<Res<CubeGeometry>>,
    face_materials: Option<Res<FaceMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut order: ResMut<FaceDrawOrder>,
) {
    let Ok(cube_transform) = cube.get_single() else {
        return;
    };
    let Ok(camera_transform) = cameras.get_single() else {
        return;
    };
    let (Some(geometry), Some(face_materials)) = (geometry, face_materials) else {
        return;
    };

    order.0 = math::depth_order(
        cube_transform.rotation,
        camera_transform.translation,
        geometry.half_extent(),
    );

    for (rank, &face) in order.0.iter().enumerate() {
        if let Some(material) = materials.get_mut(&face_materials.0[face]) {
            material.depth_bias = rank as f32;
        }
    }
}
