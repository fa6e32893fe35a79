//! Cube geometry core: face indexing, snap targets, picking, depth order.
//!
//! Face index convention: index `i`'s outward normal is the local direction
//! that `SNAP_TARGETS[i]` rotates onto the camera view axis (+Z). Snapping to
//! face `i` therefore presents face `i` to the camera.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

pub const FACE_COUNT: usize = 6;

/// Outward unit normals in cube-local space, one per face index.
pub const FACE_NORMALS: [Vec3; FACE_COUNT] = [
    Vec3::Z,
    Vec3::NEG_Z,
    Vec3::NEG_X,
    Vec3::X,
    Vec3::NEG_Y,
    Vec3::Y,
];

/// Fixed axis-aligned orientations, Euler XYZ radians, one per face index.
pub const SNAP_TARGETS: [Vec3; FACE_COUNT] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, PI, 0.0),
    Vec3::new(0.0, FRAC_PI_2, 0.0),
    Vec3::new(0.0, -FRAC_PI_2, 0.0),
    Vec3::new(-FRAC_PI_2, 0.0, 0.0),
    Vec3::new(FRAC_PI_2, 0.0, 0.0),
];

// Not a geometric opposite-face relation for every entry; shipped behavior,
// kept verbatim.
const SNAP_FACE_MAP: [usize; FACE_COUNT] = [3, 2, 5, 4, 0, 1];

/// The face a drag release snaps to, given the camera-facing face.
pub fn snap_face_for(face: usize) -> usize {
    SNAP_FACE_MAP[face]
}

pub const BASE_EDGE: f32 = 6.0;

/// Cube edge length for a window aspect ratio. Narrow windows grow the cube
/// so it still fills the view height.
pub fn edge_for_aspect(aspect: f32) -> f32 {
    if aspect >= 1.0 {
        BASE_EDGE
    } else {
        BASE_EDGE / aspect
    }
}

/// A ray-cube hit: which face, and how far along the ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceHit {
    pub face: usize,
    pub distance: f32,
}

// Face index per (axis, side): entering through +X hits face 3, -X face 2, …
const AXIS_FACES: [[usize; 2]; 3] = [[3, 2], [5, 4], [0, 1]];

/// Slab-test a world-space ray against the rotated cube centered at the
/// origin. Returns the entered face and entry distance, or `None` on a miss.
pub fn ray_cube_intersection(
    origin: Vec3,
    dir: Vec3,
    rotation: Quat,
    half_extent: f32,
) -> Option<FaceHit> {
    // Work in cube-local space; the cube never translates.
    let inv = rotation.inverse();
    let origin = inv * origin;
    let dir = inv * dir;

    let inv_dir = 1.0 / dir;
    let t1 = (Vec3::splat(-half_extent) - origin) * inv_dir;
    let t2 = (Vec3::splat(half_extent) - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter > t_exit || t_exit <= 0.0 {
        return None;
    }

    let axis = if t_min.x >= t_min.y && t_min.x >= t_min.z {
        0
    } else if t_min.y >= t_min.z {
        1
    } else {
        2
    };
    let side = if dir[axis] < 0.0 { 0 } else { 1 };

    Some(FaceHit {
        face: AXIS_FACES[axis][side],
        distance: t_enter.max(0.0),
    })
}

/// World-space center of a face for the current orientation.
pub fn face_center_world(face: usize, rotation: Quat, half_extent: f32) -> Vec3 {
    rotation * (FACE_NORMALS[face] * half_extent)
}

/// Face indices sorted farthest-to-nearest from the camera. Painter's-order
/// approximation for compositing the semi-transparent faces.
pub fn depth_order(rotation: Quat, camera_pos: Vec3, half_extent: f32) -> [usize; FACE_COUNT] {
    let mut order = [0usize; FACE_COUNT];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i;
    }
    order.sort_by(|&a, &b| {
        let da = face_center_world(a, rotation, half_extent).distance(camera_pos);
        let db = face_center_world(b, rotation, half_extent).distance(camera_pos);
        db.total_cmp(&da)
    });
    order
}

/// Composes a small Euler-step rotation into the current orientation,
/// renormalized. Shared by drag, inertia decay, and idle spin.
pub fn compose_angular(current: Quat, velocity: Vec3) -> Quat {
    let step = Quat::from_euler(EulerRot::XYZ, velocity.x, velocity.y, velocity.z);
    (step * current).normalize()
}

/// Pointer displacement → angular step: x-displacement yaws, y-displacement
/// pitches, one degree per pixel.
pub fn drag_velocity(pointer_delta: Vec2) -> Vec3 {
    Vec3::new(
        pointer_delta.y.to_radians(),
        pointer_delta.x.to_radians(),
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMERA: Vec3 = Vec3::new(0.0, 0.0, 10.0);
    const TOWARD_CUBE: Vec3 = Vec3::NEG_Z;

    fn orientation(face: usize) -> Quat {
        let e = SNAP_TARGETS[face];
        Quat::from_euler(EulerRot::XYZ, e.x, e.y, e.z)
    }

    #[test]
    fn each_snap_orientation_presents_its_own_face() {
        for face in 0..FACE_COUNT {
            let hit = ray_cube_intersection(CAMERA, TOWARD_CUBE, orientation(face), 3.0)
                .unwrap_or_else(|| panic!("expected a hit at snap orientation {face}"));
            assert_eq!(hit.face, face, "snap orientation {face}");
            assert!(hit.distance > 0.0);
        }
    }

    #[test]
    fn ray_away_from_cube_misses() {
        assert_eq!(
            ray_cube_intersection(CAMERA, Vec3::Z, Quat::IDENTITY, 3.0),
            None
        );
        assert_eq!(
            ray_cube_intersection(Vec3::new(20.0, 0.0, 10.0), TOWARD_CUBE, Quat::IDENTITY, 3.0),
            None
        );
    }

    #[test]
    fn hit_distance_is_camera_to_near_face() {
        let hit = ray_cube_intersection(CAMERA, TOWARD_CUBE, Quat::IDENTITY, 3.0).unwrap();
        assert!((hit.distance - 7.0).abs() < 1e-5);
    }

    #[test]
    fn snap_face_map_is_the_shipped_table() {
        let expected = [3, 2, 5, 4, 0, 1];
        for (face, &target) in expected.iter().enumerate() {
            assert_eq!(snap_face_for(face), target);
        }
    }

    #[test]
    fn edge_matches_aspect_rule() {
        assert_eq!(edge_for_aspect(1.0), 6.0);
        assert_eq!(edge_for_aspect(16.0 / 9.0), 6.0);
        assert_eq!(edge_for_aspect(0.5), 12.0);
        assert!((edge_for_aspect(0.75) - 8.0).abs() < 1e-6);
    }

    #[test]
    fn depth_order_is_a_far_to_near_permutation() {
        let rotations = [
            Quat::IDENTITY,
            Quat::from_euler(EulerRot::XYZ, 0.4, 1.1, -0.3),
            Quat::from_euler(EulerRot::XYZ, -1.0, 0.2, 2.0),
        ];
        let cameras = [CAMERA, Vec3::new(4.0, 7.0, -2.0), Vec3::new(-8.0, 1.0, 3.0)];

        for rotation in rotations {
            for camera in cameras {
                let order = depth_order(rotation, camera, 3.0);

                let mut seen = [false; FACE_COUNT];
                for &face in &order {
                    assert!(!seen[face], "face {face} listed twice");
                    seen[face] = true;
                }

                let dist =
                    |face: usize| face_center_world(face, rotation, 3.0).distance(camera);
                for pair in order.windows(2) {
                    assert!(
                        dist(pair[0]) >= dist(pair[1]),
                        "order not farthest-to-nearest for camera {camera:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn drag_x_displacement_yaws_and_y_pitches() {
        let rotated = compose_angular(Quat::IDENTITY, drag_velocity(Vec2::new(10.0, 0.0)));
        let (x, y, _z) = rotated.to_euler(EulerRot::XYZ);
        assert!(x.abs() < 1e-5);
        assert!((y - 10f32.to_radians()).abs() < 1e-5);

        let rotated = compose_angular(Quat::IDENTITY, drag_velocity(Vec2::new(0.0, 5.0)));
        let (x, y, _z) = rotated.to_euler(EulerRot::XYZ);
        assert!((x - 5f32.to_radians()).abs() < 1e-5);
        assert!(y.abs() < 1e-5);
    }

    #[test]
    fn compose_angular_keeps_unit_length() {
        let mut q = Quat::IDENTITY;
        for _ in 0..500 {
            q = compose_angular(q, Vec3::new(0.013, -0.021, 0.002));
        }
        assert!((q.length() - 1.0).abs() < 1e-4);
    }
}
