//! Pointer state machine: hover highlight, drag rotation, click-vs-drag.
//!
//! Uses manual ray-cube intersection instead of Bevy's mesh picking to avoid
//! input absorption conflicts with bevy_egui.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;
use bevy_egui::EguiContexts;

use crate::faces::FaceSet;
use crate::interaction::snap::SnapAnimation;
use crate::interaction::spin::{post_drag_velocity, AngularVelocity};
use crate::math;
use crate::nav::NavigateRequest;
use crate::scene::materials::set_face_opacity;
use crate::scene::{CubeGeometry, CubeRoot, FaceMaterials};

/// One pointer gesture at a time: idle, hovering a face, or dragging.
/// `click_candidate` survives only as long as the pointer holds still.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerPhase {
    #[default]
    Idle,
    Hovering {
        face: usize,
    },
    Dragging {
        last: Vec2,
        pressed_face: usize,
        click_candidate: bool,
    },
}

/// What a pointer-up means, decided by the state machine alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseAction {
    None,
    Navigate(usize),
    SnapAway,
}

impl PointerPhase {
    pub fn hovered_face(&self) -> Option<usize> {
        match *self {
            PointerPhase::Hovering { face } => Some(face),
            _ => None,
        }
    }

    /// Pointer-down over the cube: tentative click until any movement.
    pub fn press(&mut self, face: usize, position: Vec2) {
        *self = PointerPhase::Dragging {
            last: position,
            pressed_face: face,
            click_candidate: true,
        };
    }

    /// Movement while pressed: returns the displacement since the previous
    /// position and invalidates the click.
    pub fn drag_move(&mut self, position: Vec2) -> Option<Vec2> {
        let PointerPhase::Dragging {
            last, pressed_face, ..
        } = *self
        else {
            return None;
        };
        let delta = position - last;
        *self = PointerPhase::Dragging {
            last: position,
            pressed_face,
            click_candidate: false,
        };
        Some(delta)
    }

    /// Pointer-up: a still-valid click navigates to the pressed face; a
    /// finished drag hands off to the snap animator.
    pub fn release(&mut self) -> ReleaseAction {
        let action = match *self {
            PointerPhase::Dragging {
                pressed_face,
                click_candidate: true,
                ..
            } => ReleaseAction::Navigate(pressed_face),
            PointerPhase::Dragging {
                click_candidate: false,
                ..
            } => ReleaseAction::SnapAway,
            _ => ReleaseAction::None,
        };
        *self = PointerPhase::Idle;
        action
    }
}

pub fn interaction_plugin(app: &mut App) {
    app.init_resource::<PointerPhase>().add_systems(
        Update,
        (
            pointer_press_system,
            pointer_move_system,
            pointer_release_system,
            apply_highlight_system,
        )
            .chain(),
    );
}

fn hit_face_at(
    cursor: Vec2,
    cameras: &Query<(&Camera, &GlobalTransform), Without<CubeRoot>>,
    rotation: Quat,
    half_extent: f32,
) -> Option<usize> {
    let (camera, camera_transform) = cameras.get_single().ok()?;
    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    math::ray_cube_intersection(ray.origin, *ray.direction, rotation, half_extent)
        .map(|hit| hit.face)
}

fn pointer_press_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), Without<CubeRoot>>,
    cube: Query<&Transform, With<CubeRoot>>,
    geometry: Option<Res<CubeGeometry>>,
    mut phase: ResMut<PointerPhase>,
    mut commands: Commands,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let (Ok(cube_transform), Some(geometry)) = (cube.get_single(), geometry) else {
        return;
    };

    let Some(face) = hit_face_at(
        cursor,
        &cameras,
        cube_transform.rotation,
        geometry.half_extent(),
    ) else {
        return;
    };

    phase.press(face, cursor);
    // A press takes over any in-flight snap.
    commands.remove_resource::<SnapAnimation>();
}

fn pointer_move_system(
    mut moves: EventReader<CursorMoved>,
    cameras: Query<(&Camera, &GlobalTransform), Without<CubeRoot>>,
    mut cube: Query<&mut Transform, With<CubeRoot>>,
    geometry: Option<Res<CubeGeometry>>,
    mut phase: ResMut<PointerPhase>,
    mut velocity: ResMut<AngularVelocity>,
) {
    for event in moves.read() {
        if matches!(*phase, PointerPhase::Dragging { .. }) {
            let Some(delta) = phase.drag_move(event.position) else {
                continue;
            };
            let step = math::drag_velocity(delta);
            velocity.0 = step;
            if let Ok(mut transform) = cube.get_single_mut() {
                transform.rotation = math::compose_angular(transform.rotation, step);
            }
        } else {
            let (Ok(cube_transform), Some(geometry)) = (cube.get_single(), geometry.as_ref())
            else {
                continue;
            };
            *phase = match hit_face_at(
                event.position,
                &cameras,
                cube_transform.rotation,
                geometry.half_extent(),
            ) {
                Some(face) => PointerPhase::Hovering { face },
                None => PointerPhase::Idle,
            };
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn pointer_release_system(
    mouse: Res<ButtonInput<MouseButton>>,
    faces: Res<FaceSet>,
    cameras: Query<&Transform, (With<Camera3d>, Without<CubeRoot>)>,
    cube: Query<&Transform, With<CubeRoot>>,
    geometry: Option<Res<CubeGeometry>>,
    mut phase: ResMut<PointerPhase>,
    mut velocity: ResMut<AngularVelocity>,
    mut requests: EventWriter<NavigateRequest>,
    mut commands: Commands,
) {
    if !mouse.just_released(MouseButton::Left) {
        return;
    }

    match phase.release() {
        ReleaseAction::None => {}
        ReleaseAction::Navigate(face) => {
            requests.send(NavigateRequest {
                face,
                url: faces.get(face).link.clone(),
            });
        }
        ReleaseAction::SnapAway => {
            velocity.0 = post_drag_velocity(&mut rand::thread_rng());

            // The face under the camera's view direction picks the snap
            // target through the fixed face map.
            let Ok(camera_transform) = cameras.get_single() else {
                return;
            };
            let (Ok(cube_transform), Some(geometry)) = (cube.get_single(), geometry) else {
                return;
            };
            if let Some(hit) = math::ray_cube_intersection(
                camera_transform.translation,
                *camera_transform.forward(),
                cube_transform.rotation,
                geometry.half_extent(),
            ) {
                commands.insert_resource(SnapAnimation::toward(
                    cube_transform.rotation,
                    math::snap_face_for(hit.face),
                ));
            }
        }
    }
}

/// Presents the phase: the hovered face (and only it) at full opacity, with
/// a pointer cursor on the window. Last writer wins on the cursor.
fn apply_highlight_system(
    phase: Res<PointerPhase>,
    mut shown: Local<Option<usize>>,
    faces: Res<FaceSet>,
    face_materials: Option<Res<FaceMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
) {
    let hovered = phase.hovered_face();
    if hovered == *shown {
        return;
    }
    let Some(face_materials) = face_materials else {
        return;
    };

    if let Some(face) = *shown {
        if let Some(material) = materials.get_mut(&face_materials.0[face]) {
            set_face_opacity(material, faces.get(face).opacity);
        }
    }
    if let Some(face) = hovered {
        if let Some(material) = materials.get_mut(&face_materials.0[face]) {
            set_face_opacity(material, 1.0);
        }
    }
    *shown = hovered;

    if let Ok(window) = windows.get_single() {
        let icon = if hovered.is_some() {
            SystemCursorIcon::Pointer
        } else {
            SystemCursorIcon::Default
        };
        commands.entity(window).insert(CursorIcon::System(icon));
    }
}
