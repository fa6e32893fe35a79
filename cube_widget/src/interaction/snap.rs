//! Snap animator: eases the cube to an axis-aligned face orientation.

use bevy::prelude::*;

use crate::interaction::spin::AngularVelocity;
use crate::math::SNAP_TARGETS;
use crate::scene::CubeRoot;

pub const SNAP_STEPS: u32 = 60;

/// An in-flight snap. One step advances per frame; removing the resource
/// cancels it (a new press does exactly that).
#[derive(Resource, Clone, Copy, Debug)]
pub struct SnapAnimation {
    start: Vec3,
    target: Vec3,
    step: u32,
}

impl SnapAnimation {
    /// Starts easing from the current orientation toward `face`'s fixed
    /// Euler target.
    pub fn toward(current: Quat, face: usize) -> Self {
        let (x, y, z) = current.to_euler(EulerRot::XYZ);
        Self {
            start: Vec3::new(x, y, z),
            target: SNAP_TARGETS[face],
            step: 0,
        }
    }

    /// One frame of component-wise interpolation. The last step assigns the
    /// target exactly rather than trusting a `lerp(…, 1.0)` round-trip.
    fn advance(&mut self) -> Vec3 {
        self.step += 1;
        if self.step >= SNAP_STEPS {
            self.target
        } else {
            let t = self.step as f32 / SNAP_STEPS as f32;
            self.start.lerp(self.target, t)
        }
    }

    fn finished(&self) -> bool {
        self.step >= SNAP_STEPS
    }
}

pub fn snap_plugin(app: &mut App) {
    app.init_resource::<AngularVelocity>()
        .add_systems(Update, snap_system);
}

fn snap_system(
    mut commands: Commands,
    snap: Option<ResMut<SnapAnimation>>,
    mut velocity: ResMut<AngularVelocity>,
    mut cube: Query<&mut Transform, With<CubeRoot>>,
) {
    let Some(mut snap) = snap else {
        return;
    };
    let Ok(mut transform) = cube.get_single_mut() else {
        return;
    };

    let euler = snap.advance();
    transform.rotation = Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);

    if snap.finished() {
        // The snap absorbs whatever momentum the drag left behind, so the
        // landed orientation stays put.
        velocity.0 = Vec3::ZERO;
        commands.remove_resource::<SnapAnimation>();
    }
}
