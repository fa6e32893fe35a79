//! Inertia decay after a drag, plus the idle spin modes.

use bevy::prelude::*;
use rand::Rng;

use crate::interaction::pointer::PointerPhase;
use crate::interaction::snap::SnapAnimation;
use crate::math;
use crate::scene::CubeRoot;

pub const INERTIA_FACTOR: f32 = 0.98;
pub const VELOCITY_FLOOR: f32 = 0.001;

const STEADY_MIN_SPEED: f32 = 0.005;
const STEADY_MAX_SPEED: f32 = 0.02;
const WIND_UP_START: f32 = 0.02;
const WIND_UP_GAIN: f32 = 0.001;

/// Residual per-frame angular step left over from a drag.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct AngularVelocity(pub Vec3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinMode {
    #[default]
    Stopped,
    Steady,
    WindUp,
}

/// Idle spin task. `Stopped` is the explicit stop flag, checked every frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct SpinState {
    pub mode: SpinMode,
    pub velocity: Vec3,
}

impl SpinState {
    pub fn start_steady(&mut self, velocity: Vec3) {
        self.mode = SpinMode::Steady;
        self.velocity = velocity;
    }

    pub fn start_wind_up(&mut self) {
        self.mode = SpinMode::WindUp;
        self.velocity = Vec3::splat(WIND_UP_START);
    }

    pub fn stop(&mut self) {
        self.mode = SpinMode::Stopped;
    }

    /// This frame's angular step, or `None` when stopped. Wind-up speeds up
    /// a little each frame.
    pub fn tick(&mut self) -> Option<Vec3> {
        match self.mode {
            SpinMode::Stopped => None,
            SpinMode::Steady => Some(self.velocity),
            SpinMode::WindUp => {
                let step = self.velocity;
                self.velocity += Vec3::splat(WIND_UP_GAIN);
                Some(step)
            }
        }
    }
}

/// Per-axis steady spin speed in the shipped range.
pub fn random_steady_velocity(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(STEADY_MIN_SPEED..STEADY_MAX_SPEED),
        rng.gen_range(STEADY_MIN_SPEED..STEADY_MAX_SPEED),
        rng.gen_range(STEADY_MIN_SPEED..STEADY_MAX_SPEED),
    )
}

/// Small randomized kick applied when a drag is released.
pub fn post_drag_velocity(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * 0.1,
        (rng.gen::<f32>() - 0.5) * 0.1,
        0.0,
    )
}

pub fn spin_plugin(app: &mut App) {
    app.init_resource::<AngularVelocity>()
        .init_resource::<SpinState>()
        .add_systems(
            Update,
            (spin_toggle_system, spin_system, inertia_decay_system),
        );
}

fn spin_toggle_system(keys: Res<ButtonInput<KeyCode>>, mut spin: ResMut<SpinState>) {
    if keys.just_pressed(KeyCode::Space) {
        if spin.mode == SpinMode::Steady {
            spin.stop();
        } else {
            spin.start_steady(random_steady_velocity(&mut rand::thread_rng()));
        }
    }
    if keys.just_pressed(KeyCode::KeyW) {
        spin.start_wind_up();
    }
    if keys.just_pressed(KeyCode::Escape) {
        spin.stop();
    }
}

fn spin_system(
    mut spin: ResMut<SpinState>,
    phase: Res<PointerPhase>,
    mut cube: Query<&mut Transform, With<CubeRoot>>,
) {
    if matches!(*phase, PointerPhase::Dragging { .. }) {
        return;
    }
    let Ok(mut transform) = cube.get_single_mut() else {
        return;
    };
    if let Some(step) = spin.tick() {
        transform.rotation = math::compose_angular(transform.rotation, step);
    }
}

/// Post-drag momentum: shrinks 2% per frame and stops below the floor.
/// Pauses while a snap is easing so the convergence stays deterministic.
fn inertia_decay_system(
    mut velocity: ResMut<AngularVelocity>,
    phase: Res<PointerPhase>,
    snap: Option<Res<SnapAnimation>>,
    mut cube: Query<&mut Transform, With<CubeRoot>>,
) {
    if matches!(*phase, PointerPhase::Dragging { .. }) || snap.is_some() {
        return;
    }
    if velocity.0.length() <= VELOCITY_FLOOR {
        return;
    }

    velocity.0 *= INERTIA_FACTOR;
    let Ok(mut transform) = cube.get_single_mut() else {
        return;
    };
    transform.rotation = math::compose_angular(transform.rotation, velocity.0);
}
