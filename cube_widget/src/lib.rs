//! Navigation cube — a clickable, spinning 3D cube widget.
//!
//! Library root: faces, config, geometry math, scene, interaction, HUD, and
//! navigation modules.

pub mod config;
mod faces;
mod interaction;
pub mod math;
mod nav;
mod scene;
mod ui;

pub mod prelude;

pub use faces::{default_faces, FaceDescriptor, FaceSet, FaceStyle};
pub use interaction::{
    interaction_plugin, snap_plugin, spin_plugin, AngularVelocity, PointerPhase, ReleaseAction,
    SnapAnimation, SpinMode, SpinState, SNAP_STEPS,
};
pub use nav::{navigation_plugin, NavigateRequest};
pub use scene::{
    depth_sort_plugin, resize_cube, setup_scene, CubeGeometry, CubeRoot, FaceDrawOrder,
    FaceMaterials, FacePanel, CAMERA_DISTANCE,
};
pub use ui::{hud_plugin, HudState};
