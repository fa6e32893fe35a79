//! Minimal prelude for embedding the widget.

pub use crate::config::face_set;
pub use crate::faces::{FaceDescriptor, FaceSet, FaceStyle};
pub use crate::{
    depth_sort_plugin, hud_plugin, interaction_plugin, navigation_plugin, resize_cube,
    setup_scene, snap_plugin, spin_plugin,
};
