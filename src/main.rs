//! NaviCube — spinning navigation cube. Runs the cube_widget app.

use bevy::prelude::*;
use cube_widget::{
    config, depth_sort_plugin, hud_plugin, interaction_plugin, navigation_plugin, resize_cube,
    setup_scene, snap_plugin, spin_plugin,
};

fn main() {
    let _ = dotenvy::dotenv();
    let faces = config::face_set();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NaviCube".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08)))
        .insert_resource(faces)
        .add_plugins((
            interaction_plugin,
            snap_plugin,
            spin_plugin,
            depth_sort_plugin,
            hud_plugin,
            navigation_plugin,
        ))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, resize_cube)
        .run();
}
