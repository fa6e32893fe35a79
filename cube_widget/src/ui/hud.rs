//! HUD overlay: visible-face name and rotation readout.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::faces::FaceSet;
use crate::math;
use crate::scene::{CubeGeometry, CubeRoot};

/// Readout state, refreshed whenever the cube orientation changes.
#[derive(Resource, Default)]
pub struct HudState {
    pub rotation_degrees: Vec3,
    pub visible_face: Option<usize>,
}

impl HudState {
    /// Records the orientation in degrees. A `None` visible face leaves the
    /// previous readout in place (a view-ray miss never blanks the text).
    pub fn update_from_orientation(&mut self, rotation: Quat, visible_face: Option<usize>) {
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        self.rotation_degrees = Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees());
        if visible_face.is_some() {
            self.visible_face = visible_face;
        }
    }
}

pub fn hud_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .init_resource::<HudState>()
        .add_systems(Update, (readout_system, hud_overlay_system));
}

/// Mirrors the cube orientation into the HUD: Euler angles plus the face hit
/// by a ray along the camera's view direction.
fn readout_system(
    cube: Query<&Transform, (With<CubeRoot>, Changed<Transform>)>,
    cameras: Query<&Transform, (With<Camera3d>, Without<CubeRoot>)>,
    geometry: Option<Res<CubeGeometry>>,
    mut hud: ResMut<HudState>,
) {
    let Ok(cube_transform) = cube.get_single() else {
        return;
    };
    let Ok(camera_transform) = cameras.get_single() else {
        return;
    };
    let Some(geometry) = geometry else {
        return;
    };

    let hit = math::ray_cube_intersection(
        camera_transform.translation,
        *camera_transform.forward(),
        cube_transform.rotation,
        geometry.half_extent(),
    );
    hud.update_from_orientation(cube_transform.rotation, hit.map(|hit| hit.face));
}

fn hud_overlay_system(mut contexts: EguiContexts, hud: Res<HudState>, faces: Res<FaceSet>) {
    egui::Window::new("NaviCube")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            let name = hud
                .visible_face
                .map(|face| faces.get(face).name.as_str())
                .unwrap_or("—");
            ui.label(
                egui::RichText::new(format!("Visible Face: {name}"))
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            let r = hud.rotation_degrees;
            ui.label(format!(
                "Rotation Info: X:{:.2}° Y:{:.2}° Z:{:.2}°",
                r.x, r.y, r.z
            ));
        });
}
