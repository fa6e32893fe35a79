//! Face material construction and opacity helpers.

use bevy::prelude::*;

use crate::faces::{FaceDescriptor, FaceStyle};

/// Builds the unlit, alpha-blended material for one face. Both sides render
/// so the far faces show through the near ones.
pub fn face_material(face: &FaceDescriptor, asset_server: &AssetServer) -> StandardMaterial {
    let mut material = StandardMaterial {
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        double_sided: true,
        ..default()
    };

    match &face.style {
        FaceStyle::Color { hex } => {
            let color = parse_hex_color(hex).unwrap_or_else(|| {
                eprintln!(
                    "navicube: bad color {hex:?} on face {:?}, using white",
                    face.name
                );
                Color::WHITE
            });
            material.base_color = color.with_alpha(face.opacity);
        }
        FaceStyle::Image { path } => {
            material.base_color = Color::WHITE.with_alpha(face.opacity);
            material.base_color_texture = Some(asset_server.load(path.clone()));
        }
    }

    material
}

/// Rewrites a face material's alpha, preserving its color/texture.
pub fn set_face_opacity(material: &mut StandardMaterial, alpha: f32) {
    material.base_color = material.base_color.with_alpha(alpha);
}

/// Parses `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::srgb_u8(r, g, b))
}
