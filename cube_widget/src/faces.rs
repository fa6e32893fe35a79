//! Face descriptors: what each cube side looks like and where it navigates.
//!
//! The order of descriptors in a [`FaceSet`] is the contract between face
//! index and cube geometry side. It is owned by whoever builds the set
//! (config, tests), never by the widget itself.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::math::FACE_COUNT;

pub const DEFAULT_FACE_OPACITY: f32 = 0.2;

/// Visual style for one face.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceStyle {
    /// Flat color, `#rrggbb` hex.
    Color { hex: String },
    /// Textured face; path is resolved against the bevy asset root.
    Image { path: String },
}

/// One cube side: style, display name, and navigation target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaceDescriptor {
    pub style: FaceStyle,
    pub name: String,
    pub link: Url,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_opacity() -> f32 {
    DEFAULT_FACE_OPACITY
}

/// Exactly six ordered face descriptors, injected into the app as a resource.
#[derive(Resource, Clone, Debug)]
pub struct FaceSet {
    faces: [FaceDescriptor; FACE_COUNT],
}

impl FaceSet {
    /// Builds a set from a vec, rejecting anything but exactly six entries.
    pub fn from_vec(faces: Vec<FaceDescriptor>) -> Result<Self, String> {
        let len = faces.len();
        let faces: [FaceDescriptor; FACE_COUNT] = faces
            .try_into()
            .map_err(|_| format!("expected {FACE_COUNT} face descriptors, got {len}"))?;
        Ok(Self { faces })
    }

    pub fn get(&self, face: usize) -> &FaceDescriptor {
        &self.faces[face]
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaceDescriptor> {
        self.faces.iter()
    }
}

impl Default for FaceSet {
    fn default() -> Self {
        default_faces()
    }
}

const GRAY_PURPLE: &str = "#282431";
const LAVENDER: &str = "#7a6e88";
const PURPLE: &str = "#583d75";

/// The built-in face set used when no config is provided.
pub fn default_faces() -> FaceSet {
    let link: Url = "https://google.com"
        .parse()
        .unwrap_or_else(|err| panic!("navicube: default face link is invalid: {err}"));

    let color = |hex: &str, name: &str| FaceDescriptor {
        style: FaceStyle::Color { hex: hex.into() },
        name: name.into(),
        link: link.clone(),
        opacity: DEFAULT_FACE_OPACITY,
    };

    let faces = vec![
        color(GRAY_PURPLE, "Face 1"),
        color(GRAY_PURPLE, "Face 2"),
        color(LAVENDER, "Face 3"),
        color(LAVENDER, "Face 4"),
        color(PURPLE, "Face 5"),
        FaceDescriptor {
            style: FaceStyle::Image {
                path: "textures/face6.png".into(),
            },
            name: "Face 6".into(),
            link,
            opacity: DEFAULT_FACE_OPACITY,
        },
    ];

    FaceSet::from_vec(faces).expect("default face set has six entries")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> FaceDescriptor {
        FaceDescriptor {
            style: FaceStyle::Color {
                hex: "#112233".into(),
            },
            name: name.into(),
            link: "https://example.com/a".parse().unwrap(),
            opacity: 0.5,
        }
    }

    #[test]
    fn from_vec_rejects_wrong_counts() {
        let five: Vec<_> = (0..5).map(|i| descriptor(&format!("F{i}"))).collect();
        assert!(FaceSet::from_vec(five).is_err());

        let seven: Vec<_> = (0..7).map(|i| descriptor(&format!("F{i}"))).collect();
        assert!(FaceSet::from_vec(seven).is_err());
    }

    #[test]
    fn from_vec_preserves_order() {
        let six: Vec<_> = (0..6).map(|i| descriptor(&format!("F{i}"))).collect();
        let set = FaceSet::from_vec(six).unwrap();
        for i in 0..6 {
            assert_eq!(set.get(i).name, format!("F{i}"));
        }
    }

    #[test]
    fn descriptor_json_defaults_opacity() {
        let json = r##"{
            "style": { "color": { "hex": "#583d75" } },
            "name": "Docs",
            "link": "https://example.com/docs"
        }"##;
        let face: FaceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(face.opacity, DEFAULT_FACE_OPACITY);
        assert_eq!(face.link.as_str(), "https://example.com/docs");
    }

    #[test]
    fn default_faces_has_six_entries_with_links() {
        let set = default_faces();
        assert_eq!(set.iter().count(), 6);
        for face in set.iter() {
            assert!(face.link.as_str().starts_with("https://"));
        }
    }
}
