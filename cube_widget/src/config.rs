//! Env parsing for the face-set config.

use std::path::Path;

use crate::faces::{default_faces, FaceDescriptor, FaceSet};

const FACES_ENV_VAR: &str = "NAVICUBE_FACES";

/// Returns the face set to build the cube from.
/// `NAVICUBE_FACES` may point at a JSON file of six descriptors; anything
/// missing or malformed falls back to the built-in defaults.
pub fn face_set() -> FaceSet {
    match std::env::var(FACES_ENV_VAR) {
        Ok(path) => match load_face_file(Path::new(&path)) {
            Ok(set) => set,
            Err(err) => {
                eprintln!("navicube: ignoring {FACES_ENV_VAR}={path:?}: {err}");
                default_faces()
            }
        },
        Err(_) => default_faces(),
    }
}

fn load_face_file(path: &Path) -> Result<FaceSet, String> {
    let json = std::fs::read_to_string(path).map_err(|err| format!("read failed: {err}"))?;
    let descriptors: Vec<FaceDescriptor> =
        serde_json::from_str(&json).map_err(|err| format!("invalid JSON: {err}"))?;
    FaceSet::from_vec(descriptors)
}
