pub(crate) mod cube;
pub(crate) mod depth_sort;
pub(crate) mod materials;

pub use cube::{
    resize_cube, setup_scene, CubeGeometry, CubeRoot, FaceMaterials, FacePanel, CAMERA_DISTANCE,
};
pub use depth_sort::{depth_sort_plugin, FaceDrawOrder};
