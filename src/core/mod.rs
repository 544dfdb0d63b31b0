pub mod deform;
pub mod interact;
pub mod layout;
pub mod lifecycle;
pub mod mesh;
pub mod physical;
pub mod reference;

// Shader bundled as a string constant
pub static BLOB_WGSL: &str = include_str!("../../shaders/blob.wgsl");
