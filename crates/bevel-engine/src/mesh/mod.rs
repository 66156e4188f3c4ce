//! Patch mesh for the rounded cube.
//!
//! The cube shares its 8 corner vertices between faces; each face is one
//! 4-control-point patch consumed by the host's tessellation stage.
//! Sharing corners keeps texturing limited (no per-face UVs), which is fine
//! for a shading demo.

mod buffers;
mod builder;
mod vertex;

pub use buffers::CubeMeshBuffers;
pub use builder::{CubeMesh, CORNER_TEXCOORDS};
pub use vertex::CubeVertex;
