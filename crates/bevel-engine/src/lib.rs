//! Bevel engine crate.
//!
//! This crate owns the CPU side of a tessellation-rounded cube: corner geometry,
//! evenly split corner normals, the patch mesh and the per-frame parameters a
//! host renderer feeds into its shaders.

pub mod cube;
pub mod mesh;
pub mod input;
pub mod controls;

pub mod logging;
pub mod render;
