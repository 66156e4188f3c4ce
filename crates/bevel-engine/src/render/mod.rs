//! Renderer-facing plumbing.
//!
//! The host owns the device, pipelines and shaders. This module turns demo
//! settings into the typed values those pipelines consume:
//! - `CubeUniforms` replaces name-indexed effect parameters
//! - `primitive_state` selects wireframe or solid rasterization
//! - `HudText` is the overlay the host draws with its own text renderer

mod ctx;
mod hud;
mod raster;
mod uniforms;

pub use ctx::{RenderCtx, Viewport};
pub use hud::HudText;
pub use raster::primitive_state;
pub use uniforms::{Camera, CubeUniforms};
