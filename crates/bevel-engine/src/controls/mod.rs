//! Demo parameters and the keyboard controller that drives them.
//!
//! Settings live in an explicit struct; the controller mutates it once per
//! frame from input state and delta time, and reports when the cube mesh has
//! to be rebuilt.

mod bindings;
mod controller;
mod rounded_cube;
mod settings;

pub use bindings::{AxisKeys, ControlRates, KeyBindings};
pub use controller::{update_settings, FrameUpdate};
pub use rounded_cube::RoundedCube;
pub use settings::{DemoSettings, RADIUS_MAX, SHADER_RADIUS_MIN, TESSELLATION_MAX};
