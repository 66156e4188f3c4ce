use std::f32::consts::PI;

use glam::Vec2;

use crate::cube::CubeShape;

pub const TESSELLATION_MAX: f32 = 30.0;
pub const RADIUS_MAX: f32 = 0.5;

/// Smallest radius handed to shaders; the rounding math divides by it.
pub const SHADER_RADIUS_MIN: f32 = 0.000001;

/// User-tunable demo parameters.
///
/// `shear.x` skews the cube along Y and `shear.y` along Z (see `CubeShape`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DemoSettings {
    /// Raw tessellation level, `[0, 30]`.
    pub tessellation: f32,
    /// Edge rounding radius, `[0, 0.5]`.
    pub radius: f32,
    /// Rotation about +Z in radians (unbounded).
    pub rotation: f32,
    /// Free parameter forwarded to shaders for experiments, `[0, 1]`.
    pub test: f32,
    pub shear: Vec2,
    pub wireframe: bool,
    pub texture: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            tessellation: 15.0,
            radius: 0.15,
            rotation: PI * 5.0 / 4.0,
            test: 1.0,
            shear: Vec2::ZERO,
            wireframe: true,
            texture: false,
        }
    }
}

impl DemoSettings {
    /// Largest shear magnitude per axis for the current radius.
    ///
    /// Keeps rounded edges from overlapping once the cube is skewed.
    #[inline]
    pub fn shear_limit(&self) -> f32 {
        1.0 - self.radius * 2.0
    }

    /// Clamps every parameter into its valid range.
    ///
    /// Radius is clamped before shear because the shear limit depends on it.
    pub fn clamp(&mut self) {
        self.tessellation = self.tessellation.clamp(0.0, TESSELLATION_MAX);
        self.radius = self.radius.clamp(0.0, RADIUS_MAX);
        self.test = self.test.clamp(0.0, 1.0);

        let limit = self.shear_limit();
        self.shear.x = self.shear.x.max(-limit).min(limit);
        self.shear.y = self.shear.y.max(-limit).min(limit);
    }

    #[inline]
    pub fn shape(&self) -> CubeShape {
        CubeShape::sheared(self.shear)
    }

    /// Odd tessellation factor sent to the hull stage: `1 + 2 * floor(level)`.
    #[inline]
    pub fn tessellation_factor(&self) -> f32 {
        1.0 + self.tessellation.max(0.0).trunc() * 2.0
    }

    #[inline]
    pub fn shader_radius(&self) -> f32 {
        self.radius.max(SHADER_RADIUS_MIN)
    }
}
