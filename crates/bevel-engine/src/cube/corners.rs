use glam::{Vec2, Vec3};

pub const CORNER_COUNT: usize = 8;

/// Half-extent used by the demo cube (unit edge length).
pub const DEFAULT_HALF_EXTENT: f32 = 0.5;

pub const CORNER_NAMES: [&str; CORNER_COUNT] = [
    "top-rear-left",
    "top-rear-right",
    "top-front-right",
    "top-front-left",
    "bottom-rear-left",
    "bottom-rear-right",
    "bottom-front-right",
    "bottom-front-left",
];

/// Half-extent and shear of a cube.
///
/// Shearing slides the right half (+X) of the cube by `+shear` and the left
/// half by `-shear`, along Y for `shear_y` and along Z for `shear_z`. The
/// result is a parallelepiped that keeps 8 corners and 6 quad faces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubeShape {
    pub half_extent: f32,
    pub shear_y: f32,
    pub shear_z: f32,
}

impl CubeShape {
    #[inline]
    pub const fn new(half_extent: f32, shear_y: f32, shear_z: f32) -> Self {
        Self { half_extent, shear_y, shear_z }
    }

    /// Unsheared cube with the default half-extent.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(DEFAULT_HALF_EXTENT, 0.0, 0.0)
    }

    /// Default half-extent, sheared by `shear` (`.x` along Y, `.y` along Z).
    #[inline]
    pub const fn sheared(shear: Vec2) -> Self {
        Self::new(DEFAULT_HALF_EXTENT, shear.x, shear.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.half_extent.is_finite() && self.shear_y.is_finite() && self.shear_z.is_finite()
    }

    #[inline]
    pub fn corners(self) -> [Vec3; CORNER_COUNT] {
        corner_positions(self.half_extent, self.shear_y, self.shear_z)
    }
}

impl Default for CubeShape {
    fn default() -> Self {
        Self::unit()
    }
}

/// Returns the 8 corner positions in canonical order.
pub fn corner_positions(s: f32, sy: f32, sz: f32) -> [Vec3; CORNER_COUNT] {
    [
        Vec3::new(-s,  s - sy,  s - sz), // top-rear-left
        Vec3::new( s,  s + sy,  s + sz), // top-rear-right
        Vec3::new( s, -s + sy,  s + sz), // top-front-right
        Vec3::new(-s, -s - sy,  s - sz), // top-front-left
        Vec3::new(-s,  s - sy, -s - sz), // bottom-rear-left
        Vec3::new( s,  s + sy, -s + sz), // bottom-rear-right
        Vec3::new( s, -s + sy, -s + sz), // bottom-front-right
        Vec3::new(-s, -s - sy, -s - sz), // bottom-front-left
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── unsheared ─────────────────────────────────────────────────────────

    #[test]
    fn unit_cube_corners_are_at_half_extent() {
        for p in CubeShape::unit().corners() {
            assert_eq!(p.abs(), Vec3::splat(DEFAULT_HALF_EXTENT));
        }
    }

    #[test]
    fn unit_cube_corner_signs_follow_names() {
        let corners = CubeShape::unit().corners();
        for (p, name) in corners.iter().zip(CORNER_NAMES) {
            assert_eq!(p.z > 0.0, name.starts_with("top"), "{name}");
            assert_eq!(p.y > 0.0, name.contains("rear"), "{name}");
            assert_eq!(p.x > 0.0, name.ends_with("right"), "{name}");
        }
    }

    // ── sheared ───────────────────────────────────────────────────────────

    #[test]
    fn shear_moves_left_and_right_halves_in_opposite_directions() {
        let base = CubeShape::unit().corners();
        let sheared = CubeShape::new(DEFAULT_HALF_EXTENT, 0.2, -0.1).corners();

        for (b, s) in base.iter().zip(sheared.iter()) {
            let side = b.x.signum();
            assert_eq!(s.x, b.x);
            assert!((s.y - (b.y + 0.2 * side)).abs() < 1e-6);
            assert!((s.z - (b.z - 0.1 * side)).abs() < 1e-6);
        }
    }

    #[test]
    fn centroid_stays_at_origin_under_shear() {
        let corners = CubeShape::new(0.5, 0.35, -0.6).corners();
        let centroid = corners.iter().copied().sum::<Vec3>() / CORNER_COUNT as f32;
        assert!(centroid.length() < 1e-6);
    }

    #[test]
    fn sheared_uses_x_for_y_axis_and_y_for_z_axis() {
        let shape = CubeShape::sheared(Vec2::new(0.3, -0.2));
        assert_eq!(shape, CubeShape::new(DEFAULT_HALF_EXTENT, 0.3, -0.2));
        assert!(shape.is_finite());
        assert!(!CubeShape::new(f32::NAN, 0.0, 0.0).is_finite());
    }
}
