//! Evenly split corner normals.
//!
//! A corner normal is "evenly split" when it forms the same angle with each
//! of the three faces meeting at the corner:
//!
//! `dot(norm, n1) == dot(norm, n2) == dot(norm, n3)`
//!
//! The tessellation stage rounds cube edges along these normals, so the
//! construction (including the sign choice below) must stay exactly as is for
//! the rounding to line up across faces.

use glam::Vec3;

use super::corners::CORNER_COUNT;
use super::error::DegenerateCorner;
use super::topology::ADJACENCY;

/// Below this `|div|` the adjacent face normals are treated as linearly dependent.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Unit edge vectors leaving a corner and the face normals between them.
struct CornerFrame {
    edges: [Vec3; 3],
    faces: [Vec3; 3],
}

impl CornerFrame {
    fn new(positions: &[Vec3; CORNER_COUNT], corner: usize) -> Self {
        let origin = positions[corner];
        let [a, b, c] = ADJACENCY[corner];

        let v1 = (positions[a] - origin).normalize();
        let v2 = (positions[b] - origin).normalize();
        let v3 = (positions[c] - origin).normalize();

        Self {
            edges: [v1, v2, v3],
            faces: [
                v1.cross(v2).normalize(),
                v2.cross(v3).normalize(),
                v3.cross(v1).normalize(),
            ],
        }
    }

    /// Sum of the edge directions; points into the solid.
    fn guide(&self) -> Vec3 {
        self.edges[0] + self.edges[1] + self.edges[2]
    }
}

/// Returns the normals of the three faces meeting at `corner`, in adjacency order.
///
/// Orientation follows the cross-product order, not the outside of the cube.
///
/// # Panics
/// Panics if `corner >= 8`.
pub fn adjacent_face_normals(positions: &[Vec3; CORNER_COUNT], corner: usize) -> [Vec3; 3] {
    CornerFrame::new(positions, corner).faces
}

/// Computes the evenly split normal of `corner`, or reports a degenerate corner.
///
/// # Panics
/// Panics if `corner >= 8`.
pub fn try_corner_normal(
    positions: &[Vec3; CORNER_COUNT],
    corner: usize,
) -> Result<Vec3, DegenerateCorner> {
    let frame = CornerFrame::new(positions, corner);
    let [n1, n2, n3] = frame.faces;

    // Solve the equal-dot condition for norm = (x, y, 1).
    let div = n2.x * (n3.y - n1.y) + n2.y * (n1.x - n3.x) - n1.x * n3.y + n1.y * n3.x;
    if !div.is_finite() || div.abs() < DEGENERATE_EPSILON {
        return Err(DegenerateCorner::new(corner, div));
    }

    let x = (n2.y * (n3.z - n1.z) + n2.z * (n1.y - n3.y) - n1.y * n3.z + n1.z * n3.y) / div;
    let y = (n2.x * (n3.z - n1.z) + n2.z * (n1.x - n3.x) - n1.x * n3.z + n1.z * n3.x) / div;

    let mut norm = Vec3::new(x, y, 1.0).normalize();
    if !norm.is_finite() {
        return Err(DegenerateCorner::new(corner, div));
    }

    // Each component may be flipped; keep the solution facing away from the guide.
    let guide = frame.guide();
    norm.x = away_from(norm.x, guide.x);
    norm.y = away_from(norm.y, guide.y);
    norm.z = away_from(norm.z, guide.z);

    Ok(norm)
}

#[inline]
fn away_from(component: f32, guide: f32) -> f32 {
    if component * guide < 0.0 { component } else { -component }
}

/// Computes the evenly split normal of `corner`, falling back for degenerate corners.
///
/// Fallback order: the reversed guide direction (outward from the corner),
/// then the direction from the centroid of all corners, then +Z.
///
/// # Panics
/// Panics if `corner >= 8`.
pub fn corner_normal(positions: &[Vec3; CORNER_COUNT], corner: usize) -> Vec3 {
    match try_corner_normal(positions, corner) {
        Ok(norm) => norm,
        Err(err) => {
            let fallback = fallback_normal(positions, corner);
            log::warn!("{err}; using fallback normal {fallback}");
            fallback
        }
    }
}

fn fallback_normal(positions: &[Vec3; CORNER_COUNT], corner: usize) -> Vec3 {
    if let Some(outward) = (-CornerFrame::new(positions, corner).guide()).try_normalize() {
        return outward;
    }

    let centroid = positions.iter().copied().sum::<Vec3>() / CORNER_COUNT as f32;
    (positions[corner] - centroid)
        .try_normalize()
        .unwrap_or(Vec3::Z)
}

/// Computes all 8 corner normals in canonical order.
pub fn corner_normals(positions: &[Vec3; CORNER_COUNT]) -> [Vec3; CORNER_COUNT] {
    std::array::from_fn(|corner| corner_normal(positions, corner))
}

/// Largest pairwise difference between `dot(normal, n_i)` for the three faces at `corner`.
///
/// Zero (up to rounding) for an evenly split normal.
pub fn bisection_residual(positions: &[Vec3; CORNER_COUNT], corner: usize, normal: Vec3) -> f32 {
    let dots = adjacent_face_normals(positions, corner).map(|n| normal.dot(n));
    let max = dots.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let min = dots.iter().copied().fold(f32::INFINITY, f32::min);
    max - min
}
