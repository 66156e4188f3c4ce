use std::fmt;

/// The three faces meeting at a corner do not span 3D space, so no normal
/// evenly splits them.
///
/// Happens when shear collapses the corner (adjacent edges become coplanar or
/// coincident).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DegenerateCorner {
    pub corner: usize,
    /// Denominator of the closed-form solution (zero, tiny or non-finite).
    pub div: f32,
}

impl DegenerateCorner {
    pub(crate) fn new(corner: usize, div: f32) -> Self {
        Self { corner, div }
    }
}

impl fmt::Display for DegenerateCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "degenerate cube corner {}: adjacent face normals are linearly dependent (div = {})",
            self.corner, self.div
        )
    }
}

impl std::error::Error for DegenerateCorner {}
