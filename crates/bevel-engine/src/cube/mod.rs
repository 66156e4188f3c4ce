//! Cube geometry shared by the mesh builder, renderers and tools.
//!
//! Canonical space:
//! - +X right, +Y rear, +Z up
//! - cube centered on the origin
//!
//! Corner order is load-bearing; every table in this module indexes into it:
//!
//! | idx | corner             |
//! |-----|--------------------|
//! | 0   | top-rear-left      |
//! | 1   | top-rear-right     |
//! | 2   | top-front-right    |
//! | 3   | top-front-left     |
//! | 4   | bottom-rear-left   |
//! | 5   | bottom-rear-right  |
//! | 6   | bottom-front-right |
//! | 7   | bottom-front-left  |

mod corners;
mod error;
mod normals;
mod topology;

pub use corners::{corner_positions, CubeShape, CORNER_COUNT, CORNER_NAMES, DEFAULT_HALF_EXTENT};
pub use error::DegenerateCorner;
pub use normals::{
    adjacent_face_normals,
    bisection_residual,
    corner_normal,
    corner_normals,
    try_corner_normal,
    DEGENERATE_EPSILON,
};
pub use topology::{patch_indices, Face, ADJACENCY, FACES, OPPOSITE, PATCH_INDEX_COUNT};
