use glam::Vec2;

use crate::cube::{corner_normals, patch_indices, CubeShape, CORNER_COUNT, PATCH_INDEX_COUNT};

use super::vertex::CubeVertex;

/// Per-corner texture coordinates.
///
/// Top corners sit on v = 0, bottom corners on v = 1; left corners on u = 0,
/// right corners on u = 1.
pub const CORNER_TEXCOORDS: [Vec2; CORNER_COUNT] = [
    Vec2::new(0.0, 0.0), // top-rear-left
    Vec2::new(1.0, 0.0), // top-rear-right
    Vec2::new(1.0, 0.0), // top-front-right
    Vec2::new(0.0, 0.0), // top-front-left
    Vec2::new(0.0, 1.0), // bottom-rear-left
    Vec2::new(1.0, 1.0), // bottom-rear-right
    Vec2::new(1.0, 1.0), // bottom-front-right
    Vec2::new(0.0, 1.0), // bottom-front-left
];

/// CPU copy of the cube patch mesh.
///
/// Rebuilt as a whole whenever the shape changes; there is no incremental update.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    pub shape: CubeShape,
    pub vertices: [CubeVertex; CORNER_COUNT],
    pub indices: [u32; PATCH_INDEX_COUNT],
}

impl CubeMesh {
    pub fn build(shape: CubeShape) -> Self {
        let positions = shape.corners();
        let normals = corner_normals(&positions);

        let vertices = std::array::from_fn(|i| {
            CubeVertex::new(positions[i], normals[i], CORNER_TEXCOORDS[i])
        });

        log::debug!(
            "built cube mesh (half_extent={}, shear=({}, {}))",
            shape.half_extent,
            shape.shear_y,
            shape.shear_z
        );

        Self {
            shape,
            vertices,
            indices: patch_indices(),
        }
    }

    /// Number of 4-control-point patches.
    #[inline]
    pub fn patch_count(&self) -> u32 {
        (self.indices.len() / 4) as u32
    }
}

impl Default for CubeMesh {
    fn default() -> Self {
        Self::build(CubeShape::unit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn unit_mesh_has_six_patches() {
        let mesh = CubeMesh::default();
        assert_eq!(mesh.patch_count(), 6);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < CORNER_COUNT));
    }

    #[test]
    fn vertices_carry_positions_normals_and_texcoords() {
        let shape = CubeShape::new(0.5, 0.25, -0.1);
        let mesh = CubeMesh::build(shape);
        let positions = shape.corners();
        let normals = corner_normals(&positions);

        for (i, v) in mesh.vertices.iter().enumerate() {
            assert_eq!(v.position, positions[i].to_array());
            assert_eq!(v.normal, normals[i].to_array());
            assert_eq!(v.texcoord, CORNER_TEXCOORDS[i].to_array());
        }
    }

    #[test]
    fn shear_changes_positions_and_normals_but_not_indices() {
        let flat = CubeMesh::build(CubeShape::unit());
        let sheared = CubeMesh::build(CubeShape::new(0.5, 0.4, 0.0));

        assert_eq!(flat.indices, sheared.indices);
        assert_ne!(flat.vertices[0].position, sheared.vertices[0].position);
        assert_ne!(flat.vertices[0].normal, sheared.vertices[0].normal);
    }

    #[test]
    fn normals_are_unit_length() {
        let mesh = CubeMesh::build(CubeShape::new(0.5, -0.6, 0.6));
        for v in mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }
}
