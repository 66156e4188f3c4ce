use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex layout (32 bytes):
///
///  offset  0  position  [f32; 3]   loc 0
///  offset 12  normal    [f32; 3]   loc 1
///  offset 24  texcoord  [f32; 2]   loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2  // texcoord
    ];

    #[inline]
    pub fn new(position: Vec3, normal: Vec3, texcoord: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            texcoord: texcoord.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CubeVertex>(), 32);
        assert_eq!(CubeVertex::layout().array_stride, 32);
    }

    #[test]
    fn layout_offsets_and_locations() {
        let layout = CubeVertex::layout();
        let attrs: Vec<(u64, u32)> = layout
            .attributes
            .iter()
            .map(|a| (a.offset, a.shader_location))
            .collect();
        assert_eq!(attrs, vec![(0, 0), (12, 1), (24, 2)]);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn bytes_follow_field_order() {
        let v = CubeVertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z, Vec2::new(0.5, 1.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.5, 1.0]);
    }
}
