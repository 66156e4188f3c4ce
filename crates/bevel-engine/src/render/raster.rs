/// Rasterization for the tessellated cube.
///
/// Wireframe draws lines without culling (needs `wgpu::Features::POLYGON_MODE_LINE`).
/// Solid drops clockwise triangles.
pub fn primitive_state(wireframe: bool) -> wgpu::PrimitiveState {
    let (polygon_mode, cull_mode) = if wireframe {
        (wgpu::PolygonMode::Line, None)
    } else {
        (wgpu::PolygonMode::Fill, Some(wgpu::Face::Back))
    };

    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode,
        polygon_mode,
        unclipped_depth: false,
        conservative: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wireframe_draws_all_lines() {
        let p = primitive_state(true);
        assert_eq!(p.polygon_mode, wgpu::PolygonMode::Line);
        assert_eq!(p.cull_mode, None);
    }

    #[test]
    fn solid_culls_clockwise_triangles() {
        let p = primitive_state(false);
        assert_eq!(p.polygon_mode, wgpu::PolygonMode::Fill);
        assert_eq!(p.front_face, wgpu::FrontFace::Ccw);
        assert_eq!(p.cull_mode, Some(wgpu::Face::Back));
    }
}
