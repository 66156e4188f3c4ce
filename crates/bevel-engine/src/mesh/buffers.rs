use anyhow::Result;

use crate::render::RenderCtx;

use super::builder::CubeMesh;
use super::vertex::CubeVertex;

/// GPU vertex/index buffers for a `CubeMesh`.
///
/// Buffers are created on the first `write` and reused afterwards; a rebuilt
/// mesh has the same size, so later writes only copy new contents.
#[derive(Default)]
pub struct CubeMeshBuffers {
    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
    index_count: u32,
}

impl CubeMeshBuffers {
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `mesh`, allocating buffers on first use.
    pub fn write(&mut self, ctx: &RenderCtx<'_>, mesh: &CubeMesh) -> Result<()> {
        anyhow::ensure!(
            mesh.vertices
                .iter()
                .flat_map(|v| v.position.iter().chain(v.normal.iter()))
                .all(|c| c.is_finite()),
            "refusing to upload non-finite cube vertices ({:?})",
            mesh.shape
        );

        self.ensure_buffers(ctx, mesh);

        let Some(vbo) = self.vbo.as_ref() else { return Ok(()); };
        let Some(ibo) = self.ibo.as_ref() else { return Ok(()); };

        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&mesh.vertices));
        ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&mesh.indices));
        self.index_count = mesh.indices.len() as u32;

        Ok(())
    }

    pub fn vertex_buffer(&self) -> Option<&wgpu::Buffer> {
        self.vbo.as_ref()
    }

    pub fn index_buffer(&self) -> Option<&wgpu::Buffer> {
        self.ibo.as_ref()
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Binds the buffers and issues the patch draw. Does nothing before the first `write`.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(vbo) = self.vbo.as_ref() else { return; };
        let Some(ibo) = self.ibo.as_ref() else { return; };

        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), Self::INDEX_FORMAT);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>, mesh: &CubeMesh) {
        if self.vbo.is_none() {
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("bevel cube vbo"),
                size: std::mem::size_of_val(&mesh.vertices) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
        if self.ibo.is_none() {
            self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("bevel cube ibo"),
                size: std::mem::size_of_val(&mesh.indices) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
    }
}

const _: () = assert!(std::mem::size_of::<CubeVertex>() % wgpu::COPY_BUFFER_ALIGNMENT as usize == 0);

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_device() -> (wgpu::Device, wgpu::Queue) {
        wgpu::Device::noop(&wgpu::DeviceDescriptor::default())
    }

    // ── allocation ─────────────────────────────────────────────────────────

    #[test]
    fn buffers_are_empty_before_first_write() {
        let buffers = CubeMeshBuffers::new();
        assert!(buffers.vertex_buffer().is_none());
        assert!(buffers.index_buffer().is_none());
        assert_eq!(buffers.index_count(), 0);
    }

    #[test]
    fn first_write_allocates_sized_buffers() {
        let (device, queue) = noop_device();
        let ctx = RenderCtx::new(&device, &queue);
        let mut buffers = CubeMeshBuffers::new();

        buffers.write(&ctx, &CubeMesh::default()).unwrap();

        let vbo = buffers.vertex_buffer().unwrap();
        let ibo = buffers.index_buffer().unwrap();
        assert_eq!(vbo.size(), 256);
        assert_eq!(ibo.size(), 96);
        assert!(vbo.usage().contains(wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST));
        assert!(ibo.usage().contains(wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST));
        assert_eq!(buffers.index_count(), 24);
    }

    #[test]
    fn rewrite_keeps_buffer_sizes() {
        let (device, queue) = noop_device();
        let ctx = RenderCtx::new(&device, &queue);
        let mut buffers = CubeMeshBuffers::new();

        buffers.write(&ctx, &CubeMesh::default()).unwrap();
        let sheared = CubeMesh::build(crate::cube::CubeShape::new(0.5, 0.3, -0.2));
        buffers.write(&ctx, &sheared).unwrap();

        assert_eq!(buffers.vertex_buffer().unwrap().size(), 256);
        assert_eq!(buffers.index_buffer().unwrap().size(), 96);
        assert_eq!(buffers.index_count(), 24);
    }

    // ── validation ─────────────────────────────────────────────────────────

    #[test]
    fn non_finite_mesh_is_rejected_without_allocating() {
        let (device, queue) = noop_device();
        let ctx = RenderCtx::new(&device, &queue);
        let mut buffers = CubeMeshBuffers::new();

        let mut mesh = CubeMesh::default();
        mesh.vertices[3].position[1] = f32::NAN;

        assert!(buffers.write(&ctx, &mesh).is_err());
        assert!(buffers.vertex_buffer().is_none());
        assert!(buffers.index_buffer().is_none());
        assert_eq!(buffers.index_count(), 0);
    }

    #[test]
    fn rejected_write_keeps_previous_upload() {
        let (device, queue) = noop_device();
        let ctx = RenderCtx::new(&device, &queue);
        let mut buffers = CubeMeshBuffers::new();
        buffers.write(&ctx, &CubeMesh::default()).unwrap();

        let mut mesh = CubeMesh::default();
        mesh.vertices[0].normal[2] = f32::INFINITY;

        assert!(buffers.write(&ctx, &mesh).is_err());
        assert!(buffers.vertex_buffer().is_some());
        assert_eq!(buffers.index_count(), 24);
    }
}
