use anyhow::Result;

use crate::input::{InputFrame, InputState};
use crate::mesh::{CubeMesh, CubeMeshBuffers};
use crate::render::{primitive_state, CubeUniforms, HudText, RenderCtx, Viewport};

use super::bindings::{ControlRates, KeyBindings};
use super::controller::{update_settings, FrameUpdate};
use super::settings::DemoSettings;

/// Controller for the rounded cube demo.
///
/// Owns the settings and the CPU mesh. The mesh is rebuilt whenever the
/// clamped shear changes and flagged for upload until `sync_buffers` runs.
pub struct RoundedCube {
    settings: DemoSettings,
    bindings: KeyBindings,
    rates: ControlRates,
    mesh: CubeMesh,
    mesh_dirty: bool,
}

impl Default for RoundedCube {
    fn default() -> Self {
        Self::new(DemoSettings::default())
    }
}

impl RoundedCube {
    pub fn new(mut settings: DemoSettings) -> Self {
        settings.clamp();
        Self {
            settings,
            bindings: KeyBindings::default(),
            rates: ControlRates::default(),
            mesh: CubeMesh::build(settings.shape()),
            mesh_dirty: true,
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_rates(mut self, rates: ControlRates) -> Self {
        self.rates = rates;
        self
    }

    #[inline]
    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    #[inline]
    pub fn mesh(&self) -> &CubeMesh {
        &self.mesh
    }

    /// True until the current mesh has been uploaded.
    #[inline]
    pub fn mesh_dirty(&self) -> bool {
        self.mesh_dirty
    }

    /// Advances one frame: applies input, then rebuilds the mesh if the shear moved.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, dt: f32) -> FrameUpdate {
        let out = update_settings(&mut self.settings, &self.bindings, &self.rates, input, frame, dt);
        if out.shear_changed {
            self.rebuild();
        }
        out
    }

    /// Replaces the settings wholesale (e.g. from a host UI); rebuilds if the shear moved.
    pub fn set_settings(&mut self, mut settings: DemoSettings) -> FrameUpdate {
        settings.clamp();
        let shear_changed = settings.shear != self.settings.shear;
        self.settings = settings;
        if shear_changed {
            self.rebuild();
        }
        FrameUpdate { shear_changed }
    }

    /// Uploads the mesh if it changed since the last upload. Returns whether it wrote.
    pub fn sync_buffers(&mut self, ctx: &RenderCtx<'_>, buffers: &mut CubeMeshBuffers) -> Result<bool> {
        if !self.mesh_dirty && buffers.vertex_buffer().is_some() {
            return Ok(false);
        }
        buffers.write(ctx, &self.mesh)?;
        self.mesh_dirty = false;
        Ok(true)
    }

    pub fn uniforms(&self, viewport: Viewport) -> CubeUniforms {
        CubeUniforms::new(&self.settings, viewport.aspect())
    }

    pub fn primitive_state(&self) -> wgpu::PrimitiveState {
        primitive_state(self.settings.wireframe)
    }

    pub fn hud(&self) -> HudText {
        HudText::new(&self.settings, &self.bindings)
    }

    fn rebuild(&mut self) {
        self.mesh = CubeMesh::build(self.settings.shape());
        self.mesh_dirty = true;
    }
}
