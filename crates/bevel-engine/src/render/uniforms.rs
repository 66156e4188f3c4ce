use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::controls::DemoSettings;

/// Orbit-free demo camera looking down at the cube from the front.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    const BASE_POSITION: Vec3 = Vec3::new(0.0, -1.4, 0.9);

    /// Camera for the given settings; backs off as the cube is sheared so it stays in frame.
    pub fn for_settings(settings: &DemoSettings) -> Self {
        Self {
            position: Self::BASE_POSITION * (1.0 + settings.shear.length() * 0.3),
            target: Vec3::new(0.0, 0.0, 0.05),
            up: Vec3::Y,
            fov_y: 60f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    #[inline]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }
}

/// Shader parameter block for the rounded cube pipeline.
///
/// Layout (224 bytes, std140 compatible):
///
///  offset   0  world            mat4x4<f32>
///  offset  64  world_rot        mat4x4<f32>
///  offset 128  view_projection  mat4x4<f32>
///  offset 192  cam_pos          vec3<f32>
///  offset 204  tessellation     f32  (odd factor, see `DemoSettings::tessellation_factor`)
///  offset 208  radius           f32
///  offset 212  enable_texture   f32  (0 or 1)
///  offset 216  test             f32
///  offset 220  _pad             f32
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeUniforms {
    pub world: [[f32; 4]; 4],
    pub world_rot: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
    pub cam_pos: [f32; 3],
    pub tessellation: f32,
    pub radius: f32,
    pub enable_texture: f32,
    pub test: f32,
    pub _pad: f32,
}

impl CubeUniforms {
    pub fn new(settings: &DemoSettings, aspect: f32) -> Self {
        let camera = Camera::for_settings(settings);
        let world_rot = Mat4::from_rotation_z(settings.rotation);
        let view_projection = camera.projection(aspect) * camera.view();

        Self {
            world: world_rot.to_cols_array_2d(),
            world_rot: world_rot.to_cols_array_2d(),
            view_projection: view_projection.to_cols_array_2d(),
            cam_pos: camera.position.to_array(),
            tessellation: settings.tessellation_factor(),
            radius: settings.shader_radius(),
            enable_texture: if settings.texture { 1.0 } else { 0.0 },
            test: settings.test,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn aspect() -> f32 {
        16.0 / 9.0
    }

    #[test]
    fn uniform_block_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<CubeUniforms>(), 224);
        assert_eq!(std::mem::size_of::<CubeUniforms>() % 16, 0);
    }

    #[test]
    fn scalar_parameters_come_from_settings() {
        let settings = DemoSettings {
            tessellation: 4.6,
            radius: 0.0,
            texture: true,
            test: 0.25,
            ..DemoSettings::default()
        };
        let u = CubeUniforms::new(&settings, aspect());
        assert_eq!(u.tessellation, 9.0);
        assert_eq!(u.radius, 0.000001);
        assert_eq!(u.enable_texture, 1.0);
        assert_eq!(u.test, 0.25);
    }

    #[test]
    fn zero_rotation_is_identity_world() {
        let settings = DemoSettings { rotation: 0.0, ..DemoSettings::default() };
        let u = CubeUniforms::new(&settings, aspect());
        assert_eq!(u.world, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(u.world, u.world_rot);
    }

    #[test]
    fn camera_backs_off_with_shear() {
        let flat = Camera::for_settings(&DemoSettings::default());
        let sheared = Camera::for_settings(&DemoSettings {
            shear: Vec2::new(0.3, 0.4),
            ..DemoSettings::default()
        });
        // |shear| = 0.5 -> distance scaled by 1.15
        let ratio = sheared.position.length() / flat.position.length();
        assert!((ratio - 1.15).abs() < 1e-5);
    }

    #[test]
    fn camera_target_projects_to_screen_center() {
        let settings = DemoSettings::default();
        let u = CubeUniforms::new(&settings, aspect());
        let vp = Mat4::from_cols_array_2d(&u.view_projection);
        let ndc = vp.project_point3(Camera::for_settings(&settings).target);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "{ndc}");
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn cube_is_in_front_of_camera() {
        let camera = Camera::for_settings(&DemoSettings::default());
        let p = camera.view().transform_point3(Vec3::ZERO);
        assert!(p.z < 0.0);
    }
}
