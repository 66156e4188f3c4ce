use crate::input::{InputFrame, InputState};

use super::bindings::{ControlRates, KeyBindings};
use super::settings::DemoSettings;

/// Outcome of one controller step.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameUpdate {
    /// Clamped shear differs from the previous frame; corner positions,
    /// normals and the mesh must be rebuilt.
    pub shear_changed: bool,
}

/// Applies one frame of keyboard input to `settings`.
///
/// Axis keys change their value by `rate * dt` while held. Toggles flip on the
/// press edge only, so holding them does not flicker. Settings are clamped
/// before the shear comparison.
pub fn update_settings(
    settings: &mut DemoSettings,
    bindings: &KeyBindings,
    rates: &ControlRates,
    input: &InputState,
    frame: &InputFrame,
    dt: f32,
) -> FrameUpdate {
    let shear_old = settings.shear;

    settings.tessellation += bindings.tessellation.direction(input) * rates.tessellation * dt;
    settings.radius += bindings.radius.direction(input) * rates.radius * dt;
    settings.test += bindings.test.direction(input) * rates.test * dt;
    settings.rotation += bindings.rotation.direction(input) * rates.rotation * dt;
    settings.shear.x += bindings.shear_y.direction(input) * rates.shear * dt;
    settings.shear.y += bindings.shear_z.direction(input) * rates.shear * dt;

    if frame.key_pressed(bindings.toggle_wireframe) {
        settings.wireframe = !settings.wireframe;
        log::debug!("wireframe {}", if settings.wireframe { "on" } else { "off" });
    }
    if frame.key_pressed(bindings.toggle_texture) {
        settings.texture = !settings.texture;
        log::debug!("texture {}", if settings.texture { "on" } else { "off" });
    }

    settings.clamp();

    FrameUpdate {
        shear_changed: settings.shear != shear_old,
    }
}
