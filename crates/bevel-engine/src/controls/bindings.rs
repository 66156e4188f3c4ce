use crate::input::{InputState, Key};

/// Pair of keys that move a value down/up while held.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AxisKeys {
    pub decrease: Key,
    pub increase: Key,
}

impl AxisKeys {
    #[inline]
    pub const fn new(decrease: Key, increase: Key) -> Self {
        Self { decrease, increase }
    }

    /// `+1`, `-1`, or `0` when neither or both keys are held.
    pub fn direction(&self, input: &InputState) -> f32 {
        let up = if input.key_down(self.increase) { 1.0 } else { 0.0 };
        let down = if input.key_down(self.decrease) { 1.0 } else { 0.0 };
        up - down
    }
}

/// Keyboard layout of the demo.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyBindings {
    pub tessellation: AxisKeys,
    pub radius: AxisKeys,
    pub test: AxisKeys,
    pub rotation: AxisKeys,
    /// Shear along Y (`DemoSettings::shear.x`).
    pub shear_y: AxisKeys,
    /// Shear along Z (`DemoSettings::shear.y`).
    pub shear_z: AxisKeys,
    pub toggle_wireframe: Key,
    pub toggle_texture: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            tessellation: AxisKeys::new(Key::Q, Key::W),
            radius: AxisKeys::new(Key::A, Key::S),
            test: AxisKeys::new(Key::Digit1, Key::Digit2),
            rotation: AxisKeys::new(Key::Z, Key::X),
            shear_y: AxisKeys::new(Key::ArrowRight, Key::ArrowLeft),
            shear_z: AxisKeys::new(Key::ArrowDown, Key::ArrowUp),
            toggle_wireframe: Key::Space,
            toggle_texture: Key::Tab,
        }
    }
}

/// Change per second while an axis key is held.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlRates {
    pub tessellation: f32,
    pub radius: f32,
    pub test: f32,
    /// Radians per second.
    pub rotation: f32,
    pub shear: f32,
}

impl Default for ControlRates {
    fn default() -> Self {
        Self {
            tessellation: 10.0,
            radius: 0.3,
            test: 2.0,
            rotation: 1.0,
            shear: 1.0,
        }
    }
}
