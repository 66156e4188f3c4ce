use glam::Vec2;

use crate::controls::{AxisKeys, DemoSettings, KeyBindings};
use crate::input::Key;

/// Debug overlay: a label column on the left, a value column on the right.
///
/// Labels name the keys of the active `KeyBindings`.
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub labels: String,
    pub values: String,
}

impl HudText {
    /// Top-left of the label column, in pixels of the demo viewport.
    pub const LABEL_ORIGIN: Vec2 = Vec2::new(30.0, 30.0);
    /// Top-left of the value column.
    pub const VALUE_ORIGIN: Vec2 = Vec2::new(1050.0, 30.0);

    pub fn new(settings: &DemoSettings, bindings: &KeyBindings) -> Self {
        let labels = [
            axis_label(&bindings.tessellation, "Tessellation"),
            axis_label(&bindings.radius, "Radius"),
            axis_label(&bindings.rotation, "Rotation"),
            shear_label(bindings),
            format!("{} for Wireframe:", bindings.toggle_wireframe),
            format!("{} for Texture:", bindings.toggle_texture),
        ];
        let values = [
            format!("{:.1}", settings.tessellation),
            format!("{:.2}", settings.radius),
            format!("{:.2}", settings.rotation),
            format!("{:.2} / {:.2}", settings.shear.x, settings.shear.y),
            on_off(settings.wireframe).to_owned(),
            on_off(settings.texture).to_owned(),
        ];

        Self {
            labels: column(&labels),
            values: column(&values),
        }
    }

    /// `(label, value)` pairs line by line.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.lines().zip(self.values.lines())
    }
}

fn axis_label(keys: &AxisKeys, what: &str) -> String {
    format!("{} and {} for {what}:", keys.decrease, keys.increase)
}

fn shear_label(bindings: &KeyBindings) -> String {
    let keys = [
        bindings.shear_y.decrease,
        bindings.shear_y.increase,
        bindings.shear_z.decrease,
        bindings.shear_z.increase,
    ];
    let is_arrow = |k: &Key| {
        matches!(k, Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight)
    };

    if keys.iter().all(is_arrow) {
        "Arrow for Shearing:".to_owned()
    } else {
        format!(
            "{}/{} and {}/{} for Shearing:",
            keys[0], keys[1], keys[2], keys[3]
        )
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "On" } else { "Off" }
}

fn column(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
