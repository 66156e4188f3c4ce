use std::fmt::Write as _;

use bevel_engine::cube::{
    bisection_residual,
    corner_normal,
    try_corner_normal,
    CubeShape,
    CORNER_COUNT,
    CORNER_NAMES,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CornerReport {
    pub index: usize,
    pub name: &'static str,
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub residual: f32,
    /// Normal comes from the degenerate-corner fallback.
    pub degenerate: bool,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub half_extent: f32,
    pub shear: [f32; 2],
    pub corners: Vec<CornerReport>,
}

impl Report {
    pub fn new(shape: CubeShape) -> Self {
        let positions = shape.corners();

        let corners = (0..CORNER_COUNT)
            .map(|index| {
                let degenerate = try_corner_normal(&positions, index).is_err();
                let normal = corner_normal(&positions, index);
                CornerReport {
                    index,
                    name: CORNER_NAMES[index],
                    position: positions[index].to_array(),
                    normal: normal.to_array(),
                    residual: bisection_residual(&positions, index, normal),
                    degenerate,
                }
            })
            .collect();

        Self {
            half_extent: shape.half_extent,
            shear: [shape.shear_y, shape.shear_z],
            corners,
        }
    }

    pub fn degenerate_count(&self) -> usize {
        self.corners.iter().filter(|c| c.degenerate).count()
    }

    pub fn table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "half-extent {:.3}  shear ({:.3}, {:.3})",
            self.half_extent, self.shear[0], self.shear[1]
        );
        let _ = writeln!(
            out,
            "{:<3} {:<19} {:<26} {:<26} {}",
            "idx", "corner", "position", "normal", "residual"
        );

        for c in &self.corners {
            let _ = writeln!(
                out,
                "{:<3} {:<19} {:<26} {:<26} {:.1e}{}",
                c.index,
                c.name,
                vec3(c.position),
                vec3(c.normal),
                c.residual,
                if c.degenerate { "  (fallback)" } else { "" }
            );
        }
        out
    }
}

fn vec3(v: [f32; 3]) -> String {
    format!("({:+.3}, {:+.3}, {:+.3})", v[0], v[1], v[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_report_has_no_degenerate_corners() {
        let report = Report::new(CubeShape::unit());
        assert_eq!(report.corners.len(), CORNER_COUNT);
        assert_eq!(report.degenerate_count(), 0);
        assert!(report.corners.iter().all(|c| c.residual < 1e-4));
    }

    #[test]
    fn table_lists_every_corner() {
        let table = Report::new(CubeShape::new(0.5, 0.2, 0.0)).table();
        assert_eq!(table.lines().count(), 2 + CORNER_COUNT);
        assert!(table.contains("top-rear-left"));
        assert!(table.contains("(-0.500, +0.300, +0.500)"));
    }

    #[test]
    fn json_uses_plain_arrays() {
        let report = Report::new(CubeShape::unit());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["shear"], serde_json::json!([0.0, 0.0]));
        assert_eq!(value["corners"][0]["name"], "top-rear-left");
        assert_eq!(value["corners"][0]["position"], serde_json::json!([-0.5, 0.5, 0.5]));
        assert_eq!(value["corners"][7]["degenerate"], false);
    }
}
