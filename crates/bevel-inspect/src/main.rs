//! Bevel inspector.
//!
//! Prints the corner positions of a sheared cube together with their evenly
//! split normals and bisection residuals.
//!
//! ```bash
//! bevel-inspect --shear-y 0.2
//! bevel-inspect --shear-y 0.9 --shear-z -0.4 --radius 0.15 --json
//! ```

mod report;

use anyhow::{Context, Result};
use bevel_engine::controls::DemoSettings;
use bevel_engine::cube::{CubeShape, DEFAULT_HALF_EXTENT};
use bevel_engine::logging::{init_logging, LoggingConfig};
use clap::Parser;
use glam::Vec2;

use report::Report;

/// Inspect evenly split corner normals of a sheared cube
#[derive(Parser, Debug)]
#[command(name = "bevel-inspect")]
#[command(version)]
struct Cli {
    /// Half-extent of the cube
    #[arg(long, default_value_t = DEFAULT_HALF_EXTENT)]
    half_extent: f32,

    /// Shear along Y (right half moves +Y, left half -Y)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    shear_y: f32,

    /// Shear along Z (right half moves +Z, left half -Z)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    shear_z: f32,

    /// Clamp the shear the way the demo does for this rounding radius
    #[arg(long)]
    radius: Option<f32>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log filter (env_logger syntax); defaults to RUST_LOG, then info
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn shape(&self) -> Result<CubeShape> {
        anyhow::ensure!(
            self.half_extent.is_finite() && self.half_extent > 0.0,
            "half-extent must be a positive finite number, got {}",
            self.half_extent
        );
        anyhow::ensure!(
            self.shear_y.is_finite() && self.shear_z.is_finite(),
            "shear must be finite, got ({}, {})",
            self.shear_y,
            self.shear_z
        );

        let mut shear = Vec2::new(self.shear_y, self.shear_z);

        if let Some(radius) = self.radius {
            anyhow::ensure!(radius.is_finite(), "radius must be finite, got {radius}");
            let mut settings = DemoSettings { radius, shear, ..DemoSettings::default() };
            settings.clamp();
            if settings.shear != shear {
                log::warn!(
                    "shear ({}, {}) clamped to ({}, {}) for radius {}",
                    shear.x, shear.y, settings.shear.x, settings.shear.y, settings.radius
                );
            }
            shear = settings.shear;
        }

        Ok(CubeShape::new(self.half_extent, shear.x, shear.y))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    let shape = cli.shape().context("invalid cube parameters")?;
    let report = Report::new(shape);

    if report.degenerate_count() > 0 {
        log::warn!("{} degenerate corner(s); fallback normals in use", report.degenerate_count());
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", report.table());
    }

    Ok(())
}
