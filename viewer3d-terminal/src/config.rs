/// Command-line configuration for the terminal viewer
use std::path::PathBuf;

use clap::Parser;
use viewer3d_core::{Movement, MovementKind};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "viewer3d-terminal",
    version,
    about = "Move, rotate and scale a 3D model in the terminal"
)]
pub struct ViewerConfig {
    /// Wavefront OBJ model to display; a cube is shown when omitted
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Movement selected at startup, e.g. move-x, rotate-y or scale
    #[arg(long, default_value_t = Movement::RotateY, value_name = "MOVEMENT")]
    pub start: Movement,

    /// Translation step per key press, in world units
    #[arg(long, default_value_t = 0.1, value_parser = finite)]
    pub move_step: f64,

    /// Rotation step per key press, in degrees
    #[arg(long, default_value_t = 5.0, value_parser = finite)]
    pub rotate_step: f64,

    /// Scale factor per key press; the opposite key applies its inverse
    #[arg(long, default_value_t = 1.1, value_parser = positive_factor)]
    pub scale_step: f64,

    /// Target frame rate
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Write logs (filtered by RUST_LOG) to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl ViewerConfig {
    /// Magnitude of one key press for a movement family. `forward` selects
    /// the direction: a positive step or the scale factor itself, versus the
    /// negative step or the inverse factor.
    pub fn magnitude(&self, kind: MovementKind, forward: bool) -> f64 {
        match (kind, forward) {
            (MovementKind::Move, true) => self.move_step,
            (MovementKind::Move, false) => -self.move_step,
            (MovementKind::Rotate, true) => self.rotate_step,
            (MovementKind::Rotate, false) => -self.rotate_step,
            (MovementKind::Scale, true) => self.scale_step,
            (MovementKind::Scale, false) => self.scale_step.recip(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model: None,
            start: Movement::RotateY,
            move_step: 0.1,
            rotate_step: 5.0,
            scale_step: 1.1,
            fps: 30,
            log_file: None,
        }
    }
}

fn finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{}` is not a finite number", s))
    }
}

fn positive_factor(s: &str) -> Result<f64, String> {
    let value = finite(s)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(format!("scale step must be greater than zero, got {}", value))
    }
}
