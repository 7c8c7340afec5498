/// Viewer3D Terminal - interactive model transformer
///
/// Loads an OBJ model (or a cube) and moves, rotates and scales its
/// vertices from the keyboard.
/// Controls:
///   - M/R/S: Move, rotate or scale mode
///   - X/Y/Z: Axis for move and rotate
///   - +/- or arrow keys: Apply one step
///   - P: Toggle perspective/orthographic
///   - F: Reframe the model
///   - Q/ESC: Quit

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use viewer3d_core::{obj, Model};
use viewer3d_terminal::{TerminalApp, ViewerConfig};

fn main() -> Result<()> {
    let config = ViewerConfig::parse();
    init_logging(&config)?;

    let model = match &config.model {
        Some(path) => obj::load_obj(path)
            .with_context(|| format!("Failed to load model {}", path.display()))?,
        None => {
            info!("no model given, showing a cube");
            Model::cube(2.0)
        }
    };

    let mut app = TerminalApp::new(model, config).context("Failed to start terminal viewer")?;
    app.run().context("Terminal viewer exited with an error")?;

    println!("Thank you for using Viewer3D!");
    Ok(())
}

/// Logs go to `--log-file` only; stderr would draw over the viewer
fn init_logging(config: &ViewerConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
