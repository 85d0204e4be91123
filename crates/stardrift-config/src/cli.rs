//! Command-line argument parsing for Stardrift.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Stardrift command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "stardrift", about = "A rotating procedural starfield tunnel")]
pub struct CliArgs {
    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Target frame rate.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Orthographic zoom factor.
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Maximum simultaneous live objects.
    #[arg(long)]
    pub population_cap: Option<usize>,

    /// Spawn RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render this many frames headless and exit instead of opening a window.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Directory for headless PNG output.
    #[arg(long, default_value = "frames")]
    pub out_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(fps) = args.fps {
            self.window.target_fps = fps;
        }
        if let Some(zoom) = args.zoom {
            self.render.zoom = zoom;
        }
        if let Some(cap) = args.population_cap {
            self.scene.population_cap = cap;
        }
        if let Some(seed) = args.seed {
            self.scene.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
