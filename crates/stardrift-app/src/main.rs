//! The binary entry point for Stardrift.

use std::path::PathBuf;

use clap::Parser;

use stardrift_config::{CliArgs, Config};

mod driver;
mod logging;
mod pacing;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config"));

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    logging::init_logging(&config);

    let result = match args.frames {
        Some(frames) => driver::run_headless(&config, frames, &args.out_dir),
        None => driver::run_windowed(&config),
    };

    if let Err(e) = result {
        tracing::error!("session failed: {e}");
        std::process::exit(1);
    }
}
