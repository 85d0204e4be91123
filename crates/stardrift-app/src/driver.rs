//! Session driver: assembles the world, renderer, and canvas from
//! configuration and runs the windowed or headless loop.

use std::path::Path;
use std::time::Instant;

use minifb::{Key, Window, WindowOptions};

use stardrift_config::{Config, ConfigError};
use stardrift_render::{Camera, Canvas, ExportError, Renderer};
use stardrift_scene::{Color, SpawnParams, Track, World, WorldParams};

use crate::pacing::FramePacer;

/// Top-level application errors, each wrapping its subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    #[error("frame export error: {0}")]
    Export(#[from] ExportError),

    #[error("failed to create output directory: {0}")]
    OutputDir(#[source] std::io::Error),
}

/// A running session: the mutable world plus the immutable render pipeline.
pub struct App {
    world: World,
    renderer: Renderer,
    track: Track,
    canvas: Canvas,
    frame: u64,
    population_log_interval: u32,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let scene = &config.scene;

        let world = World::new(
            WorldParams {
                rotation_step: scene.rotation_step_deg.to_radians(),
                initial_rotation: scene.initial_rotation_deg.to_radians(),
                z_step: scene.z_step,
                half_depth: scene.half_depth,
                population_cap: scene.population_cap,
            },
            SpawnParams {
                planet_threshold: scene.planet_threshold,
                moon_threshold: scene.moon_threshold,
                star_threshold: scene.star_threshold,
                planet_radius: scene.planet_radius,
                moon_radius: scene.moon_radius,
                star_radius: scene.star_radius,
                boundary_radius: scene.boundary_radius,
                half_depth: scene.half_depth,
                ring_radii: scene.ring_radii.clone(),
                ring_tilt_deg: scene.ring_tilt_deg,
            },
            scene.seed,
        );

        let camera = Camera {
            width: f64::from(config.window.width),
            height: f64::from(config.window.height),
            zoom: config.render.zoom,
            ..Camera::default()
        };
        let renderer = Renderer::new(camera, scene.half_depth, config.render.fade_margin);
        let track = Track::new(scene.track_radius, scene.track_step_deg, scene.half_depth);
        let canvas = Canvas::new(
            config.window.width as usize,
            config.window.height as usize,
            Color::from_hex(config.render.background),
            config.render.glow_radius,
        );

        Self {
            world,
            renderer,
            track,
            canvas,
            frame: 0,
            population_log_interval: config.debug.population_log_interval,
        }
    }

    /// One executed frame: rotate the scene, paint it, then drift and
    /// respawn the population for the next frame.
    pub fn step(&mut self) {
        self.world.rotate();
        self.renderer
            .render(&mut self.canvas, &self.world, &self.track);
        self.world.drift();
        self.frame += 1;

        if self.population_log_interval > 0
            && self.frame % u64::from(self.population_log_interval) == 0
        {
            log::info!(
                "frame {}: {} live objects",
                self.frame,
                self.world.population()
            );
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

/// Open a window and run until it closes or Escape is pressed.
pub fn run_windowed(config: &Config) -> Result<(), AppError> {
    let mut app = App::new(config);
    let mut window = Window::new(
        &config.window.title,
        app.canvas().width(),
        app.canvas().height(),
        WindowOptions::default(),
    )?;
    window.set_target_fps(config.window.target_fps as usize);

    log::info!(
        "windowed session: {}x{} at {} fps",
        app.canvas().width(),
        app.canvas().height(),
        config.window.target_fps
    );

    let mut pacer = FramePacer::new(config.window.target_fps);
    let start = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if pacer.should_advance(start.elapsed()) {
            app.step();
        }
        window.update_with_buffer(
            app.canvas().buffer(),
            app.canvas().width(),
            app.canvas().height(),
        )?;
    }

    Ok(())
}

/// Render `frames` frames as fast as possible and write each as a PNG.
pub fn run_headless(config: &Config, frames: u32, out_dir: &Path) -> Result<(), AppError> {
    std::fs::create_dir_all(out_dir).map_err(AppError::OutputDir)?;
    let mut app = App::new(config);

    for index in 0..frames {
        app.step();
        let path = out_dir.join(format!("frame_{index:05}.png"));
        app.canvas().write_png(&path)?;
    }

    log::info!("wrote {frames} frames to {}", out_dir.display());
    Ok(())
}
