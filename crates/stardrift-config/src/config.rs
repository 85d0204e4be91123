//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the settings file inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level Stardrift configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Rendering settings.
    pub render: RenderConfig,
    /// Scene population and motion settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Target frame rate for the driver loop.
    pub target_fps: u32,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Orthographic zoom: one world unit maps to `zoom * height` pixels.
    pub zoom: f64,
    /// Radius in pixels of the soft glow around filled bodies.
    pub glow_radius: f64,
    /// Width of the opacity fade ramp at each cylinder end, world units.
    pub fade_margin: f64,
    /// Background color, 0xRRGGBB.
    pub background: u32,
}

/// Scene population and motion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Scene rotation increment per frame, degrees.
    pub rotation_step_deg: f64,
    /// Initial scene rotation, degrees.
    pub initial_rotation_deg: f64,
    /// Z distance each object drifts toward the camera per frame.
    pub z_step: f64,
    /// Half the depth of the populated cylinder, world units.
    pub half_depth: f64,
    /// Maximum simultaneous live objects.
    pub population_cap: usize,
    /// Spawn draw threshold above which a planet spawns.
    pub planet_threshold: f64,
    /// Spawn draw threshold above which a moon spawns.
    pub moon_threshold: f64,
    /// Spawn draw threshold above which a star spawns.
    pub star_threshold: f64,
    /// Planet body radius, screen units.
    pub planet_radius: f64,
    /// Moon body radius, screen units.
    pub moon_radius: f64,
    /// Star body radius, screen units.
    pub star_radius: f64,
    /// Maximum spawn distance from the cylinder axis, world units.
    pub boundary_radius: u32,
    /// Radii of the concentric rings around each planet.
    pub ring_radii: Vec<f64>,
    /// Inclusive range of the random ring tilt, degrees.
    pub ring_tilt_deg: (u32, u32),
    /// Radius of the static track, world units.
    pub track_radius: f64,
    /// Angular step between track rim samples, degrees.
    pub track_step_deg: u32,
    /// Seed for the spawn RNG.
    pub seed: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log the live population count every this many frames (0 = never).
    pub population_log_interval: u32,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
            title: "Stardrift".to_string(),
            target_fps: 60,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            zoom: 0.1,
            glow_radius: 3.0,
            fade_margin: 10.0,
            background: 0x000000,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rotation_step_deg: 0.1,
            initial_rotation_deg: 45.0,
            z_step: 0.2,
            half_depth: 20.0,
            population_cap: 200,
            planet_threshold: 0.995,
            moon_threshold: 0.99,
            star_threshold: 0.8,
            planet_radius: 10.0,
            moon_radius: 5.0,
            star_radius: 0.5,
            boundary_radius: 7,
            ring_radii: vec![2.25, 2.5, 2.75, 3.0],
            ring_tilt_deg: (10, 55),
            track_radius: 10.0,
            track_step_deg: 5,
            seed: 0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            population_log_interval: 0,
            log_level: "info".to_string(),
        }
    }
}

// --- Persistence ---

impl Config {
    fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load settings from `config.ron` in the given directory. A missing
    /// file is not an error: the defaults are written there and returned,
    /// so a first run leaves an editable file behind.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(config_dir);

        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("wrote default settings to {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&path).map_err(ConfigError::Read)?;
        let config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
        log::info!("loaded settings from {}", path.display());
        Ok(config)
    }

    /// Write the settings to `config.ron`, creating the directory if
    /// needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(Self::path_in(config_dir), serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Re-read `config.ron` and return the new settings if they differ
    /// from `self`, `None` if the file matches what is already loaded.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let contents =
            std::fs::read_to_string(Self::path_in(config_dir)).map_err(ConfigError::Read)?;
        let fresh: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if fresh == *self {
            Ok(None)
        } else {
            log::info!("settings changed on disk, reloading");
            Ok(Some(fresh))
        }
    }
}
