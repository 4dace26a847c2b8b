// ================================
// src/config.rs - simulation settings loaded from TOML
// ================================
use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::{env, fs, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "./sim_config.toml";

/// Driver settings. Everything the reference kept as module-level constants
/// lives here and is handed to the simulation explicitly.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    // Arena
    pub arena_width: i32,
    pub arena_height: i32,

    // Vehicle start pose
    pub start_x: f64,
    pub start_y: f64,
    pub start_heading_deg: f64,

    // Sensing
    pub ray_offset_deg: f64,

    // Control gains
    pub turn_gain: f64,
    pub speed_gain: f64,

    // Loop
    pub tick_rate_hz: u32,
    pub max_ticks: Option<u64>,
    pub log_every_ticks: u64,

    // Debug options
    pub debug_mode: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: 800,
            arena_height: 600,
            start_x: 400.0,
            start_y: 300.0,
            start_heading_deg: 0.0,
            ray_offset_deg: 45.0,
            turn_gain: 2.0,
            speed_gain: 2.0,
            tick_rate_hz: 144,
            max_ticks: None,
            log_every_ticks: 144,
            debug_mode: false,
        }
    }
}

impl SimConfig {
    /// Loads the config named by `CONFIG_PATH`, or `./sim_config.toml`.
    ///
    /// Without `CONFIG_PATH` a missing default file is not an error; the
    /// built-in defaults are used instead.
    pub fn load() -> Result<Self> {
        Self::load_with(env::var("CONFIG_PATH").ok(), Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_with(config_path: Option<String>, default_path: &Path) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from(path),
            None if default_path.exists() => Self::load_from(default_path),
            None => {
                warn!(
                    "No CONFIG_PATH set and {} not found, using defaults",
                    default_path.display()
                );
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&config_str)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.arena_width < 3 || self.arena_height < 3 {
            bail!(
                "arena must be at least 3x3, got {}x{}",
                self.arena_width,
                self.arena_height
            );
        }
        if self.tick_rate_hz == 0 {
            bail!("tick_rate_hz must be positive");
        }
        if self.log_every_ticks == 0 {
            bail!("log_every_ticks must be positive");
        }

        let finite = [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("start_heading_deg", self.start_heading_deg),
            ("ray_offset_deg", self.ray_offset_deg),
            ("turn_gain", self.turn_gain),
            ("speed_gain", self.speed_gain),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            bail!("{} must be a finite number", name);
        }

        // Wall cells occupy column/row 0 and width-1/height-1.
        let inside_x = self.start_x >= 1.0 && self.start_x < f64::from(self.arena_width - 1);
        let inside_y = self.start_y >= 1.0 && self.start_y < f64::from(self.arena_height - 1);
        if !inside_x || !inside_y {
            bail!(
                "start position ({}, {}) is outside the {}x{} arena interior",
                self.start_x,
                self.start_y,
                self.arena_width,
                self.arena_height
            );
        }

        Ok(())
    }

    pub fn tick_period_secs(&self) -> f64 {
        1.0 / f64::from(self.tick_rate_hz)
    }
}
