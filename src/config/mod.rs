//! Configuration file support for inkstamp.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkstamp/config.toml`. Settings cover the raster surface,
//! the grid overlay, line-mode ink and stamp-mode smoothing.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{GridConfig, LineConfig, StampConfig, SurfaceConfig};

use crate::brush::PreviewFilter;
use crate::draw::{Color, GridStyle, LineStyle};
use crate::engine::BrushSettings;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_SURFACE_SIDE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [grid]
/// enabled = true
/// size = 32.0
///
/// [line]
/// width = 3.0
/// color = [20, 20, 120]
///
/// [stamp]
/// buffer_size = 20
/// circles_per_unit = 0.1
/// scale_to_radius = false
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Raster size and background
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Grid overlay settings
    #[serde(default)]
    pub grid: GridConfig,

    /// Line-mode ink settings
    #[serde(default)]
    pub line: LineConfig,

    /// Stamp-mode smoothing and sizing
    #[serde(default)]
    pub stamp: StampConfig,
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(value) {
        let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
        warn!(
            "Invalid {} {:.3}, clamping to {}-{} range",
            name, value, min, max
        );
        *value = clamped;
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `surface.width` / `surface.height`: 1 - 16384
    /// - `grid.size`: 2.0 - 512.0
    /// - `grid.line_width`: 0.1 - 16.0
    /// - `line.width`: 0.5 - 64.0
    /// - `stamp.buffer_size`: 1 - 256
    /// - `stamp.circles_per_unit`: 0.001 - 10.0
    /// - `stamp.footprint`: 1.0 - 2048.0
    /// - `stamp.preview_opacity`: 0.0 - 1.0
    /// - `grid.color` components: 0.0 - 1.0
    pub fn validate_and_clamp(&mut self) {
        for (name, side) in [
            ("surface width", &mut self.surface.width),
            ("surface height", &mut self.surface.height),
        ] {
            if !(1..=MAX_SURFACE_SIDE).contains(side) {
                warn!(
                    "Invalid {} {}, clamping to 1-{} range",
                    name, side, MAX_SURFACE_SIDE
                );
                *side = (*side).clamp(1, MAX_SURFACE_SIDE);
            }
        }

        clamp_f64("grid size", &mut self.grid.size, 2.0, 512.0);
        clamp_f64("grid line_width", &mut self.grid.line_width, 0.1, 16.0);
        clamp_f64("line width", &mut self.line.width, 0.5, 64.0);

        if !(1..=256).contains(&self.stamp.buffer_size) {
            warn!(
                "Invalid stamp buffer_size {}, clamping to 1-256 range",
                self.stamp.buffer_size
            );
            self.stamp.buffer_size = self.stamp.buffer_size.clamp(1, 256);
        }

        clamp_f64(
            "stamp circles_per_unit",
            &mut self.stamp.circles_per_unit,
            0.001,
            10.0,
        );
        clamp_f64("stamp footprint", &mut self.stamp.footprint, 1.0, 2048.0);
        clamp_f64(
            "stamp preview_opacity",
            &mut self.stamp.preview_opacity,
            0.0,
            1.0,
        );

        for (i, component) in self.grid.color.iter_mut().enumerate() {
            clamp_f64(&format!("grid color[{}]", i), component, 0.0, 1.0);
        }
    }

    /// Grid overlay style described by the `[grid]` section.
    pub fn grid_style(&self) -> GridStyle {
        GridStyle {
            size: self.grid.size,
            color: Color::from_array(self.grid.color),
            line_width: self.grid.line_width,
        }
    }

    /// Brush tuning described by the `[line]` and `[stamp]` sections.
    pub fn brush_settings(&self) -> BrushSettings {
        BrushSettings {
            line: LineStyle {
                color: self.line.color.to_color(),
                width: self.line.width,
            },
            buffer_size: self.stamp.buffer_size,
            circles_per_unit: self.stamp.circles_per_unit,
            stamp_footprint: self.stamp.footprint,
            scale_to_radius: self.stamp.scale_to_radius,
            preview: PreviewFilter {
                invert: self.stamp.preview_invert,
                opacity: self.stamp.preview_opacity,
            },
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkstamp/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkstamp");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the config to the default path.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::get_config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Serializes the config to TOML and writes it to `path`, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the default path.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or it cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
