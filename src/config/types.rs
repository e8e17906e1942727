//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raster surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Color painted on every clear ("transparent" leaves the surface empty)
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Grid overlay settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Show the grid when the surface is created
    #[serde(default)]
    pub enabled: bool,

    /// Spacing between grid lines in pixels (valid range: 2 - 512)
    #[serde(default = "default_grid_size")]
    pub size: f64,

    /// Grid line color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_grid_color")]
    pub color: [f64; 4],

    /// Grid line width in pixels
    #[serde(default = "default_grid_line_width")]
    pub line_width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            size: default_grid_size(),
            color: default_grid_color(),
            line_width: default_grid_line_width(),
        }
    }
}

/// Line-mode settings (also used when replaying history).
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LineConfig {
    /// Line width in pixels (valid range: 0.5 - 64.0)
    #[serde(default = "default_line_width")]
    pub width: f64,

    /// Ink color - a named color or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_line_color")]
    pub color: ColorSpec,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            width: default_line_width(),
            color: default_line_color(),
        }
    }
}

/// Stamp-mode settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StampConfig {
    /// Number of recent segment lengths averaged for stamp sizing (valid range: 1 - 256)
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Stamps placed per pixel of segment length (valid range: 0.001 - 10.0)
    #[serde(default = "default_circles_per_unit")]
    pub circles_per_unit: f64,

    /// Square size stamps are drawn at, in pixels (valid range: 1.0 - 2048.0)
    #[serde(default = "default_footprint")]
    pub footprint: f64,

    /// Size stamps by the smoothed radius instead of the fixed footprint
    #[serde(default)]
    pub scale_to_radius: bool,

    /// Opacity of the live preview while stamp mode is active (0.0 - 1.0)
    #[serde(default = "default_preview_opacity")]
    pub preview_opacity: f64,

    /// Invert colors in the live preview while stamp mode is active
    #[serde(default = "default_preview_invert")]
    pub preview_invert: bool,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            circles_per_unit: default_circles_per_unit(),
            footprint: default_footprint(),
            scale_to_radius: false,
            preview_opacity: default_preview_opacity(),
            preview_invert: default_preview_invert(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("transparent".to_string())
}

fn default_grid_size() -> f64 {
    20.0
}

fn default_grid_color() -> [f64; 4] {
    [0.8, 0.8, 0.8, 0.5]
}

fn default_grid_line_width() -> f64 {
    1.0
}

fn default_line_width() -> f64 {
    4.0
}

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_buffer_size() -> usize {
    crate::draw::smoothing::DEFAULT_CAPACITY
}

fn default_circles_per_unit() -> f64 {
    crate::draw::smoothing::DEFAULT_CIRCLES_PER_UNIT
}

fn default_footprint() -> f64 {
    200.0
}

fn default_preview_opacity() -> f64 {
    0.5
}

fn default_preview_invert() -> bool {
    true
}
