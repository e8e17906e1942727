//! Geometry helpers and color-name mapping.
//!
//! This module provides:
//! - [`Point`], the surface-local coordinate type fed in by pointer sources
//! - Linear interpolation used by the stamp planner
//! - Color-name lookup for the configuration file

use crate::draw::{Color, color::*};

// ============================================================================
// Geometry
// ============================================================================

/// A position in surface-local pixel space.
///
/// The engine performs no coordinate transforms: callers map device
/// coordinates onto the surface before handing points over.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point at parameter `t` along the segment from `self` to `other`.
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Linear interpolation between two scalars.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black", "grey"/"gray", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "grey" | "gray" => Some(GRID_GREY),
        "transparent" | "none" => Some(TRANSPARENT),
        _ => None,
    }
}
