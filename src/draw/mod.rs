//! Rendering primitives and stroke data (Cairo-based).
//!
//! This module defines the core drawing types used by the engine:
//! - [`Color`]: RGBA color representation with a small named palette
//! - [`DrawingSurface`]: the raster target and its grid overlay
//! - [`Stroke`] / [`StrokeHistory`]: recorded pointer samples
//! - [`SmoothingBuffer`]: rolling distance window used to size stamps
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod smoothing;
pub mod stroke;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{render_grid, render_polyline, render_segment, render_stamp};
pub use smoothing::{Dab, DabPlan, RadiusSpan, SmoothingBuffer, stamp_count};
pub use stroke::{Sample, Stroke, StrokeHistory};
pub use style::{GridStyle, LineStyle};
pub use surface::DrawingSurface;
