//! Stroke styles for ink lines and the grid overlay.

use super::color::{BLACK, Color, GRID_GREY};

/// Smallest grid spacing the overlay will draw; tighter spacings are clamped.
pub const MIN_GRID_SIZE: f64 = 2.0;

/// Style used for line-mode segments and history replay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Ink color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 4.0,
        }
    }
}

impl LineStyle {
    /// Applies color, width and round caps/joins to the context.
    pub(crate) fn apply(&self, ctx: &cairo::Context) {
        self.color.apply(ctx);
        ctx.set_line_width(self.width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
    }
}

/// Style of the grid overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Spacing between grid lines in pixels
    pub size: f64,
    /// Grid line color, kept distinct from ink
    pub color: Color,
    /// Grid line width in pixels
    pub line_width: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            size: 20.0,
            color: GRID_GREY,
            line_width: 1.0,
        }
    }
}

impl GridStyle {
    /// Returns the spacing actually used when drawing.
    pub fn spacing(&self) -> f64 {
        if self.size.is_finite() {
            self.size.max(MIN_GRID_SIZE)
        } else {
            MIN_GRID_SIZE
        }
    }

    pub(crate) fn apply(&self, ctx: &cairo::Context) {
        self.color.apply(ctx);
        ctx.set_line_width(self.line_width);
        ctx.set_line_cap(cairo::LineCap::Butt);
    }
}
