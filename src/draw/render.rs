//! Cairo-based rendering functions for ink, stamps and the grid overlay.

use super::color::Color;
use super::style::{GridStyle, LineStyle};
use crate::brush::PreviewFilter;
use crate::util::Point;

/// Wipes every pixel of the target back to fully transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Fills the whole target with a solid background color.
///
/// Transparent colors are skipped so a cleared surface stays empty.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    if color.is_transparent() {
        return;
    }
    let _ = ctx.save();
    color.apply(ctx);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Draws one straight segment with round caps and joins.
pub fn render_segment(ctx: &cairo::Context, from: Point, to: Point, style: &LineStyle) {
    let _ = ctx.save();
    style.apply(ctx);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Draws straight connecting segments through `points`.
///
/// Fewer than two points draws nothing: a single tap leaves no ink in the
/// replay path.
pub fn render_polyline(ctx: &cairo::Context, points: &[Point], style: &LineStyle) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    let _ = ctx.save();
    style.apply(ctx);
    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Draws the grid overlay.
///
/// Vertical lines sit at x = 0, size, 2·size, … below `width`, horizontal lines
/// likewise for `height`. The context state is saved and restored around the
/// overlay so the ink style of later strokes is untouched.
///
/// Returns the number of lines drawn.
pub fn render_grid(ctx: &cairo::Context, width: i32, height: i32, style: &GridStyle) -> usize {
    let spacing = style.spacing();
    let (width, height) = (f64::from(width), f64::from(height));
    let mut lines = 0;

    let _ = ctx.save();
    style.apply(ctx);

    let mut x = 0.0;
    while x < width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        x += spacing;
        lines += 1;
    }

    let mut y = 0.0;
    while y < height {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += spacing;
        lines += 1;
    }

    let _ = ctx.stroke();
    let _ = ctx.restore();
    lines
}

/// Paints `image` scaled into a square `footprint` centered on `center`.
///
/// Returns `false` when nothing could be painted (empty image or a
/// degenerate footprint).
pub fn render_stamp(
    ctx: &cairo::Context,
    image: &cairo::ImageSurface,
    center: Point,
    footprint: f64,
) -> bool {
    let (w, h) = (f64::from(image.width()), f64::from(image.height()));
    if w <= 0.0 || h <= 0.0 || !footprint.is_finite() || footprint <= 0.0 {
        return false;
    }

    let half = footprint / 2.0;
    let _ = ctx.save();
    ctx.translate(center.x - half, center.y - half);
    ctx.scale(footprint / w, footprint / h);
    let painted = ctx
        .set_source_surface(image, 0.0, 0.0)
        .and_then(|()| ctx.paint())
        .is_ok();
    let _ = ctx.restore();
    painted
}

/// Composites `source` onto `ctx`, optionally through a preview filter.
///
/// The filter only affects what is presented: `source` itself is read, never
/// written.
pub fn present(
    ctx: &cairo::Context,
    source: &cairo::ImageSurface,
    filter: Option<PreviewFilter>,
) -> Result<(), cairo::Error> {
    let Some(filter) = filter else {
        ctx.save()?;
        ctx.set_source_surface(source, 0.0, 0.0)?;
        ctx.paint()?;
        return ctx.restore();
    };

    ctx.save()?;
    ctx.push_group();
    ctx.set_source_surface(source, 0.0, 0.0)?;
    ctx.paint()?;
    if filter.invert {
        // Difference against white inverts color; masking by the source keeps
        // transparent pixels transparent.
        ctx.set_operator(cairo::Operator::Difference);
        ctx.set_source_rgb(1.0, 1.0, 1.0);
        ctx.mask_surface(source, 0.0, 0.0)?;
    }
    ctx.pop_group_to_source()?;
    ctx.paint_with_alpha(filter.opacity.clamp(0.0, 1.0))?;
    ctx.restore()
}
