//! Raster target plus the non-destructive grid overlay.

use super::color::{Color, TRANSPARENT};
use super::render;
use super::style::GridStyle;
use crate::error::EngineError;
use log::debug;
use std::io::Write;

/// Owns the Cairo image surface strokes are painted onto.
///
/// The grid is never merged into stroke pixels for good: every grid change
/// wipes the surface and redraws, so toggling the grid is always reversible
/// by a clear plus re-render.
pub struct DrawingSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    show_grid: bool,
    grid: GridStyle,
    background: Color,
}

impl std::fmt::Debug for DrawingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("show_grid", &self.show_grid)
            .field("grid", &self.grid)
            .field("background", &self.background)
            .finish()
    }
}

fn check_dimensions(width: i32, height: i32) -> Result<(), EngineError> {
    if width <= 0 || height <= 0 {
        return Err(EngineError::invalid_surface(
            width,
            height,
            "dimensions must be positive",
        ));
    }
    Ok(())
}

fn create_target(width: i32, height: i32) -> Result<cairo::ImageSurface, EngineError> {
    check_dimensions(width, height)?;
    cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .map_err(|_| EngineError::invalid_surface(width, height, "Cairo could not allocate it"))
}

impl DrawingSurface {
    /// Allocates a new transparent ARGB surface.
    ///
    /// # Errors
    /// [`EngineError::InvalidSurface`] when either dimension is not positive
    /// or Cairo refuses the allocation.
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        Self::from_image_surface(create_target(width, height)?)
    }

    /// Wraps an existing image surface supplied by the host.
    ///
    /// # Errors
    /// [`EngineError::InvalidSurface`] if the surface has no area or a pixel
    /// format strokes cannot be painted into (only `ARgb32` and `Rgb24` are
    /// accepted).
    pub fn from_image_surface(surface: cairo::ImageSurface) -> Result<Self, EngineError> {
        let (width, height) = (surface.width(), surface.height());
        check_dimensions(width, height)?;
        if !matches!(
            surface.format(),
            cairo::Format::ARgb32 | cairo::Format::Rgb24
        ) {
            return Err(EngineError::invalid_surface(
                width,
                height,
                "pixel format must be ARgb32 or Rgb24",
            ));
        }
        let ctx = cairo::Context::new(&surface)?;
        Ok(Self {
            surface,
            ctx,
            show_grid: false,
            grid: GridStyle::default(),
            background: TRANSPARENT,
        })
    }

    /// Sets the grid style and initial visibility, repainting the surface.
    pub fn with_grid(mut self, grid: GridStyle, show: bool) -> Self {
        self.grid = grid;
        self.show_grid = show;
        self.clear();
        self
    }

    /// Sets the color painted on every clear, repainting the surface.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self.clear();
        self
    }

    /// Replaces the raster with a fresh one of the given size.
    ///
    /// Pixel contents are not preserved; the caller re-renders what it needs.
    /// The background and (if enabled) the grid are painted onto the new raster.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), EngineError> {
        let surface = create_target(width, height)?;
        let ctx = cairo::Context::new(&surface)?;
        self.surface = surface;
        self.ctx = ctx;
        debug!("Surface resized to {}x{}", width, height);
        self.clear();
        Ok(())
    }

    /// Wipes all pixels, then repaints background and grid.
    ///
    /// With the grid enabled the surface never shows a blank, grid-less state.
    pub fn clear(&mut self) {
        render::clear_surface(&self.ctx);
        render::fill_background(&self.ctx, self.background);
        if self.show_grid {
            self.draw_grid();
        }
    }

    /// Flips grid visibility and repaints the whole surface.
    pub fn toggle_grid(&mut self) {
        self.set_show_grid(!self.show_grid);
    }

    /// Sets grid visibility, repainting the whole surface.
    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
        debug!("Grid {}", if show { "shown" } else { "hidden" });
        self.clear();
    }

    fn draw_grid(&self) {
        render::render_grid(&self.ctx, self.width(), self.height(), &self.grid);
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn grid(&self) -> &GridStyle {
        &self.grid
    }

    pub fn grid_size(&self) -> f64 {
        self.grid.spacing()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Paint context bound to the raster.
    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    pub fn image_surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Copies the raw pixel bytes (Cairo `ARgb32`, row stride included).
    pub fn pixels(&self) -> Vec<u8> {
        let mut pixels = Vec::new();
        let _ = self.surface.with_data(|data| pixels.extend_from_slice(data));
        pixels
    }

    /// Encodes the current raster as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), EngineError> {
        self.surface.write_to_png(writer)?;
        Ok(())
    }
}
