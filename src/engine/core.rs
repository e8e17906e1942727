//! Drawing engine state and its non-stroke operations.

use crate::brush::{BrushMode, BrushState, NoStamps, PreviewFilter, StampHandle, StampSource};
use crate::config::Config;
use crate::draw::{
    DrawingSurface, LineStyle, RadiusSpan, SmoothingBuffer, StrokeHistory,
    smoothing::{DEFAULT_CAPACITY, DEFAULT_CIRCLES_PER_UNIT},
};
use crate::error::EngineError;
use crate::util::Point;
use log::debug;
use std::time::Instant;

/// Stroke lifecycle state machine.
///
/// `Idle` → `Drawing` on `start_drawing`, back to `Idle` on `stop_drawing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// No pointer held down; `draw` calls are ignored
    Idle,
    /// A stroke is open and receiving samples
    Drawing {
        /// When the open stroke started (sample timestamps are relative to it)
        started: Instant,
    },
}

/// What a single `draw` call put on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderOutcome {
    /// The engine was idle; nothing was rendered or recorded
    Skipped,
    /// Line mode drew one straight segment
    Segment { from: Point, to: Point },
    /// Stamp mode planned `placed` stamps and painted `painted` of them
    ///
    /// `painted` is 0 when no stamp image is set or it cannot be resolved.
    Stamps {
        placed: usize,
        painted: usize,
        radius: RadiusSpan,
    },
}

/// Brush tuning shared by every stroke of an engine.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSettings {
    /// Style of line-mode segments and history replay
    pub line: LineStyle,
    /// Smoothing ring capacity (N)
    pub buffer_size: usize,
    /// Stamp density along a segment
    pub circles_per_unit: f64,
    /// Square footprint stamps are drawn at when not scaled by radius
    pub stamp_footprint: f64,
    /// Size stamps by the interpolated radius instead of the fixed footprint
    pub scale_to_radius: bool,
    /// Live-preview filter used while stamp mode is active
    pub preview: PreviewFilter,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            line: LineStyle::default(),
            buffer_size: DEFAULT_CAPACITY,
            circles_per_unit: DEFAULT_CIRCLES_PER_UNIT,
            stamp_footprint: 200.0,
            scale_to_radius: false,
            preview: PreviewFilter::default(),
        }
    }
}

impl BrushSettings {
    /// Side length of the square a stamp with the given radius is drawn into.
    pub fn footprint_for(&self, radius: f64) -> f64 {
        if self.scale_to_radius {
            (radius * 2.0).max(1.0)
        } else {
            self.stamp_footprint
        }
    }
}

/// Freehand stroke engine bound to one drawing surface.
///
/// Owns its surface, stroke history and smoothing buffer exclusively; two
/// surfaces need two engines.
pub struct DrawingEngine {
    pub(super) surface: DrawingSurface,
    pub(super) history: StrokeHistory,
    pub(super) smoothing: SmoothingBuffer,
    pub(super) brush: BrushState,
    pub(super) settings: BrushSettings,
    pub(super) stamps: Box<dyn StampSource>,
    pub(super) state: DrawingState,
}

impl std::fmt::Debug for DrawingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingEngine")
            .field("surface", &self.surface)
            .field("strokes", &self.history.len())
            .field("brush", &self.brush)
            .field("settings", &self.settings)
            .field("state", &self.state)
            .finish()
    }
}

impl DrawingEngine {
    /// Creates an idle engine painting onto `surface`.
    pub fn new(
        surface: DrawingSurface,
        settings: BrushSettings,
        stamps: impl StampSource + 'static,
    ) -> Self {
        Self {
            surface,
            history: StrokeHistory::new(),
            smoothing: SmoothingBuffer::new(settings.buffer_size),
            brush: BrushState::default(),
            settings,
            stamps: Box::new(stamps),
            state: DrawingState::Idle,
        }
    }

    /// Creates an engine with default settings, a fresh `width`×`height`
    /// surface and no stamp images.
    pub fn with_size(width: i32, height: i32) -> Result<Self, EngineError> {
        Ok(Self::new(
            DrawingSurface::new(width, height)?,
            BrushSettings::default(),
            NoStamps,
        ))
    }

    /// Builds the surface and brush settings described by `config`.
    pub fn from_config(
        config: &Config,
        stamps: impl StampSource + 'static,
    ) -> Result<Self, EngineError> {
        let surface = DrawingSurface::new(config.surface.width, config.surface.height)?
            .with_background(config.surface.background.to_color())
            .with_grid(config.grid_style(), config.grid.enabled);
        Ok(Self::new(surface, config.brush_settings(), stamps))
    }

    /// Replaces the stamp image source.
    pub fn set_stamp_source(&mut self, stamps: impl StampSource + 'static) {
        self.stamps = Box::new(stamps);
    }

    // ------------------------------------------------------------------
    // Surface operations
    // ------------------------------------------------------------------

    /// Empties the stroke history and clears the surface.
    ///
    /// The drawing state is left as is and the history is empty afterwards.
    /// If a stroke was open, the next `draw` starts a fresh one at the last
    /// rendered point.
    pub fn clear(&mut self) {
        self.history.clear();
        self.surface.clear();
        if let DrawingState::Drawing { started } = &mut self.state {
            *started = Instant::now();
        }
        debug!("Canvas cleared");
    }

    /// Flips grid visibility; the whole surface is repainted without strokes.
    pub fn toggle_grid(&mut self) {
        self.surface.toggle_grid();
    }

    pub fn show_grid(&self) -> bool {
        self.surface.show_grid()
    }

    /// Resizes the raster. Contents are discarded; call
    /// [`DrawingEngine::redraw_history`] to repaint recorded strokes.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), EngineError> {
        self.surface.resize(width, height)
    }

    // ------------------------------------------------------------------
    // Brush mode
    // ------------------------------------------------------------------

    /// Selects the render strategy for subsequent `draw` calls.
    ///
    /// Also switches the cosmetic preview filter (see
    /// [`DrawingEngine::preview_filter`]).
    pub fn set_brush_mode(&mut self, mode: BrushMode) {
        if self.brush.mode != mode {
            debug!("Brush mode: {} -> {}", self.brush.mode, mode);
        }
        self.brush.mode = mode;
    }

    /// Convenience for hosts exposing stamp mode as a checkbox.
    pub fn set_stamp_mode(&mut self, enabled: bool) {
        self.set_brush_mode(BrushMode::from_stamp_flag(enabled));
    }

    pub fn brush_mode(&self) -> BrushMode {
        self.brush.mode
    }

    /// Sets (or unsets) the image stamp mode paints with.
    ///
    /// The handle is only resolved at render time.
    pub fn set_brush_image(&mut self, handle: Option<StampHandle>) {
        debug!(
            "Stamp image: {}",
            handle.as_ref().map_or("<none>", StampHandle::as_str)
        );
        self.brush.active_stamp = handle;
    }

    pub fn brush_image(&self) -> Option<&StampHandle> {
        self.brush.active_stamp.as_ref()
    }

    /// Filter the host should present the live surface with, if any.
    ///
    /// Only stamp mode has one; it never changes stored pixels.
    pub fn preview_filter(&self) -> Option<PreviewFilter> {
        self.brush.mode.is_stamp().then_some(self.settings.preview)
    }

    // ------------------------------------------------------------------
    // Read-only accessors
    // ------------------------------------------------------------------

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn smoothing(&self) -> &SmoothingBuffer {
        &self.smoothing
    }

    pub fn last_point(&self) -> Point {
        self.brush.last_point
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }
}
