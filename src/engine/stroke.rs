use super::{DrawingEngine, DrawingState, RenderOutcome};
use crate::brush::BrushMode;
use crate::util::Point;
use log::{debug, trace};
use std::time::Instant;

impl DrawingEngine {
    /// Begins a stroke at `point`.
    ///
    /// Records the first sample (elapsed 0), makes `point` the start of the
    /// next segment and resets the smoothing buffer around it. If a stroke is
    /// already open it is force-closed first and stays in history as is.
    pub fn start_drawing(&mut self, point: Point) {
        if self.history.open(point) {
            debug!("Stroke restarted while open; previous stroke force-closed");
        }
        self.state = DrawingState::Drawing {
            started: Instant::now(),
        };
        self.brush.last_point = point;
        self.smoothing.reset(point);
        debug!(
            "Stroke {} started at ({:.1}, {:.1}) in {} mode",
            self.history.len(),
            point.x,
            point.y,
            self.brush.mode
        );
    }

    /// Extends the open stroke to `point`, rendering with the active brush.
    ///
    /// Ignored while idle so stray pointer-move events are harmless.
    pub fn draw(&mut self, point: Point) -> RenderOutcome {
        let DrawingState::Drawing { started } = self.state else {
            return RenderOutcome::Skipped;
        };

        let from = self.brush.last_point;
        let outcome = match self.brush.mode {
            BrushMode::Line => self.render_line(from, point),
            BrushMode::Stamp => self.render_stamps(from, point),
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if self.history.current().is_none() {
            // Cleared mid-stroke: continue from where the pointer was.
            self.history.open(from);
        }
        if let Some(stroke) = self.history.current_mut() {
            stroke.push(point, elapsed_ms);
        }
        self.brush.last_point = point;

        trace!(
            "draw ({:.1}, {:.1}) -> ({:.1}, {:.1}) at {}ms: {:?}",
            from.x, from.y, point.x, point.y, elapsed_ms, outcome
        );
        outcome
    }

    /// Ends the open stroke. Calling it while idle does nothing.
    pub fn stop_drawing(&mut self) {
        if !self.is_drawing() {
            return;
        }
        self.history.close_current();
        self.state = DrawingState::Idle;
        debug!(
            "Stroke finished with {} samples",
            self.history.last().map_or(0, |stroke| stroke.len())
        );
    }
}
