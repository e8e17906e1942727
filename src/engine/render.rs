use super::{DrawingEngine, RenderOutcome};
use crate::draw::{DabPlan, render};
use crate::error::EngineError;
use crate::util::Point;
use log::{debug, trace};

impl DrawingEngine {
    /// Line strategy: one straight segment, fixed width, no smoothing.
    pub(super) fn render_line(&mut self, from: Point, to: Point) -> RenderOutcome {
        render::render_segment(self.surface.context(), from, to, &self.settings.line);
        RenderOutcome::Segment { from, to }
    }

    /// Stamp strategy: feed the smoothing ring, then stamp along the segment
    /// with radii interpolated between the ring's old and new means.
    pub(super) fn render_stamps(&mut self, from: Point, to: Point) -> RenderOutcome {
        let radius = self.smoothing.push(from.distance_to(to), to);
        let plan = DabPlan::new(from, to, radius, self.settings.circles_per_unit);
        let placed = plan.len();

        let image = self
            .brush
            .active_stamp
            .as_ref()
            .and_then(|handle| self.stamps.resolve(handle));

        let painted = match image {
            Some(image) => {
                let ctx = self.surface.context();
                let mut painted = 0;
                for dab in plan {
                    let footprint = self.settings.footprint_for(dab.radius);
                    if render::render_stamp(ctx, &image, dab.center, footprint) {
                        painted += 1;
                    }
                }
                painted
            }
            None => {
                trace!(
                    "No stamp image for {:?}; skipping {} stamps",
                    self.brush.active_stamp, placed
                );
                0
            }
        };

        RenderOutcome::Stamps {
            placed,
            painted,
            radius,
        }
    }

    /// Clears the surface and replays every recorded stroke as a polyline.
    ///
    /// Best effort only: strokes are redrawn with the current line style, so
    /// stamp-mode strokes and per-stroke brush settings are not reproduced.
    pub fn redraw_history(&mut self) {
        self.surface.clear();
        let ctx = self.surface.context();
        for stroke in self.history.strokes() {
            render::render_polyline(ctx, &stroke.points(), &self.settings.line);
        }
        debug!("Replayed {} strokes", self.history.len());
    }

    /// Composites the live surface onto a host context, through the preview
    /// filter when stamp mode is active.
    pub fn present(&self, ctx: &cairo::Context) -> Result<(), EngineError> {
        render::present(ctx, self.surface.image_surface(), self.preview_filter())?;
        Ok(())
    }
}
