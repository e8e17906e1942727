//! Per-stroke sample recording and the session stroke history.

use crate::util::Point;

/// One recorded pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the stroke started (0 for the first sample)
    pub elapsed_ms: u64,
}

impl Sample {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A single pointer-down-to-pointer-up gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    samples: Vec<Sample>,
    open: bool,
}

impl Stroke {
    /// Starts an open stroke whose first sample sits at `point` with elapsed time 0.
    pub fn begin(point: Point) -> Self {
        Self {
            samples: vec![Sample {
                x: point.x,
                y: point.y,
                elapsed_ms: 0,
            }],
            open: true,
        }
    }

    /// Appends a sample.
    ///
    /// Timestamps are kept non-decreasing: an `elapsed_ms` earlier than the
    /// previous sample is raised to match it.
    pub fn push(&mut self, point: Point, elapsed_ms: u64) {
        let floor = self.samples.last().map_or(0, |s| s.elapsed_ms);
        self.samples.push(Sample {
            x: point.x,
            y: point.y,
            elapsed_ms: elapsed_ms.max(floor),
        });
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn points(&self) -> Vec<Point> {
        self.samples.iter().map(Sample::point).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Ordered strokes for the current session.
///
/// Append-only while drawing; only [`StrokeHistory::clear`] removes entries.
/// Only the last stroke may be open.
#[derive(Debug, Default, Clone)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new stroke at `point`, closing the previous one if it was still open.
    ///
    /// Returns `true` when an open stroke had to be force-closed.
    pub fn open(&mut self, point: Point) -> bool {
        let superseded = self.close_current();
        self.strokes.push(Stroke::begin(point));
        superseded
    }

    /// The open stroke, if any.
    pub fn current_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut().filter(|stroke| stroke.is_open())
    }

    pub fn current(&self) -> Option<&Stroke> {
        self.strokes.last().filter(|stroke| stroke.is_open())
    }

    /// Closes the open stroke. Returns `false` when nothing was open.
    pub fn close_current(&mut self) -> bool {
        match self.current_mut() {
            Some(stroke) => {
                stroke.close();
                true
            }
            None => false,
        }
    }

    /// Removes every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
