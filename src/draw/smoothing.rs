//! Rolling-average smoothing for stamp sizing.
//!
//! Keeps the last N segment lengths in a fixed ring. Stamp radii are
//! interpolated between the ring's mean before and after each new segment, so
//! slow, dense movement produces small, tightly packed stamps and fast movement
//! spreads them out.

use crate::util::{Point, lerp};

/// Ring capacity used unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 20;

/// Stamps placed per pixel of segment length unless configured otherwise.
pub const DEFAULT_CIRCLES_PER_UNIT: f64 = 0.1;

/// Fixed-capacity ring of recent segment distances and endpoints.
///
/// Both rings are always fully populated (zero distances, origin points after a
/// reset), so the average is defined from the very first segment. Early in a
/// stroke the zero fill dilutes the mean, biasing the first stamps small.
#[derive(Clone, Debug)]
pub struct SmoothingBuffer {
    distances: Box<[f64]>,
    points: Box<[Point]>,
    cursor: usize,
}

/// Radius at the start and end of one segment's stamp run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusSpan {
    pub start: f64,
    pub end: f64,
}

impl RadiusSpan {
    pub fn at(&self, t: f64) -> f64 {
        lerp(self.start, self.end, t)
    }
}

impl Default for SmoothingBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SmoothingBuffer {
    /// Creates a buffer holding `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            distances: vec![0.0; capacity].into_boxed_slice(),
            points: vec![Point::ORIGIN; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.distances.len()
    }

    /// Next write position, always in `0..capacity`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zeroes every distance, sets every point to `origin` and rewinds the cursor.
    pub fn reset(&mut self, origin: Point) {
        self.distances.fill(0.0);
        self.points.fill(origin);
        self.cursor = 0;
    }

    /// Mean over the whole ring, zero-filled slots included.
    pub fn average_distance(&self) -> f64 {
        self.distances.iter().sum::<f64>() / self.capacity() as f64
    }

    /// Records one segment and returns the interpolation radii for it.
    ///
    /// `start` is the mean before writing, `end` the mean after.
    pub fn push(&mut self, distance: f64, point: Point) -> RadiusSpan {
        let start = self.average_distance();
        self.distances[self.cursor] = distance;
        self.points[self.cursor] = point;
        self.cursor = (self.cursor + 1) % self.capacity();
        RadiusSpan {
            start,
            end: self.average_distance(),
        }
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Number of intervals a segment of length `distance` is split into.
///
/// `floor(distance × circles_per_unit)`, never less than 1 so interpolation
/// is defined even for coincident points. Stamps placed = result + 1.
pub fn stamp_count(distance: f64, circles_per_unit: f64) -> usize {
    let raw = (distance * circles_per_unit).floor();
    if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        1
    }
}

/// One planned stamp placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dab {
    pub center: Point,
    pub radius: f64,
}

/// Iterator over the stamps for one segment, endpoints included.
#[derive(Clone, Debug)]
pub struct DabPlan {
    from: Point,
    to: Point,
    radius: RadiusSpan,
    intervals: usize,
    next: usize,
}

impl DabPlan {
    pub fn new(from: Point, to: Point, radius: RadiusSpan, circles_per_unit: f64) -> Self {
        Self {
            from,
            to,
            radius,
            intervals: stamp_count(from.distance_to(to), circles_per_unit),
            next: 0,
        }
    }

    /// Number of intervals; the plan yields one more dab than this.
    pub fn intervals(&self) -> usize {
        self.intervals
    }
}

impl Iterator for DabPlan {
    type Item = Dab;

    fn next(&mut self) -> Option<Dab> {
        if self.next > self.intervals {
            return None;
        }
        let t = self.next as f64 / self.intervals as f64;
        self.next += 1;
        Some(Dab {
            center: self.from.lerp(self.to, t),
            radius: self.radius.at(t),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.intervals + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DabPlan {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_push_is_diluted_by_zero_fill() {
        let mut buffer = SmoothingBuffer::new(DEFAULT_CAPACITY);
        let span = buffer.push(10.0, Point::new(10.0, 0.0));

        assert_eq!(span.start, 0.0);
        assert_eq!(span.end, 10.0 / DEFAULT_CAPACITY as f64);
        assert_eq!(buffer.average_distance(), 0.5);
    }

    #[test]
    fn cursor_wraps_at_capacity() {
        let mut buffer = SmoothingBuffer::new(3);
        for i in 0..4 {
            buffer.push(f64::from(i + 1), Point::ORIGIN);
        }
        // 4th write overwrote slot 0.
        assert_eq!(buffer.distances(), &[4.0, 2.0, 3.0]);
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn full_ring_averages_recent_segments_only() {
        let mut buffer = SmoothingBuffer::new(2);
        buffer.push(100.0, Point::ORIGIN);
        buffer.push(4.0, Point::ORIGIN);
        let span = buffer.push(6.0, Point::ORIGIN);
        assert_eq!(span.start, 52.0);
        assert_eq!(span.end, 5.0);
    }

    #[test]
    fn reset_refills_points_with_origin() {
        let mut buffer = SmoothingBuffer::new(4);
        buffer.push(3.0, Point::new(1.0, 1.0));
        buffer.reset(Point::new(7.0, 8.0));

        assert_eq!(buffer.cursor(), 0);
        assert!(buffer.distances().iter().all(|d| *d == 0.0));
        assert!(buffer.points().iter().all(|p| *p == Point::new(7.0, 8.0)));
    }

    #[test]
    fn zero_capacity_is_promoted_to_one() {
        let mut buffer = SmoothingBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        let span = buffer.push(8.0, Point::ORIGIN);
        assert_eq!(span.end, 8.0);
    }

    #[test]
    fn stamp_count_is_at_least_one() {
        assert_eq!(stamp_count(0.0, DEFAULT_CIRCLES_PER_UNIT), 1);
        assert_eq!(stamp_count(9.9, DEFAULT_CIRCLES_PER_UNIT), 1);
        assert_eq!(stamp_count(25.0, DEFAULT_CIRCLES_PER_UNIT), 2);
        assert_eq!(stamp_count(f64::NAN, DEFAULT_CIRCLES_PER_UNIT), 1);
    }

    #[test]
    fn plan_for_25px_segment_places_three_stamps() {
        let span = RadiusSpan {
            start: 0.0,
            end: 1.25,
        };
        let plan = DabPlan::new(Point::ORIGIN, Point::new(25.0, 0.0), span, 0.1);
        assert_eq!(plan.intervals(), 2);
        assert_eq!(plan.len(), 3);

        let dabs: Vec<Dab> = plan.collect();
        assert_eq!(dabs[0].center, Point::ORIGIN);
        assert_eq!(dabs[1].center, Point::new(12.5, 0.0));
        assert_eq!(dabs[2].center, Point::new(25.0, 0.0));
        assert_eq!(dabs[0].radius, 0.0);
        assert_eq!(dabs[2].radius, 1.25);
    }

    #[test]
    fn coincident_points_still_plan_two_dabs() {
        let span = RadiusSpan {
            start: 1.0,
            end: 1.0,
        };
        let p = Point::new(4.0, 4.0);
        let dabs: Vec<Dab> = DabPlan::new(p, p, span, 0.1).collect();
        assert_eq!(dabs.len(), 2);
        assert!(dabs.iter().all(|d| d.center == p && d.radius == 1.0));
    }

    #[test]
    fn slower_strokes_pack_stamps_tighter() {
        let mut slow = SmoothingBuffer::new(DEFAULT_CAPACITY);
        let mut fast = SmoothingBuffer::new(DEFAULT_CAPACITY);
        let mut slow_span = RadiusSpan { start: 0.0, end: 0.0 };
        let mut fast_span = slow_span;
        for _ in 0..DEFAULT_CAPACITY {
            slow_span = slow.push(2.0, Point::ORIGIN);
            fast_span = fast.push(40.0, Point::ORIGIN);
        }
        assert!(slow_span.end < fast_span.end);

        let slow_plan = DabPlan::new(Point::ORIGIN, Point::new(2.0, 0.0), slow_span, 0.1);
        let fast_plan = DabPlan::new(Point::ORIGIN, Point::new(40.0, 0.0), fast_span, 0.1);
        let slow_spacing = 2.0 / slow_plan.intervals() as f64;
        let fast_spacing = 40.0 / fast_plan.intervals() as f64;
        assert!(slow_spacing < fast_spacing);
    }
}
