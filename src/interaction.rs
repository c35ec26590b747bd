//! Interaction helpers for panning, magnification, and tap selection.
//!
//! These helpers are used by render backends to implement consistent
//! interaction semantics across platforms.

use crate::collect::SliceExt;
use crate::datasource::NamedPoint;
use crate::geom::{Point, Size};
use crate::view::Range;

/// Turns cumulative drag translations into per-callback deltas.
///
/// Gesture callbacks report the total translation since the drag began; panning
/// needs the movement since the previous callback.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    last: Option<Size>,
}

impl DragTracker {
    /// Create a tracker with no active drag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cumulative translation and return the delta since the last call.
    ///
    /// The first call of a drag returns the full translation.
    pub fn update(&mut self, translation: Size) -> Size {
        let delta = match self.last {
            Some(last) => translation - last,
            None => translation,
        };
        self.last = Some(translation);
        delta
    }

    /// Finish the drag; the next update starts from zero again.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Check whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

/// Shift axis bounds by a screen-space drag delta.
///
/// Dragging right moves the visible window left in data space, and dragging
/// down (screen Y grows downward) moves it up.
pub fn pan_bounds(x: Range, y: Range, delta: Size, plot_size: Size) -> (Range, Range) {
    let offset = -1.0 * delta * Size::new(x.width(), -y.width()) / plot_size;
    (x + offset.width, y + offset.height)
}

/// Scale axis bounds about a center point in data space.
///
/// A factor below one zooms in.
pub fn zoom_bounds(x: Range, y: Range, center: Point, factor: f64) -> (Range, Range) {
    (
        x.scaled_about(center.x, factor),
        y.scaled_about(center.y, factor),
    )
}

/// State of a magnification gesture.
///
/// Zooming is not wired to the bounds by default; the tracker only records
/// the gesture so hosts can opt in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnificationTracker {
    magnification: f64,
}

impl Default for MagnificationTracker {
    fn default() -> Self {
        Self { magnification: 1.0 }
    }
}

impl MagnificationTracker {
    /// Create a tracker at unit magnification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a relative magnification step and return the bounds factor.
    ///
    /// A step above one magnifies, which shrinks the visible range.
    pub fn update(&mut self, step: f64) -> f64 {
        let step = step.clamp(0.1, 10.0);
        self.magnification *= step;
        1.0 / step
    }

    /// Cumulative magnification since the last reset.
    pub fn magnification(&self) -> f64 {
        self.magnification
    }

    /// Return to unit magnification.
    pub fn reset(&mut self) {
        self.magnification = 1.0;
    }
}

/// Convert a scroll delta in pixels into a magnification step.
pub fn magnification_from_scroll(delta_pixels: f32) -> f64 {
    (1.0 + delta_pixels as f64 * 0.002).clamp(0.1, 10.0)
}

/// Index of the named point closest to `location` in data space.
///
/// Distance is squared Euclidean; the first of several equally close points
/// wins. Returns `None` when there are no named points.
pub fn nearest_named_point(points: &[NamedPoint], location: Point) -> Option<usize> {
    points.min_index_by(|lhs, rhs| {
        (lhs.position - location).squared_norm() < (rhs.position - location).squared_norm()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_tracker_reports_incremental_deltas() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.update(Size::new(3.0, 1.0)), Size::new(3.0, 1.0));
        assert_eq!(tracker.update(Size::new(5.0, -1.0)), Size::new(2.0, -2.0));
        assert!(tracker.is_dragging());
        tracker.end();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.update(Size::new(1.0, 1.0)), Size::new(1.0, 1.0));
    }

    #[test]
    fn pan_scales_by_range_over_pixels() {
        let x = Range::new(0.0, 2.0);
        let y = Range::new(0.0, 4.0);
        let (nx, ny) = pan_bounds(x, y, Size::new(50.0, 25.0), Size::new(100.0, 100.0));
        assert_eq!(nx, Range::new(-1.0, 1.0));
        assert_eq!(ny, Range::new(1.0, 5.0));
    }

    #[test]
    fn pan_by_zero_is_identity() {
        let x = Range::new(0.1, 1.7);
        let y = Range::new(-0.5, 1.2);
        let (nx, ny) = pan_bounds(x, y, Size::new(0.0, 0.0), Size::new(600.0, 400.0));
        assert_eq!(nx, x);
        assert_eq!(ny, y);
    }

    #[test]
    fn zoom_about_center() {
        let (x, y) = zoom_bounds(
            Range::new(0.0, 4.0),
            Range::new(0.0, 2.0),
            Point::new(1.0, 1.0),
            0.5,
        );
        assert_eq!(x, Range::new(0.5, 2.5));
        assert_eq!(y, Range::new(0.5, 1.5));
    }

    #[test]
    fn magnification_accumulates() {
        let mut tracker = MagnificationTracker::new();
        let factor = tracker.update(2.0);
        assert_eq!(factor, 0.5);
        tracker.update(2.0);
        assert_eq!(tracker.magnification(), 4.0);
        tracker.reset();
        assert_eq!(tracker.magnification(), 1.0);
        assert!(magnification_from_scroll(100.0) > 1.0);
        assert!(magnification_from_scroll(-100.0) < 1.0);
    }

    #[test]
    fn nearest_named_point_breaks_ties_by_order() {
        let points = vec![
            NamedPoint::new(Point::new(-1.0, 0.0), "left"),
            NamedPoint::new(Point::new(1.0, 0.0), "right"),
            NamedPoint::new(Point::new(0.0, 5.0), "far"),
        ];
        assert_eq!(nearest_named_point(&points, Point::new(0.0, 0.0)), Some(0));
        assert_eq!(nearest_named_point(&points, Point::new(0.9, 0.1)), Some(1));
        assert_eq!(nearest_named_point(&points, Point::new(0.0, 4.0)), Some(2));
        assert_eq!(nearest_named_point(&[], Point::new(0.0, 0.0)), None);
    }
}
