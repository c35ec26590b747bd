//! Coordinate transforms between data, unit, and screen space.
//!
//! Data space is defined by the axis ranges. Unit space maps each range onto
//! `[0, 1]`. Screen space is the plot rectangle in pixels, with unit
//! `(0, 0)` at its bottom-left corner and `(1, 1)` at its top-right corner.

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::view::Range;

/// Transform between the three coordinate spaces of a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x: Range,
    y: Range,
    screen: ScreenRect,
}

impl Transform {
    /// Create a transform for the given axis ranges and plot rectangle.
    ///
    /// Returns `None` when either range has no width or the rectangle has
    /// no area.
    pub fn new(x: Range, y: Range, screen: ScreenRect) -> Option<Self> {
        if !x.is_valid() || !y.is_valid() || !screen.is_valid() {
            return None;
        }
        Some(Self { x, y, screen })
    }

    /// X axis range.
    pub fn x_range(&self) -> Range {
        self.x
    }

    /// Y axis range.
    pub fn y_range(&self) -> Range {
        self.y
    }

    /// Plot rectangle.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Map a data point into unit space.
    pub fn data_to_unit(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.x.min) / self.x.width(),
            (point.y - self.y.min) / self.y.width(),
        )
    }

    /// Map a unit point back into data space.
    pub fn unit_to_data(&self, point: Point) -> Point {
        Point::new(
            point.x * self.x.width() + self.x.min,
            point.y * self.y.width() + self.y.min,
        )
    }

    /// Map a unit point onto the plot rectangle.
    pub fn unit_to_screen(&self, point: Point) -> ScreenPoint {
        let (origin, max) = self.corners();
        let p = origin + (max - origin) * point;
        ScreenPoint::new(p.x as f32, p.y as f32)
    }

    /// Map a screen point into unit space.
    pub fn screen_to_unit(&self, point: ScreenPoint) -> Point {
        let (origin, max) = self.corners();
        (Point::new(point.x as f64, point.y as f64) - origin) / (max - origin)
    }

    /// Map a data point onto the plot rectangle.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        self.unit_to_screen(self.data_to_unit(point))
    }

    /// Map a screen point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Point {
        self.unit_to_data(self.screen_to_unit(point))
    }

    fn corners(&self) -> (Point, Point) {
        let origin = Point::new(self.screen.min.x as f64, self.screen.max.y as f64);
        let max = Point::new(self.screen.max.x as f64, self.screen.min.y as f64);
        (origin, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> Transform {
        Transform::new(
            Range::new(0.1, 1.7),
            Range::new(-0.5, 1.2),
            ScreenRect::new(ScreenPoint::new(34.0, 17.0), ScreenPoint::new(634.0, 417.0)),
        )
        .expect("valid transform")
    }

    #[test]
    fn unit_corners_map_to_rect_corners() {
        let t = transform();
        assert_eq!(t.unit_to_screen(Point::new(0.0, 0.0)), ScreenPoint::new(34.0, 417.0));
        assert_eq!(t.unit_to_screen(Point::new(1.0, 1.0)), ScreenPoint::new(634.0, 17.0));
        assert_eq!(t.unit_to_screen(Point::new(0.5, 0.5)), ScreenPoint::new(334.0, 217.0));
    }

    #[test]
    fn data_unit_roundtrip() {
        let t = transform();
        let point = Point::new(0.9, -0.2);
        let unit = t.data_to_unit(point);
        assert!((unit.x - 0.5).abs() < 1e-12);
        let back = t.unit_to_data(unit);
        assert!((back.x - point.x).abs() < 1e-12);
        assert!((back.y - point.y).abs() < 1e-12);
    }

    #[test]
    fn screen_roundtrip() {
        let t = transform();
        let point = Point::new(1.3, 0.75);
        let screen = t.data_to_screen(point);
        let back = t.screen_to_data(screen);
        assert!((back.x - point.x).abs() < 1e-4);
        assert!((back.y - point.y).abs() < 1e-4);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let rect = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 10.0));
        assert!(Transform::new(Range::new(1.0, 1.0), Range::new(0.0, 1.0), rect).is_none());
        let flat = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 0.0));
        assert!(Transform::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0), flat).is_none());
    }
}
