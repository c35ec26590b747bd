use gpui::{Bounds, Pixels, Point};

use crate::geom::{ScreenPoint, ScreenRect};

pub(crate) fn distance_sq(a: ScreenPoint, b: ScreenPoint) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

pub(crate) fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}

pub(crate) fn screen_rect(bounds: Bounds<Pixels>) -> ScreenRect {
    let min = screen_point(bounds.origin);
    ScreenRect::new(
        min,
        ScreenPoint::new(
            min.x + f32::from(bounds.size.width),
            min.y + f32::from(bounds.size.height),
        ),
    )
}
