//! Data sources feeding an axis graph.
//!
//! A data source exposes the points to draw and owns the axis bounds. The
//! view reads it on every frame and writes new bounds back while panning,
//! so hosts observe the visible window by reading the same source.

mod graph_data;

pub use graph_data::{AxisSpec, GraphData};

use serde::{Deserialize, Serialize};

use crate::axis::DEFAULT_FORMAT;
use crate::geom::Point;
use crate::render::Color;
use crate::view::Range;

/// Points drawn together in one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGroup {
    /// Marker color.
    pub color: Color,
    /// Points in data space.
    pub points: Vec<Point>,
}

impl PointGroup {
    /// Create a colored group.
    pub fn new(color: Color, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            color,
            points: points.into_iter().collect(),
        }
    }
}

/// A labeled point that can be selected by tapping near it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPoint {
    /// Position in data space.
    pub position: Point,
    /// Label shown when the point is selected.
    pub name: String,
}

impl NamedPoint {
    /// Create a named point.
    pub fn new(position: Point, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// Source of everything an axis graph draws.
///
/// Bounds are mutable: the view pans by calling the setters.
pub trait AxisGraphDataSource {
    /// Uncolored points.
    fn points(&self) -> &[Point];

    /// Points grouped by marker color, drawn in order.
    fn colored_points(&self) -> &[PointGroup] {
        &[]
    }

    /// Points that can be selected by tapping.
    fn named_points(&self) -> &[NamedPoint] {
        &[]
    }

    /// X axis title.
    fn x_name(&self) -> &str;
    /// Visible X range.
    fn x_bounds(&self) -> Range;
    /// Replace the visible X range.
    fn set_x_bounds(&mut self, bounds: Range);
    /// Number of grid divisions on X.
    fn x_segment_count(&self) -> usize;

    /// Y axis title.
    fn y_name(&self) -> &str;
    /// Visible Y range.
    fn y_bounds(&self) -> Range;
    /// Replace the visible Y range.
    fn set_y_bounds(&mut self, bounds: Range);
    /// Number of grid divisions on Y.
    fn y_segment_count(&self) -> usize;

    /// Label format for X values, see [`AxisFormat`](crate::axis::AxisFormat).
    fn x_format(&self) -> &str {
        DEFAULT_FORMAT
    }

    /// Label format for Y values.
    fn y_format(&self) -> &str {
        DEFAULT_FORMAT
    }
}
