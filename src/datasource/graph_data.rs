use serde::{Deserialize, Serialize};

use crate::axis::{AxisFormat, DEFAULT_FORMAT};
use crate::error::GraphResult;
use crate::geom::Point;
use crate::view::Range;

use super::{AxisGraphDataSource, NamedPoint, PointGroup};

/// Description of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// Axis title.
    pub name: String,
    /// Visible range.
    pub bounds: Range,
    /// Number of grid divisions.
    pub segment_count: usize,
    /// Label format spec.
    #[serde(default = "default_format")]
    pub format: String,
}

impl AxisSpec {
    /// Create an axis with the default label format.
    pub fn new(name: impl Into<String>, bounds: Range, segment_count: usize) -> Self {
        Self {
            name: name.into(),
            bounds,
            segment_count,
            format: default_format(),
        }
    }

    /// Set the label format, validating it first.
    pub fn with_format(mut self, format: &str) -> GraphResult<Self> {
        AxisFormat::parse(format)?;
        self.format = format.to_string();
        Ok(self)
    }
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

/// In-memory data source.
///
/// Suitable for fixed data sets and for loading a graph description from
/// JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    /// X axis.
    pub x_axis: AxisSpec,
    /// Y axis.
    pub y_axis: AxisSpec,
    /// Uncolored points.
    #[serde(default)]
    pub points: Vec<Point>,
    /// Colored point groups.
    #[serde(default)]
    pub colored_points: Vec<PointGroup>,
    /// Tappable named points.
    #[serde(default)]
    pub named_points: Vec<NamedPoint>,
}

impl GraphData {
    /// Create an empty data set over the given axes.
    pub fn new(x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self {
            x_axis,
            y_axis,
            points: Vec::new(),
            colored_points: Vec::new(),
            named_points: Vec::new(),
        }
    }

    /// Decode a data set from JSON, validating the label formats.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        AxisFormat::parse(&data.x_axis.format)?;
        AxisFormat::parse(&data.y_axis.format)?;
        Ok(data)
    }

    /// Add uncolored points.
    pub fn with_points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.points.extend(points);
        self
    }

    /// Add a colored group.
    pub fn with_group(mut self, group: PointGroup) -> Self {
        self.colored_points.push(group);
        self
    }

    /// Add a named point.
    pub fn with_named_point(mut self, point: NamedPoint) -> Self {
        self.named_points.push(point);
        self
    }
}

impl AxisGraphDataSource for GraphData {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn colored_points(&self) -> &[PointGroup] {
        &self.colored_points
    }

    fn named_points(&self) -> &[NamedPoint] {
        &self.named_points
    }

    fn x_name(&self) -> &str {
        &self.x_axis.name
    }

    fn x_bounds(&self) -> Range {
        self.x_axis.bounds
    }

    fn set_x_bounds(&mut self, bounds: Range) {
        self.x_axis.bounds = bounds;
    }

    fn x_segment_count(&self) -> usize {
        self.x_axis.segment_count
    }

    fn y_name(&self) -> &str {
        &self.y_axis.name
    }

    fn y_bounds(&self) -> Range {
        self.y_axis.bounds
    }

    fn set_y_bounds(&mut self, bounds: Range) {
        self.y_axis.bounds = bounds;
    }

    fn y_segment_count(&self) -> usize {
        self.y_axis.segment_count
    }

    fn x_format(&self) -> &str {
        &self.x_axis.format
    }

    fn y_format(&self) -> &str {
        &self.y_axis.format
    }
}
