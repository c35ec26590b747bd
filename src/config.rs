//! View configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphResult;

/// Layout and interaction settings for an axis graph view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphViewConfig {
    /// Padding around the plot area; doubled on the bottom and left edges
    /// to make room for labels.
    pub padding: f32,
    /// Half length of the tick marks crossing each axis.
    pub tick_half_length: f32,
    /// Half size of the cross drawn for each data point.
    pub marker_half_size: f32,
    /// Full size of the cross drawn for named points.
    pub named_marker_size: f32,
    /// Font size of tick labels and axis names.
    pub label_size: f32,
    /// Pixel distance a press must travel before it becomes a drag.
    pub drag_threshold_px: f32,
    /// Smallest plot area, in pixels, that is still drawn.
    pub min_plot_size: f32,
    /// Apply magnification gestures to the axis bounds.
    pub magnification_zoom: bool,
    /// Show the name of the selected named point.
    pub show_names: bool,
}

impl Default for GraphViewConfig {
    fn default() -> Self {
        Self {
            padding: 17.0,
            tick_half_length: 5.0,
            marker_half_size: 5.0,
            named_marker_size: 10.0,
            label_size: 11.0,
            drag_threshold_px: 4.0,
            min_plot_size: 50.0,
            magnification_zoom: false,
            show_names: true,
        }
    }
}

impl GraphViewConfig {
    /// Decode a configuration from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
