//! gpui_axisgraph draws a labeled Cartesian axis graph for GPUI.
//!
//! A data source provides points, optional colored groups and named points,
//! and owns the axis bounds. The view plots crosses over a ticked grid, pans
//! on drag, and reveals the name of the named point closest to a tap.

#![forbid(unsafe_code)]

pub mod axis;
pub mod collect;
pub mod config;
pub mod datasource;
pub mod error;
pub mod geom;
pub mod gpui_backend;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod transform;
pub mod view;

pub use axis::{AxisFormat, TextMeasurer};
pub use config::GraphViewConfig;
pub use datasource::{AxisGraphDataSource, AxisSpec, GraphData, NamedPoint, PointGroup};
pub use error::{GraphError, GraphResult};
pub use geom::{Point, ScreenPoint, ScreenRect, Size};
pub use gpui_backend::{GpuiAxisGraphView, GraphHandle};
pub use render::{Color, RenderCommand, RenderList};
pub use scene::{Scene, build_scene};
pub use transform::Transform;
pub use view::Range;
