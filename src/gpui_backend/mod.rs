//! GPUI integration for gpui_axisgraph.
//!
//! This module provides a GPUI view that renders an axis graph from an
//! [`AxisGraphDataSource`](crate::datasource::AxisGraphDataSource) and
//! handles pan, magnification, and tap selection of named points.

mod geometry;
mod paint;
mod state;
mod text;
mod view;

pub use view::{GpuiAxisGraphView, GraphHandle};
