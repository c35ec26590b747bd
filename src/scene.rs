//! Frame construction for an axis graph.
//!
//! [`build_scene`] turns a data source into render commands. It does not
//! depend on any UI toolkit, so layout can be inspected headlessly.

use tracing::warn;

use crate::axis::{AxisFormat, TextMeasurer, tick_fractions, tick_value};
use crate::config::GraphViewConfig;
use crate::datasource::AxisGraphDataSource;
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::render::{
    Color, LineSegment, LineStyle, RenderCommand, RenderList, TextStyle, push_cross,
};
use crate::transform::Transform;

/// Built frame plus the geometry needed to interpret pointer input.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Commands to paint.
    pub render: RenderList,
    /// Plot area, when the view is large enough to draw one.
    pub plot_rect: Option<ScreenRect>,
    /// Transform for the plot area, when the axis ranges are valid.
    pub transform: Option<Transform>,
}

/// Parsed label format, re-parsed only when the spec string changes.
#[derive(Debug, Clone, Default)]
pub struct FormatCache {
    spec: Option<String>,
    format: AxisFormat,
}

impl FormatCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a spec, falling back to the default format when it is invalid.
    pub fn resolve(&mut self, spec: &str) -> AxisFormat {
        if self.spec.as_deref() != Some(spec) {
            self.format = AxisFormat::parse(spec).unwrap_or_else(|err| {
                warn!(%err, "using default axis label format");
                AxisFormat::default()
            });
            self.spec = Some(spec.to_string());
        }
        self.format
    }
}

/// Label formats for both axes.
#[derive(Debug, Clone, Default)]
pub struct LabelFormats {
    /// X axis format.
    pub x: FormatCache,
    /// Y axis format.
    pub y: FormatCache,
}

/// Plot area inside the view bounds.
///
/// The bottom and left edges get twice the padding to make room for tick
/// labels and axis names.
pub fn plot_area(bounds: ScreenRect, config: &GraphViewConfig) -> ScreenRect {
    let pad = config.padding;
    bounds.inset(pad, pad, pad * 2.0, pad * 2.0)
}

/// Build the render commands for one frame.
///
/// `selected` is the index of the tapped named point, if any.
pub fn build_scene<D, M>(
    source: &D,
    bounds: ScreenRect,
    selected: Option<usize>,
    config: &GraphViewConfig,
    formats: &mut LabelFormats,
    measurer: &M,
) -> Scene
where
    D: AxisGraphDataSource + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let mut scene = Scene::default();
    let plot_rect = plot_area(bounds, config);
    if plot_rect.width() < config.min_plot_size || plot_rect.height() < config.min_plot_size {
        return scene;
    }
    scene.plot_rect = Some(plot_rect);

    scene.render.push(RenderCommand::FillRect {
        rect: bounds,
        color: Color::HIT_AREA,
    });

    let Some(transform) = Transform::new(source.x_bounds(), source.y_bounds(), plot_rect) else {
        let message = "Invalid axis range";
        let size = measurer.measure(message, config.label_size);
        scene.render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                plot_rect.min.x + (plot_rect.width() - size.0) * 0.5,
                plot_rect.min.y + (plot_rect.height() - size.1) * 0.5,
            ),
            text: message.to_string(),
            style: label_style(config),
        });
        return scene;
    };
    scene.transform = Some(transform);

    build_axes(&mut scene.render, source, &transform, config);
    build_tick_labels(&mut scene.render, source, &transform, config, formats, measurer);
    build_axis_names(&mut scene.render, source, &transform, config, measurer);

    scene.render.push(RenderCommand::ClipRect(plot_rect));
    build_points(&mut scene.render, source, &transform, config);
    build_named_points(&mut scene.render, source, &transform, selected, config, measurer);
    scene.render.push(RenderCommand::ClipEnd);

    scene
}

fn build_axes<D>(render: &mut RenderList, source: &D, transform: &Transform, config: &GraphViewConfig)
where
    D: AxisGraphDataSource + ?Sized,
{
    let half = config.tick_half_length;
    let origin = transform.unit_to_screen(Point::new(0.0, 0.0));
    let mut segments = vec![
        LineSegment::new(origin, transform.unit_to_screen(Point::new(0.0, 1.0))),
        LineSegment::new(origin, transform.unit_to_screen(Point::new(1.0, 0.0))),
    ];

    for (_, fraction) in tick_fractions(source.x_segment_count()) {
        let tick = transform.unit_to_screen(Point::new(fraction, 0.0));
        segments.push(LineSegment::new(
            ScreenPoint::new(tick.x, tick.y + half),
            ScreenPoint::new(tick.x, tick.y - half),
        ));
    }

    for (_, fraction) in tick_fractions(source.y_segment_count()) {
        let tick = transform.unit_to_screen(Point::new(0.0, fraction));
        segments.push(LineSegment::new(
            ScreenPoint::new(tick.x + half, tick.y),
            ScreenPoint::new(tick.x - half, tick.y),
        ));
    }

    render.push(RenderCommand::LineSegments {
        segments,
        style: LineStyle::default(),
    });
}

fn build_tick_labels<D, M>(
    render: &mut RenderList,
    source: &D,
    transform: &Transform,
    config: &GraphViewConfig,
    formats: &mut LabelFormats,
    measurer: &M,
) where
    D: AxisGraphDataSource + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let gap = 2.0;
    let style = label_style(config);

    let x_format = formats.x.resolve(source.x_format());
    let x_count = source.x_segment_count();
    for (i, fraction) in tick_fractions(x_count) {
        let text = x_format.format(tick_value(source.x_bounds(), i, x_count));
        let size = measurer.measure(&text, style.size);
        let tick = transform.unit_to_screen(Point::new(fraction, 0.0));
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                tick.x - size.0 * 0.5,
                tick.y + config.tick_half_length + gap,
            ),
            text,
            style,
        });
    }

    // The Y axis also labels its origin; the X axis starts at the first tick.
    let y_format = formats.y.resolve(source.y_format());
    let y_count = source.y_segment_count();
    if y_count == 0 {
        return;
    }
    for i in 0..=y_count {
        let fraction = i as f64 / y_count as f64;
        let text = y_format.format(tick_value(source.y_bounds(), i, y_count));
        let size = measurer.measure(&text, style.size);
        let tick = transform.unit_to_screen(Point::new(0.0, fraction));
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                tick.x - config.tick_half_length - gap - size.0,
                tick.y - size.1 * 0.5,
            ),
            text,
            style,
        });
    }
}

fn build_axis_names<D, M>(
    render: &mut RenderList,
    source: &D,
    transform: &Transform,
    config: &GraphViewConfig,
    measurer: &M,
) where
    D: AxisGraphDataSource + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let style = label_style(config);
    let label_height = measurer.measure("0", style.size).1;

    let x_name = source.x_name();
    if !x_name.is_empty() {
        let size = measurer.measure(x_name, style.size);
        let anchor = transform.unit_to_screen(Point::new(0.5, 0.0));
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                anchor.x - size.0 * 0.5,
                anchor.y + config.tick_half_length + label_height + 2.0,
            ),
            text: x_name.to_string(),
            style,
        });
    }

    let y_name = source.y_name();
    if !y_name.is_empty() {
        let size = measurer.measure(y_name, style.size);
        let top = transform.unit_to_screen(Point::new(0.0, 1.0));
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(top.x, top.y - size.1 - 2.0),
            text: y_name.to_string(),
            style,
        });
    }
}

fn build_points<D>(render: &mut RenderList, source: &D, transform: &Transform, config: &GraphViewConfig)
where
    D: AxisGraphDataSource + ?Sized,
{
    let half = config.marker_half_size;

    let mut segments = Vec::with_capacity(source.points().len() * 2);
    for point in source.points() {
        push_cross(&mut segments, transform.data_to_screen(*point), half);
    }
    if !segments.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments,
            style: LineStyle::default(),
        });
    }

    for group in source.colored_points() {
        let mut segments = Vec::with_capacity(group.points.len() * 2);
        for point in &group.points {
            push_cross(&mut segments, transform.data_to_screen(*point), half);
        }
        if !segments.is_empty() {
            render.push(RenderCommand::LineSegments {
                segments,
                style: LineStyle {
                    color: group.color,
                    width: 1.0,
                },
            });
        }
    }
}

fn build_named_points<D, M>(
    render: &mut RenderList,
    source: &D,
    transform: &Transform,
    selected: Option<usize>,
    config: &GraphViewConfig,
    measurer: &M,
) where
    D: AxisGraphDataSource + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let half = config.named_marker_size * 0.5;
    for (index, named) in source.named_points().iter().enumerate() {
        let is_selected = selected == Some(index);
        let center = transform.data_to_screen(named.position);
        let mut segments = Vec::with_capacity(2);
        push_cross(&mut segments, center, half);
        render.push(RenderCommand::LineSegments {
            segments,
            style: LineStyle {
                color: if is_selected { Color::GREEN } else { Color::RED },
                width: 1.0,
            },
        });

        if is_selected && config.show_names && !named.name.is_empty() {
            let style = label_style(config);
            let size = measurer.measure(&named.name, style.size);
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(center.x + half + 2.0, center.y - half - size.1),
                text: named.name.clone(),
                style,
            });
        }
    }
}

fn label_style(config: &GraphViewConfig) -> TextStyle {
    TextStyle {
        color: Color::BLACK,
        size: config.label_size,
    }
}
