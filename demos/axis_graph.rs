use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_axisgraph::{
    AxisSpec, Color, GpuiAxisGraphView, GraphData, GraphViewConfig, NamedPoint, Point, PointGroup,
    Range,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(640.0), px(640.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let data = GraphData::new(
                AxisSpec::new("The X Axis", Range::new(0.1, 1.7), 8),
                AxisSpec::new("The Y Axis", Range::new(-0.5, 1.2), 6),
            )
            .with_points([Point::new(0.8, 0.5), Point::new(0.9, -0.2)])
            .with_group(PointGroup::new(
                Color::RED,
                [Point::new(0.1, 0.8), Point::new(0.2, 0.8)],
            ))
            .with_group(PointGroup::new(
                Color::BLUE,
                [Point::new(0.7, 0.2), Point::new(0.6, 0.2)],
            ))
            .with_named_point(NamedPoint::new(Point::new(0.0, 0.0), "The origin"))
            .with_named_point(NamedPoint::new(Point::new(1.0, 1.0), "Unit corner"));

            let config = GraphViewConfig {
                magnification_zoom: std::env::args().any(|arg| arg == "--zoom"),
                ..Default::default()
            };

            let view = GpuiAxisGraphView::with_config(data, config);
            cx.new(|_| view)
        })
        .unwrap();
    });
}
