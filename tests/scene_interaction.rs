use gpui_axisgraph::axis::ApproxTextMeasurer;
use gpui_axisgraph::interaction::{DragTracker, nearest_named_point, pan_bounds};
use gpui_axisgraph::scene::LabelFormats;
use gpui_axisgraph::{
    AxisGraphDataSource, AxisSpec, GraphData, GraphViewConfig, NamedPoint, Point, Range,
    RenderCommand, ScreenPoint, ScreenRect, Size, build_scene,
};

fn preview_data() -> GraphData {
    GraphData::new(
        AxisSpec::new("The X Axis", Range::new(0.1, 1.7), 8),
        AxisSpec::new("The Y Axis", Range::new(-0.5, 1.2), 6),
    )
    .with_points([Point::new(0.8, 0.5), Point::new(0.9, -0.2)])
    .with_named_point(NamedPoint::new(Point::new(-0.1, -0.1), "below"))
    .with_named_point(NamedPoint::new(Point::new(0.0, -0.1), "origin"))
    .with_named_point(NamedPoint::new(Point::new(0.0, -0.1), "origin again"))
}

fn view_bounds() -> ScreenRect {
    ScreenRect::new(ScreenPoint::new(10.0, 20.0), ScreenPoint::new(661.0, 471.0))
}

#[test]
fn tap_selects_first_of_duplicate_named_points() {
    let data = preview_data();
    let scene = build_scene(
        &data,
        view_bounds(),
        None,
        &GraphViewConfig::default(),
        &mut LabelFormats::default(),
        &ApproxTextMeasurer::default(),
    );
    let transform = scene.transform.expect("valid ranges");

    let tap = transform.data_to_screen(Point::new(0.01, -0.1));
    let location = transform.screen_to_data(tap);
    assert_eq!(nearest_named_point(data.named_points(), location), Some(1));

    let selected = build_scene(
        &data,
        view_bounds(),
        Some(1),
        &GraphViewConfig::default(),
        &mut LabelFormats::default(),
        &ApproxTextMeasurer::default(),
    );
    assert!(selected.render.texts().any(|(_, text)| text == "origin"));
    assert!(!selected.render.texts().any(|(_, text)| text == "origin again"));
}

#[test]
fn dragging_back_restores_bounds() {
    let mut data = preview_data();
    let plot = Size::new(600.0, 400.0);
    let original = (data.x_bounds(), data.y_bounds());
    let mut tracker = DragTracker::new();

    for translation in [Size::new(30.0, -10.0), Size::new(60.0, 25.0), Size::new(0.0, 0.0)] {
        let delta = tracker.update(translation);
        let (x, y) = pan_bounds(data.x_bounds(), data.y_bounds(), delta, plot);
        data.set_x_bounds(x);
        data.set_y_bounds(y);
    }
    tracker.end();

    assert!((data.x_bounds().min - original.0.min).abs() < 1e-9);
    assert!((data.y_bounds().max - original.1.max).abs() < 1e-9);
    assert!((data.x_bounds().width() - original.0.width()).abs() < 1e-9);
}

#[test]
fn markers_are_clipped_to_plot_area() {
    let data = preview_data();
    let scene = build_scene(
        &data,
        view_bounds(),
        None,
        &GraphViewConfig::default(),
        &mut LabelFormats::default(),
        &ApproxTextMeasurer::default(),
    );
    let plot_rect = scene.plot_rect.expect("large enough");
    let commands = scene.render.commands();
    let clip = commands
        .iter()
        .position(|command| *command == RenderCommand::ClipRect(plot_rect))
        .expect("markers are clipped");
    assert_eq!(commands.last(), Some(&RenderCommand::ClipEnd));
    assert!(
        commands[clip..]
            .iter()
            .all(|command| !matches!(command, RenderCommand::FillRect { .. }))
    );
}
