use tracing::{debug, trace};

use crate::config::GraphViewConfig;
use crate::datasource::AxisGraphDataSource;
use crate::geom::{ScreenPoint, ScreenRect, Size};
use crate::interaction::{
    DragTracker, MagnificationTracker, magnification_from_scroll, nearest_named_point, pan_bounds,
    zoom_bounds,
};
use crate::scene::{LabelFormats, Scene};
use crate::transform::Transform;

use super::geometry::distance_sq;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PressState {
    pub(crate) start: ScreenPoint,
    pub(crate) active: bool,
}

/// What a released press turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Release {
    /// Nothing was pressed.
    None,
    /// A drag finished.
    Drag,
    /// A tap selected a named point.
    Selected(usize),
    /// A tap with no named point to select.
    Missed,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct GraphUiState {
    pub(crate) plot_rect: Option<ScreenRect>,
    pub(crate) transform: Option<Transform>,
    pub(crate) press: Option<PressState>,
    pub(crate) drag: DragTracker,
    pub(crate) magnification: MagnificationTracker,
    pub(crate) selected: Option<usize>,
    pub(crate) formats: LabelFormats,
}

impl GraphUiState {
    pub(crate) fn apply_scene(&mut self, scene: &Scene) {
        self.plot_rect = scene.plot_rect;
        self.transform = scene.transform;
    }

    pub(crate) fn press(&mut self, pos: ScreenPoint) {
        self.press = Some(PressState {
            start: pos,
            active: false,
        });
        self.drag.end();
        self.magnification.reset();
    }

    /// Drop the current press without treating it as a tap.
    ///
    /// Used when the button is released outside the view.
    pub(crate) fn cancel_press(&mut self) -> bool {
        self.drag.end();
        self.press.take().is_some()
    }

    /// Track pointer movement; returns true when the bounds changed.
    pub(crate) fn drag_to<D>(
        &mut self,
        pos: ScreenPoint,
        source: &mut D,
        config: &GraphViewConfig,
    ) -> bool
    where
        D: AxisGraphDataSource + ?Sized,
    {
        let Some(mut press) = self.press else {
            return false;
        };
        if !press.active && distance_sq(press.start, pos) > config.drag_threshold_px.powi(2) {
            press.active = true;
        }
        self.press = Some(press);
        if !press.active {
            return false;
        }

        let Some(rect) = self.plot_rect else {
            return false;
        };
        let translation = pos - press.start;
        let delta = self
            .drag
            .update(Size::new(translation.x as f64, translation.y as f64));
        let plot_size = Size::new(rect.width() as f64, rect.height() as f64);
        let (x, y) = pan_bounds(source.x_bounds(), source.y_bounds(), delta, plot_size);
        trace!(dx = delta.width, dy = delta.height, "pan");
        source.set_x_bounds(x);
        source.set_y_bounds(y);
        self.transform = self.transform.and_then(|_| Transform::new(x, y, rect));
        true
    }

    pub(crate) fn release<D>(&mut self, pos: ScreenPoint, source: &D) -> Release
    where
        D: AxisGraphDataSource + ?Sized,
    {
        let Some(press) = self.press.take() else {
            return Release::None;
        };
        self.drag.end();
        if press.active {
            return Release::Drag;
        }

        let (Some(transform), Some(rect)) = (self.transform, self.plot_rect) else {
            return Release::Missed;
        };
        if !rect.contains(pos) {
            return Release::Missed;
        }
        let location = transform.screen_to_data(pos);
        match nearest_named_point(source.named_points(), location) {
            Some(index) => {
                debug!(
                    index,
                    name = %source.named_points()[index].name,
                    x = location.x,
                    y = location.y,
                    "named point selected"
                );
                self.selected = Some(index);
                Release::Selected(index)
            }
            None => Release::Missed,
        }
    }

    /// Handle a scroll step as a magnification gesture; returns true when the
    /// bounds changed.
    pub(crate) fn magnify<D>(
        &mut self,
        pos: ScreenPoint,
        scroll_pixels: f32,
        source: &mut D,
        config: &GraphViewConfig,
    ) -> bool
    where
        D: AxisGraphDataSource + ?Sized,
    {
        if scroll_pixels.abs() < 0.01 {
            return false;
        }
        let factor = self
            .magnification
            .update(magnification_from_scroll(scroll_pixels));
        if !config.magnification_zoom {
            trace!(
                magnification = self.magnification.magnification(),
                "magnification ignored"
            );
            return false;
        }
        let (Some(transform), Some(rect)) = (self.transform, self.plot_rect) else {
            return false;
        };
        let center = transform.screen_to_data(pos);
        let (x, y) = zoom_bounds(source.x_bounds(), source.y_bounds(), center, factor);
        source.set_x_bounds(x);
        source.set_y_bounds(y);
        self.transform = Transform::new(x, y, rect);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::ApproxTextMeasurer;
    use crate::datasource::{AxisSpec, GraphData, NamedPoint};
    use crate::geom::Point;
    use crate::scene::build_scene;
    use crate::view::Range;

    fn data() -> GraphData {
        GraphData::new(
            AxisSpec::new("x", Range::new(0.0, 6.0), 6),
            AxisSpec::new("y", Range::new(0.0, 4.0), 4),
        )
        .with_named_point(NamedPoint::new(Point::new(1.0, 1.0), "a"))
        .with_named_point(NamedPoint::new(Point::new(5.0, 3.0), "b"))
    }

    // Plot rect is 600 x 400 pixels starting at (34, 17).
    fn state_for(data: &GraphData, config: &GraphViewConfig) -> GraphUiState {
        let mut state = GraphUiState::default();
        let bounds = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(651.0, 451.0));
        let scene = build_scene(
            data,
            bounds,
            None,
            config,
            &mut state.formats,
            &ApproxTextMeasurer::default(),
        );
        state.apply_scene(&scene);
        state
    }

    #[test]
    fn small_moves_stay_a_tap() {
        let config = GraphViewConfig::default();
        let mut data = data();
        let mut state = state_for(&data, &config);
        // Data point (5, 3) sits at (534, 117).
        state.press(ScreenPoint::new(530.0, 120.0));
        assert!(!state.drag_to(ScreenPoint::new(531.0, 121.0), &mut data, &config));
        assert_eq!(state.release(ScreenPoint::new(531.0, 121.0), &data), Release::Selected(1));
        assert_eq!(state.selected, Some(1));
        assert_eq!(data.x_bounds(), Range::new(0.0, 6.0));
    }

    #[test]
    fn drag_pans_incrementally() {
        let config = GraphViewConfig::default();
        let mut data = data();
        let mut state = state_for(&data, &config);
        state.press(ScreenPoint::new(300.0, 200.0));
        // 100 px right is one X unit; 100 px down is one Y unit.
        assert!(state.drag_to(ScreenPoint::new(400.0, 200.0), &mut data, &config));
        assert_eq!(data.x_bounds(), Range::new(-1.0, 5.0));
        assert!(state.drag_to(ScreenPoint::new(400.0, 300.0), &mut data, &config));
        assert_eq!(data.x_bounds(), Range::new(-1.0, 5.0));
        assert_eq!(data.y_bounds(), Range::new(1.0, 5.0));
        assert_eq!(state.release(ScreenPoint::new(400.0, 300.0), &data), Release::Drag);
        assert_eq!(state.selected, None);
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn tap_outside_plot_area_is_ignored() {
        let config = GraphViewConfig::default();
        let data = data();
        let mut state = state_for(&data, &config);
        // Label band left of the Y axis.
        state.press(ScreenPoint::new(20.0, 300.0));
        assert_eq!(state.release(ScreenPoint::new(20.0, 300.0), &data), Release::Missed);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn move_after_release_outside_does_not_pan() {
        let config = GraphViewConfig::default();
        let mut data = data();
        let mut state = state_for(&data, &config);
        state.press(ScreenPoint::new(300.0, 200.0));
        assert!(state.drag_to(ScreenPoint::new(400.0, 200.0), &mut data, &config));
        assert_eq!(data.x_bounds(), Range::new(-1.0, 5.0));

        assert!(state.cancel_press());
        assert!(!state.drag.is_dragging());
        assert!(!state.drag_to(ScreenPoint::new(410.0, 200.0), &mut data, &config));
        assert_eq!(data.x_bounds(), Range::new(-1.0, 5.0));
        assert_eq!(state.release(ScreenPoint::new(410.0, 200.0), &data), Release::None);
        assert!(!state.cancel_press());
    }

    #[test]
    fn tap_without_named_points_is_noop() {
        let config = GraphViewConfig::default();
        let mut data = data();
        data.named_points.clear();
        let mut state = state_for(&data, &config);
        state.selected = Some(0);
        state.press(ScreenPoint::new(100.0, 100.0));
        assert_eq!(state.release(ScreenPoint::new(100.0, 100.0), &data), Release::Missed);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn magnification_is_stubbed_by_default() {
        let config = GraphViewConfig::default();
        let mut data = data();
        let mut state = state_for(&data, &config);
        assert!(!state.magnify(ScreenPoint::new(334.0, 217.0), 50.0, &mut data, &config));
        assert_eq!(data.x_bounds(), Range::new(0.0, 6.0));
        assert!(state.magnification.magnification() > 1.0);

        let zooming = GraphViewConfig {
            magnification_zoom: true,
            ..GraphViewConfig::default()
        };
        assert!(state.magnify(ScreenPoint::new(334.0, 217.0), 50.0, &mut data, &zooming));
        assert!(data.x_bounds().width() < 6.0);

        state.press(ScreenPoint::new(334.0, 217.0));
        assert_eq!(state.magnification.magnification(), 1.0);
    }
}
