use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, ScrollWheelEvent, Window, canvas,
    div, px,
};

use crate::config::GraphViewConfig;
use crate::datasource::AxisGraphDataSource;
use crate::render::Color;
use crate::scene::build_scene;

use super::geometry::{screen_point, screen_rect};
use super::paint::{paint_scene, to_hsla};
use super::state::{GraphUiState, Release};
use super::text::GpuiTextMeasurer;

/// A GPUI view that renders an axis graph for a data source.
///
/// Dragging pans the axis bounds, which are written back to the data source.
/// Tapping selects the closest named point and reveals its name. Scrolling
/// is treated as a magnification gesture, which only zooms when
/// [`GraphViewConfig::magnification_zoom`] is set.
pub struct GpuiAxisGraphView<D> {
    source: Arc<RwLock<D>>,
    state: Arc<RwLock<GraphUiState>>,
    config: GraphViewConfig,
}

impl<D: AxisGraphDataSource + 'static> GpuiAxisGraphView<D> {
    /// Create a view with the default [`GraphViewConfig`].
    pub fn new(source: D) -> Self {
        Self::with_config(source, GraphViewConfig::default())
    }

    /// Create a view with a custom configuration.
    pub fn with_config(source: D, config: GraphViewConfig) -> Self {
        Self {
            source: Arc::new(RwLock::new(source)),
            state: Arc::new(RwLock::new(GraphUiState::default())),
            config,
        }
    }

    /// Get a handle for reading or mutating the data source.
    ///
    /// This is useful for updating points from async tasks; call
    /// `notify` on the view entity afterwards to redraw.
    pub fn source_handle(&self) -> GraphHandle<D> {
        GraphHandle {
            source: Arc::clone(&self.source),
        }
    }

    /// Index of the currently selected named point.
    pub fn selected_named_point(&self) -> Option<usize> {
        self.state.read().expect("graph state lock").selected
    }

    /// Clear the named point selection.
    pub fn clear_selection(&mut self, cx: &mut Context<Self>) {
        self.state.write().expect("graph state lock").selected = None;
        cx.notify();
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let pos = screen_point(ev.position);
        self.state.write().expect("graph state lock").press(pos);
        cx.notify();
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let pos = screen_point(ev.position);
        let mut state = self.state.write().expect("graph state lock");
        if state.press.is_none() {
            return;
        }
        if ev.pressed_button != Some(MouseButton::Left) {
            // Released while the pointer was outside the view.
            state.cancel_press();
            return;
        }
        let mut source = self.source.write().expect("data source lock");
        if state.drag_to(pos, &mut *source, &self.config) {
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let pos = screen_point(ev.position);
        let mut state = self.state.write().expect("graph state lock");
        let source = self.source.read().expect("data source lock");
        if matches!(
            state.release(pos, &*source),
            Release::Drag | Release::Selected(_)
        ) {
            cx.notify();
        }
    }

    fn on_mouse_up_out(&mut self, cx: &mut Context<Self>) {
        if self
            .state
            .write()
            .expect("graph state lock")
            .cancel_press()
        {
            cx.notify();
        }
    }

    fn on_scroll(&mut self, ev: &ScrollWheelEvent, cx: &mut Context<Self>) {
        let pos = screen_point(ev.position);
        let delta = ev.delta.pixel_delta(px(16.0));
        let mut state = self.state.write().expect("graph state lock");
        let mut source = self.source.write().expect("data source lock");
        if state.magnify(pos, f32::from(delta.y), &mut *source, &self.config) {
            cx.notify();
        }
    }
}

impl<D: AxisGraphDataSource + 'static> Render for GpuiAxisGraphView<D> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let min_size = px(config.min_plot_size + config.padding * 3.0);

        div()
            .size_full()
            .min_w(min_size)
            .min_h(min_size)
            .bg(to_hsla(Color::WHITE))
            .child(
                canvas(
                    move |bounds, window, _| {
                        let source = source.read().expect("data source lock");
                        let mut state = state.write().expect("graph state lock");
                        let measurer = GpuiTextMeasurer::new(window);
                        let selected = state.selected;
                        let scene = build_scene(
                            &*source,
                            screen_rect(bounds),
                            selected,
                            &config,
                            &mut state.formats,
                            &measurer,
                        );
                        state.apply_scene(&scene);
                        scene
                    },
                    move |_, scene, window, cx| {
                        paint_scene(&scene, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, _, _, cx| {
                    this.on_mouse_up_out(cx);
                }),
            )
            .on_scroll_wheel(cx.listener(|this, ev, _, cx| {
                this.on_scroll(ev, cx);
            }))
    }
}

/// A handle to the data source held inside a `GpuiAxisGraphView`.
///
/// The handle clones cheaply and can be moved into async tasks.
pub struct GraphHandle<D> {
    source: Arc<RwLock<D>>,
}

impl<D> Clone for GraphHandle<D> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<D> GraphHandle<D> {
    /// Read the data source.
    ///
    /// The source is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        let source = self.source.read().expect("data source lock");
        f(&source)
    }

    /// Mutate the data source.
    ///
    /// The source is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut source = self.source.write().expect("data source lock");
        f(&mut source)
    }
}
