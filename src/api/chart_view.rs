use indexmap::IndexMap;
use tracing::debug;

use crate::animation::{DataAnimator, ViewportAnimator};
use crate::core::{
    AxisStops, ChartComputator, ChartData, ChartKind, PixelRect, SelectedValue, Viewport,
};
use crate::error::ChartResult;
use crate::extensions::ChartListener;
use crate::interaction::{GestureHandler, GestureState, ZoomType};

use super::validation::validate_view_config;
use super::{AxisLabelMetrics, ChartViewConfig};

/// Pressed and committed selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct SelectionState {
    /// Value under a pointer that is still down.
    pub(super) touched: Option<SelectedValue>,
    /// Value kept after release when selection mode is on, or set
    /// programmatically.
    pub(super) selected: Option<SelectedValue>,
}

/// Interactive chart view facade consumed by host applications.
///
/// `ChartView` owns the coordinate transform, the chart data, the gesture
/// handler for the chart family and both animators. Hosts feed it pointer
/// events and frame ticks; drawing code reads projections, ticks and the
/// selection back out.
pub struct ChartView {
    pub(super) config: ChartViewConfig,
    pub(super) computator: ChartComputator,
    pub(super) data: ChartData,
    pub(super) gestures: GestureHandler,
    pub(super) viewport_animator: ViewportAnimator,
    pub(super) data_animator: DataAnimator,
    pub(super) rotation_degrees: f32,
    pub(super) selection: SelectionState,
    pub(super) axis_labels: AxisLabelMetrics,
    pub(super) horizontal_stops: AxisStops,
    pub(super) vertical_stops: AxisStops,
    /// Registration order is dispatch order.
    pub(super) listeners: IndexMap<String, Box<dyn ChartListener>>,
}

impl ChartView {
    pub fn new(data: ChartData, config: ChartViewConfig) -> ChartResult<Self> {
        let config = validate_view_config(config)?;
        let mut computator = ChartComputator::new();
        computator.set_max_zoom(config.max_zoom)?;

        let mut view = Self {
            gestures: GestureHandler::for_kind(data.kind(), config.gesture_settings()),
            viewport_animator: ViewportAnimator::new(config.viewport_animation_duration()),
            data_animator: DataAnimator::new(config.data_animation_duration()),
            config,
            computator,
            data,
            rotation_degrees: 0.0,
            selection: SelectionState::default(),
            axis_labels: AxisLabelMetrics::default(),
            horizontal_stops: AxisStops::new(),
            vertical_stops: AxisStops::new(),
            listeners: IndexMap::new(),
        };
        view.reset_viewports();
        debug!(kind = ?view.kind(), "chart view created");
        Ok(view)
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.data.kind()
    }

    #[must_use]
    pub fn config(&self) -> ChartViewConfig {
        self.config
    }

    /// Replaces the whole configuration after validation.
    pub fn set_config(&mut self, config: ChartViewConfig) -> ChartResult<()> {
        let config = validate_view_config(config)?;
        self.computator.set_max_zoom(config.max_zoom)?;
        self.viewport_animator
            .set_default_duration(config.viewport_animation_duration());
        self.data_animator
            .set_default_duration(config.data_animation_duration());
        self.gestures.set_settings(config.gesture_settings());
        self.config = config;
        let constrained = self
            .computator
            .constrain_viewport(self.computator.current_viewport());
        self.commit_viewport(constrained);
        debug!("view config replaced");
        Ok(())
    }

    pub fn set_max_zoom(&mut self, max_zoom: f32) -> ChartResult<()> {
        self.set_config(self.config.with_max_zoom(max_zoom))
    }

    pub fn set_zoom_type(&mut self, zoom_type: ZoomType) {
        self.config.zoom_type = zoom_type;
        self.gestures.set_settings(self.config.gesture_settings());
    }

    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.config.zoom_enabled = enabled;
        self.gestures.set_settings(self.config.gesture_settings());
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.config.scroll_enabled = enabled;
        self.gestures.set_settings(self.config.gesture_settings());
    }

    pub fn set_viewport_calculation_enabled(&mut self, enabled: bool) {
        self.config.viewport_calculation_enabled = enabled;
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.config.interactive = interactive;
    }

    pub fn set_value_touch_enabled(&mut self, enabled: bool) {
        self.config.value_touch_enabled = enabled;
        if !enabled {
            self.selection.touched = None;
        }
    }

    pub fn set_value_selection_enabled(&mut self, enabled: bool) {
        self.config.value_selection_enabled = enabled;
    }

    /// Read-only access to the coordinate transform for projections.
    #[must_use]
    pub fn computator(&self) -> &ChartComputator {
        &self.computator
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    /// Mutable data access for staging animation targets.
    ///
    /// Call [`ChartView::reset_viewports`] afterwards if the extent changed.
    pub fn data_mut(&mut self) -> &mut ChartData {
        &mut self.data
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.computator.current_viewport()
    }

    #[must_use]
    pub fn max_viewport(&self) -> Viewport {
        self.computator.max_viewport()
    }

    #[must_use]
    pub fn zoom_level(&self) -> f32 {
        self.computator.zoom_level()
    }

    /// Rotation of radial charts in degrees, always in `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation_degrees
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    #[must_use]
    pub fn content_rect(&self) -> PixelRect {
        self.computator.content_rect()
    }

    #[must_use]
    pub fn is_viewport_animation_running(&self) -> bool {
        self.viewport_animator.is_running()
    }

    #[must_use]
    pub fn is_data_animation_running(&self) -> bool {
        self.data_animator.is_running()
    }
}
