use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_MAX_ZOOM;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{GestureConfig, GestureSettings, ZoomType};

pub const DEFAULT_TOUCH_TOLERANCE_PX: f32 = 12.0;

/// Public view configuration.
///
/// Serializable so hosts can persist chart behavior; every field has a
/// default, so partial JSON documents load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    #[serde(default)]
    pub zoom_type: ZoomType,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,
    /// When `false` pointer input is ignored entirely.
    #[serde(default = "default_true")]
    pub interactive: bool,
    #[serde(default = "default_true")]
    pub zoom_enabled: bool,
    #[serde(default = "default_true")]
    pub scroll_enabled: bool,
    #[serde(default = "default_true")]
    pub value_touch_enabled: bool,
    /// Keep the tapped value selected after release instead of a transient
    /// highlight.
    #[serde(default)]
    pub value_selection_enabled: bool,
    /// Recompute the maximum viewport from data on every `set_data`. When
    /// `false` a host-set maximum viewport survives data replacement.
    #[serde(default = "default_true")]
    pub viewport_calculation_enabled: bool,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default = "default_viewport_animation_duration_ms")]
    pub viewport_animation_duration_ms: u64,
    #[serde(default = "default_data_animation_duration_ms")]
    pub data_animation_duration_ms: u64,
    #[serde(default = "default_touch_tolerance_px")]
    pub touch_tolerance_px: f32,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            zoom_type: ZoomType::default(),
            max_zoom: default_max_zoom(),
            interactive: true,
            zoom_enabled: true,
            scroll_enabled: true,
            value_touch_enabled: true,
            value_selection_enabled: false,
            viewport_calculation_enabled: true,
            gestures: GestureConfig::default(),
            viewport_animation_duration_ms: default_viewport_animation_duration_ms(),
            data_animation_duration_ms: default_data_animation_duration_ms(),
            touch_tolerance_px: default_touch_tolerance_px(),
        }
    }
}

impl ChartViewConfig {
    #[must_use]
    pub fn with_zoom_type(mut self, zoom_type: ZoomType) -> Self {
        self.zoom_type = zoom_type;
        self
    }

    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: f32) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    #[must_use]
    pub fn with_value_selection(mut self, enabled: bool) -> Self {
        self.value_selection_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_viewport_calculation(mut self, enabled: bool) -> Self {
        self.viewport_calculation_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    #[must_use]
    pub fn with_animation_durations(mut self, viewport: Duration, data: Duration) -> Self {
        self.viewport_animation_duration_ms = viewport.as_millis() as u64;
        self.data_animation_duration_ms = data.as_millis() as u64;
        self
    }

    #[must_use]
    pub fn viewport_animation_duration(&self) -> Duration {
        Duration::from_millis(self.viewport_animation_duration_ms)
    }

    #[must_use]
    pub fn data_animation_duration(&self) -> Duration {
        Duration::from_millis(self.data_animation_duration_ms)
    }

    #[must_use]
    pub(crate) fn gesture_settings(&self) -> GestureSettings {
        GestureSettings {
            zoom_type: self.zoom_type,
            zoom_enabled: self.zoom_enabled,
            scroll_enabled: self.scroll_enabled,
            config: self.gestures,
        }
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize view config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse view config: {e}")))
    }
}

fn default_true() -> bool {
    true
}

fn default_max_zoom() -> f32 {
    DEFAULT_MAX_ZOOM
}

fn default_viewport_animation_duration_ms() -> u64 {
    300
}

fn default_data_animation_duration_ms() -> u64 {
    500
}

fn default_touch_tolerance_px() -> f32 {
    DEFAULT_TOUCH_TOLERANCE_PX
}
