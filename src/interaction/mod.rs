//! Gesture state machine: pointer events in, viewport or rotation changes out.

mod cartesian;
mod fling;
mod handler;
mod radial;
mod velocity;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

pub use cartesian::CartesianGestureHandler;
pub(crate) use cartesian::zoom_around_focus;
pub use fling::KineticFling;
pub use handler::{GestureHandler, GestureOutcome};
pub use radial::{RadialGestureHandler, vector_to_scalar_scroll};
pub use velocity::VelocityTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureState {
    Idle,
    /// Pointer is down but has not travelled past the touch slop yet.
    Pending,
    Panning,
    Flinging,
    PinchZooming,
    /// Radial charts only.
    Rotating,
}

/// Axes on which zoom is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoomType {
    Horizontal,
    Vertical,
    #[default]
    HorizontalAndVertical,
}

impl ZoomType {
    /// Whether a zoom on `requested` axes is permitted by `self`.
    #[must_use]
    pub fn allows(self, requested: ZoomType) -> bool {
        self == ZoomType::HorizontalAndVertical || self == requested
    }

    #[must_use]
    pub fn zooms_horizontally(self) -> bool {
        matches!(self, Self::Horizontal | Self::HorizontalAndVertical)
    }

    #[must_use]
    pub fn zooms_vertically(self) -> bool {
        matches!(self, Self::Vertical | Self::HorizontalAndVertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Multi-touch frame supplied by the host while two or more pointers are down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchDelta {
    /// Current pointer span divided by the previous span; `> 1` spreads.
    pub scale_factor: f32,
}

/// Classified pointer input.
///
/// `position` is the primary pointer, or the pinch focal point when `pinch`
/// is present. `time` is a monotonic timestamp from the host frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: PixelPoint,
    pub time: Duration,
    #[serde(default)]
    pub pinch: Option<PinchDelta>,
}

impl PointerEvent {
    #[must_use]
    pub fn down(x: f32, y: f32, time: Duration) -> Self {
        Self::single(PointerPhase::Down, x, y, time)
    }

    #[must_use]
    pub fn moved(x: f32, y: f32, time: Duration) -> Self {
        Self::single(PointerPhase::Move, x, y, time)
    }

    #[must_use]
    pub fn up(x: f32, y: f32, time: Duration) -> Self {
        Self::single(PointerPhase::Up, x, y, time)
    }

    #[must_use]
    pub fn cancel(time: Duration) -> Self {
        Self::single(PointerPhase::Cancel, 0.0, 0.0, time)
    }

    #[must_use]
    pub fn pinch(focus_x: f32, focus_y: f32, scale_factor: f32, time: Duration) -> Self {
        Self {
            phase: PointerPhase::Move,
            position: PixelPoint::new(focus_x, focus_y),
            time,
            pinch: Some(PinchDelta { scale_factor }),
        }
    }

    fn single(phase: PointerPhase, x: f32, y: f32, time: Duration) -> Self {
        Self {
            phase,
            position: PixelPoint::new(x, y),
            time,
            pinch: None,
        }
    }
}

/// Deceleration of ballistic scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlingConfig {
    /// Multiplicative velocity decay per second.
    pub decay_per_second: f32,
    /// Fling stops when its speed drops below this threshold.
    pub stop_velocity_px_per_sec: f32,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.05,
            stop_velocity_px_per_sec: 20.0,
        }
    }
}

/// Thresholds used to classify raw pointer sequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub touch_slop_px: f32,
    pub double_tap_timeout_ms: u64,
    pub double_tap_slop_px: f32,
    /// Zoom multiplier applied by a double tap.
    pub double_tap_zoom_factor: f32,
    pub min_fling_velocity_px_per_sec: f32,
    pub max_fling_velocity_px_per_sec: f32,
    pub fling: FlingConfig,
    /// Divides angular scroll on radial charts so rotation trails the finger.
    pub rotation_downscale: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop_px: 8.0,
            double_tap_timeout_ms: 300,
            double_tap_slop_px: 32.0,
            double_tap_zoom_factor: 2.0,
            min_fling_velocity_px_per_sec: 50.0,
            max_fling_velocity_px_per_sec: 8_000.0,
            fling: FlingConfig::default(),
            rotation_downscale: 4.0,
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn double_tap_timeout(&self) -> Duration {
        Duration::from_millis(self.double_tap_timeout_ms)
    }
}

/// Gesture permissions and thresholds shared by both handler variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSettings {
    pub zoom_type: ZoomType,
    pub zoom_enabled: bool,
    /// Pans cartesian charts; rotates radial charts.
    pub scroll_enabled: bool,
    pub config: GestureConfig,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            zoom_type: ZoomType::default(),
            zoom_enabled: true,
            scroll_enabled: true,
            config: GestureConfig::default(),
        }
    }
}
