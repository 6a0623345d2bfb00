//! Time-driven transitions for the viewport and for data values.
//!
//! Both animators are advanced by the host frame clock: callers pass a
//! monotonic `now` to `start` and `tick`, and no animator reads a wall clock.

mod data_animator;
mod viewport_animator;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use data_animator::{DataAnimator, DataAnimationStep};
pub use viewport_animator::{ViewportAnimationStep, ViewportAnimator};

pub const DEFAULT_VIEWPORT_ANIMATION_DURATION: Duration = Duration::from_millis(300);
pub const DEFAULT_DATA_ANIMATION_DURATION: Duration = Duration::from_millis(500);

/// Requested animation length; `Default` resolves to the animator's
/// configured duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationDuration {
    #[default]
    Default,
    Custom(Duration),
}

impl AnimationDuration {
    #[must_use]
    pub fn resolve(self, default: Duration) -> Duration {
        match self {
            Self::Default => default,
            Self::Custom(duration) => duration,
        }
    }
}

impl From<Duration> for AnimationDuration {
    fn from(duration: Duration) -> Self {
        Self::Custom(duration)
    }
}

/// Maps linear time fraction to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOutCubic,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Elapsed fraction of `duration` at `now`, clamped to `[0, 1]`.
/// A zero duration is complete immediately.
pub(crate) fn elapsed_fraction(started_at: Duration, duration: Duration, now: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started_at);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
}
