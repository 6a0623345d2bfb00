use std::time::Duration;

use tracing::{debug, trace};

use crate::animation::{AnimationDuration, DEFAULT_DATA_ANIMATION_DURATION, elapsed_fraction};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    started_at: Duration,
    duration: Duration,
}

/// Progress to apply to the chart data this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataAnimationStep {
    pub progress: f32,
    pub finished: bool,
}

/// Drives a progress scalar from 0 to 1 that data values consume through
/// their `update` hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataAnimator {
    running: Option<Run>,
    progress: f32,
    default_duration: Duration,
}

impl Default for DataAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_ANIMATION_DURATION)
    }
}

impl DataAnimator {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            running: None,
            progress: 0.0,
            default_duration,
        }
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Last progress emitted, kept after cancellation.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Restarts from progress 0; returns whether a run was cancelled.
    pub fn start(&mut self, duration: AnimationDuration, now: Duration) -> bool {
        let replaced = self.running.take().is_some();
        let duration = duration.resolve(self.default_duration);
        self.running = Some(Run {
            started_at: now,
            duration,
        });
        self.progress = 0.0;
        debug!(duration_ms = duration.as_millis() as u64, "data animation started");
        replaced
    }

    pub fn tick(&mut self, now: Duration) -> Option<DataAnimationStep> {
        let run = self.running?;
        let progress = elapsed_fraction(run.started_at, run.duration, now);
        self.progress = progress;
        let finished = progress >= 1.0;
        if finished {
            self.running = None;
            debug!("data animation finished");
        } else {
            trace!(progress, "data animation step");
        }
        Some(DataAnimationStep { progress, finished })
    }

    /// Stops without snapping values; returns whether a run was active.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.running.take().is_some();
        if cancelled {
            debug!(progress = self.progress, "data animation cancelled");
        }
        cancelled
    }
}
