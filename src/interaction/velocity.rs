use std::time::Duration;

use smallvec::SmallVec;

use crate::core::PixelPoint;

/// Only samples this recent contribute to the release velocity.
const HORIZON: Duration = Duration::from_millis(100);
const MAX_SAMPLES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    position: PixelPoint,
    time: Duration,
}

/// Estimates pointer velocity from the most recent movement samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; MAX_SAMPLES]>,
}

impl VelocityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn add(&mut self, position: PixelPoint, time: Duration) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(Sample { position, time });
    }

    /// Velocity in pixels per second over the recent horizon, `(0, 0)` when
    /// fewer than two usable samples exist.
    #[must_use]
    pub fn velocity(&self) -> (f32, f32) {
        let Some(latest) = self.samples.last() else {
            return (0.0, 0.0);
        };
        let oldest = self
            .samples
            .iter()
            .find(|sample| latest.time.saturating_sub(sample.time) <= HORIZON)
            .unwrap_or(latest);

        let elapsed = latest.time.saturating_sub(oldest.time).as_secs_f32();
        if elapsed <= 0.0 {
            return (0.0, 0.0);
        }
        (
            (latest.position.x - oldest.position.x) / elapsed,
            (latest.position.y - oldest.position.y) / elapsed,
        )
    }
}
