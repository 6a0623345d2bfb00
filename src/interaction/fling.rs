use std::time::Duration;

use crate::interaction::FlingConfig;

/// Ballistic scroll with exponential velocity decay.
///
/// Velocities are in units per second (pixels for pans, degrees for
/// rotation). Each step displaces by `velocity * dt` and then decays the
/// velocity by `decay_per_second^dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticFling {
    velocity_x: f32,
    velocity_y: f32,
    last_time: Duration,
    config: FlingConfig,
}

impl KineticFling {
    #[must_use]
    pub fn start(velocity_x: f32, velocity_y: f32, time: Duration, config: FlingConfig) -> Self {
        Self {
            velocity_x,
            velocity_y,
            last_time: time,
            config,
        }
    }

    #[must_use]
    pub fn velocity(&self) -> (f32, f32) {
        (self.velocity_x, self.velocity_y)
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity_x.hypot(self.velocity_y)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        !(self.speed() >= self.config.stop_velocity_px_per_sec)
    }

    /// Zeroes horizontal velocity, used when the scroll hits a bound.
    pub fn stop_x(&mut self) {
        self.velocity_x = 0.0;
    }

    pub fn stop_y(&mut self) {
        self.velocity_y = 0.0;
    }

    /// Advances to `now` and returns the displacement since the last step.
    ///
    /// Returns `None` once the speed has fallen below the stop threshold.
    /// Timestamps earlier than the previous step yield a zero displacement.
    pub fn step(&mut self, now: Duration) -> Option<(f32, f32)> {
        if self.is_finished() {
            return None;
        }
        let dt = now.saturating_sub(self.last_time).as_secs_f32();
        self.last_time = self.last_time.max(now);

        let displacement = (self.velocity_x * dt, self.velocity_y * dt);
        let decay = self.config.decay_per_second.powf(dt);
        self.velocity_x *= decay;
        self.velocity_y *= decay;
        Some(displacement)
    }
}
