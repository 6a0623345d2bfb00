use std::time::Duration;

use tracing::{debug, trace};

use crate::animation::{
    AnimationDuration, DEFAULT_VIEWPORT_ANIMATION_DURATION, Easing, elapsed_fraction,
};
use crate::core::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    start: Viewport,
    target: Viewport,
    started_at: Duration,
    duration: Duration,
}

/// Interpolated viewport for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportAnimationStep {
    pub viewport: Viewport,
    pub fraction: f32,
    /// On the finishing step `viewport` equals the target exactly.
    pub finished: bool,
}

/// Edge-wise interpolation from a start viewport to a target viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportAnimator {
    running: Option<Transition>,
    default_duration: Duration,
    easing: Easing,
}

impl Default for ViewportAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_ANIMATION_DURATION)
    }
}

impl ViewportAnimator {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            running: None,
            default_duration,
            easing: Easing::Linear,
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
    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<Viewport> {
        self.running.map(|transition| transition.target)
    }

    /// Starts a transition, replacing any running one. Returns whether a
    /// previous transition was cancelled.
    pub fn start(
        &mut self,
        start: Viewport,
        target: Viewport,
        duration: AnimationDuration,
        now: Duration,
    ) -> bool {
        let replaced = self.cancel();
        let duration = duration.resolve(self.default_duration);
        self.running = Some(Transition {
            start,
            target,
            started_at: now,
            duration,
        });
        debug!(
            from = ?start,
            to = ?target,
            duration_ms = duration.as_millis() as u64,
            "viewport animation started"
        );
        replaced
    }

    /// Interpolates at `now`; `None` when idle.
    pub fn tick(&mut self, now: Duration) -> Option<ViewportAnimationStep> {
        let transition = self.running?;
        let fraction = elapsed_fraction(transition.started_at, transition.duration, now);
        if fraction >= 1.0 {
            self.running = None;
            debug!(viewport = ?transition.target, "viewport animation finished");
            return Some(ViewportAnimationStep {
                viewport: transition.target,
                fraction: 1.0,
                finished: true,
            });
        }

        let viewport = transition
            .start
            .lerp(transition.target, self.easing.apply(fraction));
        trace!(fraction, ?viewport, "viewport animation step");
        Some(ViewportAnimationStep {
            viewport,
            fraction,
            finished: false,
        })
    }

    /// Stops the running transition, leaving the last applied viewport in
    /// place. Returns whether anything was running.
    pub fn cancel(&mut self) -> bool {
        self.running.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ViewportAnimator;
    use crate::animation::AnimationDuration;
    use crate::core::Viewport;

    #[test]
    fn restart_replaces_running_transition() {
        let mut animator = ViewportAnimator::default();
        let first = Viewport::new(0.0, 10.0, 10.0, 0.0);
        let second = Viewport::new(5.0, 15.0, 15.0, 5.0);

        assert!(!animator.start(Viewport::UNIT, first, AnimationDuration::Default, Duration::ZERO));
        assert!(animator.start(first, second, AnimationDuration::Default, Duration::ZERO));
        assert_eq!(animator.target(), Some(second));
    }

    #[test]
    fn tick_after_finish_is_idle() {
        let mut animator = ViewportAnimator::default();
        let target = Viewport::new(1.0, 2.0, 3.0, 0.0);
        animator.start(Viewport::UNIT, target, AnimationDuration::Custom(Duration::ZERO), Duration::ZERO);

        let step = animator.tick(Duration::ZERO).expect("finishing step");
        assert!(step.finished);
        assert_eq!(step.viewport, target);
        assert_eq!(animator.tick(Duration::from_millis(1)), None);
        assert!(!animator.cancel());
    }
}
