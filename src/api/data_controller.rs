use std::time::Duration;

use tracing::debug;

use crate::animation::AnimationDuration;
use crate::core::{Animatable, ChartData};
use crate::extensions::{AnimationKind, ChartEvent};
use crate::interaction::GestureHandler;

use super::ChartView;

impl ChartView {
    /// Replaces the chart data and resets both viewports to its extent.
    ///
    /// With viewport calculation disabled the maximum viewport is kept and
    /// only the current viewport is re-fitted inside it.
    ///
    /// Changing chart family swaps the gesture handler; rotation, selection
    /// and running animations are cleared.
    pub fn set_data(&mut self, data: ChartData) {
        let kind_changed = data.kind() != self.data.kind();
        self.cancel_data_animation();
        self.stop_navigation();
        self.data = data;
        if kind_changed {
            self.gestures = GestureHandler::for_kind(self.data.kind(), self.config.gesture_settings());
            if self.rotation_degrees != 0.0 {
                self.rotation_degrees = 0.0;
                self.emit_event(ChartEvent::RotationChanged { degrees: 0.0 });
            }
        }
        self.clear_selection();
        debug!(kind = ?self.data.kind(), "chart data replaced");
        if self.config.viewport_calculation_enabled {
            self.reset_viewports();
        } else {
            let constrained = self
                .computator
                .constrain_viewport(self.computator.current_viewport());
            self.commit_viewport(constrained);
        }
    }

    /// Starts interpolating every staged value target from progress 0.
    ///
    /// A running data animation is cancelled first. Progress is measured from
    /// each value's origin, so re-stage targets with `set_target` to continue
    /// from the values currently shown.
    pub fn start_data_animation(&mut self, duration: AnimationDuration, now: Duration) {
        if self.data_animator.start(duration, now) {
            self.emit_animation_cancelled(AnimationKind::Data);
        }
        self.emit_event(ChartEvent::AnimationStarted {
            kind: AnimationKind::Data,
        });
    }

    /// Stops the data animation, leaving values at the last applied
    /// progress. Returns whether anything was running.
    pub fn cancel_data_animation(&mut self) -> bool {
        let cancelled = self.data_animator.cancel();
        if cancelled {
            self.emit_animation_cancelled(AnimationKind::Data);
        }
        cancelled
    }

    /// Snaps every value to its target; repeated calls are no-ops on the
    /// values. Returns whether an animation was running.
    pub fn finish_data_animation(&mut self) -> bool {
        let was_running = self.data_animator.cancel();
        self.data.finish();
        if was_running {
            debug!("data animation finished early");
            self.emit_event(ChartEvent::AnimationFinished {
                kind: AnimationKind::Data,
            });
        }
        was_running
    }

    #[must_use]
    pub fn data_animation_progress(&self) -> f32 {
        self.data_animator.progress()
    }
}
