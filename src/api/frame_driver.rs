use std::time::Duration;

use tracing::{trace, warn};

use crate::core::Animatable;
use crate::error::ChartResult;
use crate::extensions::{AnimationKind, ChartEvent};

use super::ChartView;

impl ChartView {
    /// Advances flings and animations to `now`.
    ///
    /// Gesture-driven updates are applied before animation updates. Returns
    /// whether another frame is needed. With invalid content geometry no
    /// state is advanced and `false` is returned.
    pub fn on_frame(&mut self, now: Duration) -> ChartResult<bool> {
        if !self.computator.has_valid_geometry() {
            warn!("frame skipped: content geometry is invalid");
            return Ok(false);
        }
        let mut needs_frame = false;

        let outcome =
            self.gestures
                .compute_scroll(now, &mut self.computator, &mut self.rotation_degrees)?;
        if outcome.viewport_changed {
            self.emit_viewport_changed();
        }
        if outcome.rotation_changed {
            let degrees = self.rotation_degrees;
            self.emit_event(ChartEvent::RotationChanged { degrees });
        }
        needs_frame |= outcome.fling_active;

        if let Some(step) = self.viewport_animator.tick(now) {
            // Bounds may have shrunk since the target was fitted.
            let viewport = self.computator.constrain_viewport(step.viewport);
            self.commit_viewport(viewport);
            if step.finished {
                self.emit_event(ChartEvent::AnimationFinished {
                    kind: AnimationKind::Viewport,
                });
            } else {
                needs_frame = true;
            }
        }

        if let Some(step) = self.data_animator.tick(now) {
            if step.finished {
                self.data.finish();
                self.emit_event(ChartEvent::AnimationFinished {
                    kind: AnimationKind::Data,
                });
            } else {
                self.data.update(step.progress);
                needs_frame = true;
            }
        }

        trace!(needs_frame, "frame advanced");
        Ok(needs_frame)
    }
}
