use tracing::trace;

use crate::core::Viewport;
use crate::extensions::{AnimationKind, ChartContext, ChartEvent};

use super::ChartView;

impl ChartView {
    pub(super) fn chart_context(&self) -> ChartContext {
        ChartContext {
            kind: self.data.kind(),
            current_viewport: self.computator.current_viewport(),
            max_viewport: self.computator.max_viewport(),
            zoom_level: self.computator.zoom_level(),
            rotation_degrees: self.rotation_degrees,
            gesture_state: self.gestures.state(),
            selected_value: self.selected_value(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let context = self.chart_context();
        trace!(?event, listeners = self.listeners.len(), "dispatching chart event");
        for listener in self.listeners.values_mut() {
            listener.on_event(event, context);
        }
    }

    pub(super) fn emit_viewport_changed(&mut self) {
        let viewport = self.computator.current_viewport();
        self.emit_event(ChartEvent::ViewportChanged { viewport });
    }

    /// Stores `viewport` as current and notifies when it differs.
    pub(super) fn commit_viewport(&mut self, viewport: Viewport) -> bool {
        if self.computator.current_viewport() == viewport {
            return false;
        }
        self.computator.set_current_viewport(Some(viewport));
        self.emit_viewport_changed();
        true
    }

    pub(super) fn emit_animation_cancelled(&mut self, kind: AnimationKind) {
        self.emit_event(ChartEvent::AnimationCancelled { kind });
    }
}
