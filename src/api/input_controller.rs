use tracing::{debug, warn};

use crate::core::{HitTestable, PixelPoint, SelectedValue, TouchProbe};
use crate::error::ChartResult;
use crate::extensions::{AnimationKind, ChartEvent};
use crate::interaction::{PointerEvent, PointerPhase};

use super::ChartView;

impl ChartView {
    /// Single input entry point. Returns whether a redraw is needed.
    ///
    /// Gesture handling runs first; a pan, pinch, rotation or double-tap
    /// zoom cancels any running viewport animation. Value touch then
    /// hit-tests taps.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> ChartResult<bool> {
        if !self.config.interactive {
            return Ok(false);
        }
        if !self.computator.has_valid_geometry() {
            warn!(phase = ?event.phase, "pointer event ignored: content geometry is invalid");
            return Ok(false);
        }

        let outcome =
            self.gestures
                .handle(event, &mut self.computator, &mut self.rotation_degrees)?;
        if outcome.navigation_started && self.viewport_animator.cancel() {
            debug!("viewport animation interrupted by gesture");
            self.emit_animation_cancelled(AnimationKind::Viewport);
        }
        if outcome.viewport_changed {
            self.emit_viewport_changed();
        }
        if outcome.rotation_changed {
            let degrees = self.rotation_degrees;
            self.emit_event(ChartEvent::RotationChanged { degrees });
        }

        let selection_changed = if self.config.value_touch_enabled {
            self.compute_touch(event, outcome.navigation_started)?
        } else {
            false
        };
        Ok(outcome.needs_redraw() || selection_changed)
    }

    /// Value to highlight: the pressed value if any, else the committed one.
    #[must_use]
    pub fn selected_value(&self) -> Option<SelectedValue> {
        self.selection.touched.or(self.selection.selected)
    }

    /// Selects `value` programmatically and notifies listeners.
    pub fn select_value(&mut self, value: SelectedValue) {
        self.selection.selected = Some(value);
        self.emit_event(ChartEvent::ValueSelected { value });
    }

    /// Clears both pressed and committed selection.
    pub fn clear_selection(&mut self) {
        let had_selection = self.selection.selected.is_some();
        self.selection.touched = None;
        self.selection.selected = None;
        if had_selection {
            self.emit_event(ChartEvent::ValueDeselected);
        }
    }

    /// Resolves a pixel to a data value using the configured tolerance and
    /// the current rotation.
    pub fn hit_test(&self, x: f32, y: f32) -> ChartResult<Option<SelectedValue>> {
        if !self.computator.has_valid_geometry() {
            warn!("hit test skipped: content geometry is invalid");
            return Ok(None);
        }
        let probe = TouchProbe::new(x, y, self.config.touch_tolerance_px)
            .with_rotation(self.rotation_degrees);
        self.data.check_touch(&self.computator, probe)
    }

    fn compute_touch(&mut self, event: PointerEvent, navigation_started: bool) -> ChartResult<bool> {
        let previous = self.selected_value();
        let PixelPoint { x, y } = event.position;
        match event.phase {
            PointerPhase::Down => {
                let hit = self.hit_test(x, y)?;
                self.selection.touched = hit;
                if hit.is_none()
                    && self.config.value_selection_enabled
                    && self.selection.selected.take().is_some()
                {
                    self.emit_event(ChartEvent::ValueDeselected);
                }
            }
            PointerPhase::Move if event.pinch.is_some() || navigation_started => {
                self.selection.touched = None;
            }
            PointerPhase::Move => {
                if self.selection.touched.is_some() {
                    self.selection.touched = self.hit_test(x, y)?;
                }
            }
            PointerPhase::Up => {
                if self.selection.touched.take().is_some() {
                    if let Some(value) = self.hit_test(x, y)? {
                        if self.config.value_selection_enabled {
                            self.selection.selected = Some(value);
                        }
                        self.emit_event(ChartEvent::ValueSelected { value });
                    }
                }
            }
            PointerPhase::Cancel => {
                self.selection.touched = None;
            }
        }
        Ok(self.selected_value() != previous)
    }
}
