use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{ChartComputator, PixelPoint, Viewport};
use crate::error::ChartResult;
use crate::interaction::{
    GestureOutcome, GestureSettings, GestureState, KineticFling, PinchDelta, PointerEvent,
    PointerPhase, VelocityTracker, ZoomType,
};

/// Pan, fling, pinch and double-tap handling for charts with a data viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianGestureHandler {
    settings: GestureSettings,
    state: GestureState,
    down_position: PixelPoint,
    last_position: PixelPoint,
    velocity: VelocityTracker,
    fling: Option<KineticFling>,
    last_tap: Option<(PixelPoint, Duration)>,
    double_tap_consumed: bool,
}

impl CartesianGestureHandler {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            state: GestureState::Idle,
            down_position: PixelPoint::default(),
            last_position: PixelPoint::default(),
            velocity: VelocityTracker::new(),
            fling: None,
            last_tap: None,
            double_tap_consumed: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn settings(&self) -> GestureSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: GestureSettings) {
        self.settings = settings;
    }

    /// Stops a running fling; returns whether one was running.
    pub fn cancel_fling(&mut self) -> bool {
        let cancelled = self.fling.take().is_some();
        if self.state == GestureState::Flinging {
            self.state = GestureState::Idle;
        }
        cancelled
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        computator: &mut ChartComputator,
    ) -> ChartResult<GestureOutcome> {
        match (event.phase, event.pinch) {
            (PointerPhase::Down, _) => self.on_down(event, computator),
            (PointerPhase::Move, Some(pinch)) => self.on_pinch(event, pinch, computator),
            (PointerPhase::Move, None) => self.on_move(event, computator),
            (PointerPhase::Up, _) => Ok(self.on_up(event)),
            (PointerPhase::Cancel, _) => {
                self.fling = None;
                self.state = GestureState::Idle;
                self.velocity.reset();
                Ok(GestureOutcome::default())
            }
        }
    }

    /// Advances a running fling to `now`.
    pub fn compute_scroll(
        &mut self,
        now: Duration,
        computator: &mut ChartComputator,
    ) -> ChartResult<GestureOutcome> {
        let Some(fling) = self.fling.as_mut() else {
            return Ok(GestureOutcome::default());
        };

        let mut outcome = GestureOutcome::default();
        if let Some((dx, dy)) = fling.step(now) {
            // Content follows the pointer, so the viewport moves against it.
            let scroll = scroll_by_pixels(computator, -dx, -dy)?;
            if scroll.clamped_x {
                fling.stop_x();
            }
            if scroll.clamped_y {
                fling.stop_y();
            }
            outcome.viewport_changed = scroll.moved;
        }

        if fling.is_finished() {
            self.fling = None;
            self.state = GestureState::Idle;
            trace!("fling settled");
        } else {
            outcome.fling_active = true;
        }
        Ok(outcome)
    }

    fn on_down(
        &mut self,
        event: PointerEvent,
        computator: &mut ChartComputator,
    ) -> ChartResult<GestureOutcome> {
        if self.fling.take().is_some() {
            debug!("fling interrupted by pointer down");
        }
        self.state = GestureState::Pending;
        self.down_position = event.position;
        self.last_position = event.position;
        self.velocity.reset();
        self.velocity.add(event.position, event.time);
        self.double_tap_consumed = false;

        let mut outcome = GestureOutcome::default();
        let config = self.settings.config;
        if let Some((tap_position, tap_time)) = self.last_tap.take() {
            let in_time = event.time.saturating_sub(tap_time) <= config.double_tap_timeout();
            let in_slop = tap_position.distance_to(event.position) <= config.double_tap_slop_px;
            if in_time && in_slop && self.settings.zoom_enabled {
                self.double_tap_consumed = true;
                outcome.navigation_started = true;
                outcome.viewport_changed = zoom_around_focus(
                    computator,
                    event.position,
                    config.double_tap_zoom_factor,
                    self.settings.zoom_type,
                )?;
                debug!(
                    x = event.position.x,
                    y = event.position.y,
                    zoom = computator.zoom_level(),
                    "double tap zoom"
                );
            }
        }
        Ok(outcome)
    }

    fn on_move(
        &mut self,
        event: PointerEvent,
        computator: &mut ChartComputator,
    ) -> ChartResult<GestureOutcome> {
        let mut outcome = GestureOutcome::default();
        match self.state {
            GestureState::Pending => {
                let travelled = self.down_position.distance_to(event.position);
                if travelled <= self.settings.config.touch_slop_px {
                    self.velocity.add(event.position, event.time);
                    return Ok(outcome);
                }
                self.state = GestureState::Panning;
                outcome.navigation_started = true;
                debug!(travelled, "pan started");
            }
            GestureState::Panning => {}
            GestureState::PinchZooming => {
                // One pointer lifted; continue as a pan from here without a jump.
                self.state = GestureState::Panning;
                self.last_position = event.position;
                self.velocity.reset();
                self.velocity.add(event.position, event.time);
                return Ok(outcome);
            }
            GestureState::Idle | GestureState::Flinging | GestureState::Rotating => {
                return Ok(outcome);
            }
        }

        self.velocity.add(event.position, event.time);
        let distance_x = self.last_position.x - event.position.x;
        let distance_y = self.last_position.y - event.position.y;
        self.last_position = event.position;
        if self.settings.scroll_enabled {
            let scroll = scroll_by_pixels(computator, distance_x, distance_y)?;
            outcome.viewport_changed = scroll.moved;
        }
        Ok(outcome)
    }

    fn on_pinch(
        &mut self,
        event: PointerEvent,
        pinch: PinchDelta,
        computator: &mut ChartComputator,
    ) -> ChartResult<GestureOutcome> {
        let mut outcome = GestureOutcome::default();
        self.fling = None;
        if !self.settings.zoom_enabled {
            return Ok(outcome);
        }
        if self.state != GestureState::PinchZooming {
            self.state = GestureState::PinchZooming;
            outcome.navigation_started = true;
            debug!("pinch zoom started");
        }
        self.last_position = event.position;
        self.velocity.reset();
        outcome.viewport_changed = zoom_around_focus(
            computator,
            event.position,
            pinch.scale_factor,
            self.settings.zoom_type,
        )?;
        Ok(outcome)
    }

    fn on_up(&mut self, event: PointerEvent) -> GestureOutcome {
        let mut outcome = GestureOutcome::default();
        let config = self.settings.config;
        match self.state {
            GestureState::Panning => {
                self.velocity.add(event.position, event.time);
                let (vx, vy) = self.velocity.velocity();
                let speed = vx.hypot(vy);
                if self.settings.scroll_enabled && speed >= config.min_fling_velocity_px_per_sec {
                    let scale = if speed > config.max_fling_velocity_px_per_sec {
                        config.max_fling_velocity_px_per_sec / speed
                    } else {
                        1.0
                    };
                    self.fling = Some(KineticFling::start(
                        vx * scale,
                        vy * scale,
                        event.time,
                        config.fling,
                    ));
                    self.state = GestureState::Flinging;
                    outcome.fling_active = true;
                    debug!(vx = vx * scale, vy = vy * scale, "fling started");
                } else {
                    self.state = GestureState::Idle;
                }
            }
            GestureState::Pending => {
                if !self.double_tap_consumed {
                    self.last_tap = Some((event.position, event.time));
                }
                self.state = GestureState::Idle;
            }
            GestureState::Flinging => {}
            GestureState::Idle | GestureState::PinchZooming | GestureState::Rotating => {
                self.state = GestureState::Idle;
            }
        }
        outcome
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScrollResult {
    pub moved: bool,
    pub clamped_x: bool,
    pub clamped_y: bool,
}

/// Scrolls the current viewport by a pointer distance (previous minus
/// current position) in pixels.
pub(crate) fn scroll_by_pixels(
    computator: &mut ChartComputator,
    distance_x: f32,
    distance_y: f32,
) -> ChartResult<ScrollResult> {
    let before = computator.current_viewport();
    let max = computator.max_viewport();
    let offset_x = computator.pixel_distance_to_data_x(distance_x)?;
    let offset_y = -computator.pixel_distance_to_data_y(distance_y)?;

    let requested_left = before.left + offset_x;
    let requested_top = before.top + offset_y;
    let clamped_x = offset_x != 0.0
        && (requested_left < max.left || requested_left > max.right - before.width());
    let clamped_y = offset_y != 0.0
        && (requested_top > max.top || requested_top < max.bottom + before.height());

    computator.set_viewport_top_left(requested_left, requested_top);
    Ok(ScrollResult {
        moved: computator.current_viewport() != before,
        clamped_x,
        clamped_y,
    })
}

/// Scales the current viewport by `1 / scale` around a pixel focus point.
///
/// The data point under `focus` keeps its pixel position, widths and heights
/// are limited to `[max / max_zoom, max]`, and only the axes allowed by
/// `zoom_type` change. Returns whether the viewport moved. A focus outside
/// the content rectangle or a non-positive scale is ignored.
pub(crate) fn zoom_around_focus(
    computator: &mut ChartComputator,
    focus: PixelPoint,
    scale: f32,
    zoom_type: ZoomType,
) -> ChartResult<bool> {
    if !scale.is_finite() || scale <= 0.0 {
        return Ok(false);
    }
    let Some((focus_x, focus_y)) = computator.pixel_to_data_point(focus.x, focus.y)? else {
        return Ok(false);
    };

    let current = computator.current_viewport();
    let max = computator.max_viewport();
    let content = computator.content_rect();
    let mut target = current;

    if zoom_type.zooms_horizontally() {
        let width = (current.width() / scale)
            .max(computator.min_viewport_width())
            .min(max.width());
        target.left = focus_x - (focus.x - content.left) * width / content.width();
        target.right = target.left + width;
    }
    if zoom_type.zooms_vertically() {
        let height = (current.height() / scale)
            .max(computator.min_viewport_height())
            .min(max.height());
        target.top = focus_y + (focus.y - content.top) * height / content.height();
        target.bottom = target.top - height;
    }

    let constrained: Viewport = computator.constrain_viewport(target);
    computator.set_current_viewport(Some(constrained));
    Ok(constrained != current)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{CartesianGestureHandler, zoom_around_focus};
    use crate::core::{ChartComputator, PixelPoint, Viewport};
    use crate::interaction::{GestureSettings, GestureState, PointerEvent, ZoomType};

    fn computator() -> ChartComputator {
        let mut computator = ChartComputator::new();
        computator
            .set_content_rect(100.0, 100.0, 0.0, 0.0, 0.0, 0.0)
            .expect("valid geometry");
        computator.set_max_viewport(Some(Viewport::new(0.0, 100.0, 100.0, 0.0)));
        computator.set_current_viewport(Some(Viewport::new(25.0, 75.0, 75.0, 25.0)));
        computator
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn drag_past_slop_pans_against_pointer() {
        let mut computator = computator();
        let mut handler = CartesianGestureHandler::new(GestureSettings::default());

        handler
            .handle(PointerEvent::down(50.0, 50.0, ms(0)), &mut computator)
            .expect("down");
        let small = handler
            .handle(PointerEvent::moved(53.0, 50.0, ms(10)), &mut computator)
            .expect("small move");
        assert!(!small.viewport_changed);
        assert_eq!(handler.state(), GestureState::Pending);

        let outcome = handler
            .handle(PointerEvent::moved(40.0, 60.0, ms(20)), &mut computator)
            .expect("pan");
        assert!(outcome.navigation_started);
        assert!(outcome.viewport_changed);
        assert_eq!(handler.state(), GestureState::Panning);

        let viewport = computator.current_viewport();
        assert!((viewport.left - 30.0).abs() <= 1e-4);
        assert!((viewport.top - 80.0).abs() <= 1e-4);
        assert!((viewport.width() - 50.0).abs() <= 1e-4);
    }

    #[test]
    fn zoom_keeps_focus_anchored() {
        let mut computator = computator();
        let focus = PixelPoint::new(20.0, 30.0);
        let before = computator
            .pixel_to_data_point(focus.x, focus.y)
            .expect("projection")
            .expect("inside content");

        let changed = zoom_around_focus(&mut computator, focus, 2.0, ZoomType::HorizontalAndVertical)
            .expect("zoom");
        assert!(changed);
        let after = computator
            .pixel_to_data_point(focus.x, focus.y)
            .expect("projection")
            .expect("inside content");
        assert!((before.0 - after.0).abs() <= 1e-3);
        assert!((before.1 - after.1).abs() <= 1e-3);
        assert!((computator.current_viewport().width() - 25.0).abs() <= 1e-4);
    }

    #[test]
    fn horizontal_zoom_leaves_vertical_extent() {
        let mut computator = computator();
        zoom_around_focus(&mut computator, PixelPoint::new(50.0, 50.0), 2.0, ZoomType::Horizontal)
            .expect("zoom");
        let viewport = computator.current_viewport();
        assert!((viewport.width() - 25.0).abs() <= 1e-4);
        assert!((viewport.top - 75.0).abs() <= 1e-4);
        assert!((viewport.bottom - 25.0).abs() <= 1e-4);
    }

    #[test]
    fn zoom_out_saturates_at_max_viewport() {
        let mut computator = computator();
        zoom_around_focus(&mut computator, PixelPoint::new(10.0, 10.0), 0.01, ZoomType::HorizontalAndVertical)
            .expect("zoom");
        assert_eq!(computator.current_viewport(), computator.max_viewport());
        assert!((computator.zoom_level() - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn second_tap_within_timeout_zooms() {
        let mut computator = computator();
        let mut handler = CartesianGestureHandler::new(GestureSettings::default());

        handler
            .handle(PointerEvent::down(50.0, 50.0, ms(0)), &mut computator)
            .expect("down");
        handler
            .handle(PointerEvent::up(50.0, 50.0, ms(40)), &mut computator)
            .expect("up");
        let outcome = handler
            .handle(PointerEvent::down(52.0, 51.0, ms(150)), &mut computator)
            .expect("second down");

        assert!(outcome.viewport_changed);
        assert!((computator.zoom_level() - 4.0).abs() <= 1e-3);
    }

    #[test]
    fn fast_release_flings_until_settled() {
        let mut computator = computator();
        let mut handler = CartesianGestureHandler::new(GestureSettings::default());

        handler
            .handle(PointerEvent::down(60.0, 50.0, ms(0)), &mut computator)
            .expect("down");
        handler
            .handle(PointerEvent::moved(50.0, 50.0, ms(10)), &mut computator)
            .expect("move");
        let up = handler
            .handle(PointerEvent::up(40.0, 50.0, ms(20)), &mut computator)
            .expect("up");
        assert!(up.fling_active);
        assert_eq!(handler.state(), GestureState::Flinging);

        let mut now = ms(20);
        for _ in 0..1_000 {
            now += ms(16);
            let outcome = handler.compute_scroll(now, &mut computator).expect("step");
            if !outcome.fling_active {
                break;
            }
        }
        assert_eq!(handler.state(), GestureState::Idle);
        let viewport = computator.current_viewport();
        assert!(computator.max_viewport().contains_viewport(viewport));
        assert!(viewport.left > 45.0);
    }
}
