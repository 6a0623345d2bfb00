use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{ChartComputator, PixelPoint};
use crate::interaction::{
    FlingConfig, GestureOutcome, GestureSettings, GestureState, KineticFling, PointerEvent,
    PointerPhase, VelocityTracker,
};

/// Converts a pointer movement at offset (`x`, `y`) from the rotation center
/// into a signed scalar: the movement length, positive when the motion turns
/// clockwise on screen.
#[must_use]
pub fn vector_to_scalar_scroll(dx: f32, dy: f32, x: f32, y: f32) -> f32 {
    let length = dx.hypot(dy);
    let cross = -y * dx + x * dy;
    if cross > 0.0 {
        length
    } else if cross < 0.0 {
        -length
    } else {
        0.0
    }
}

/// Rotation and angular fling for radial charts. Radial charts never zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGestureHandler {
    settings: GestureSettings,
    state: GestureState,
    down_position: PixelPoint,
    last_position: PixelPoint,
    velocity: VelocityTracker,
    fling: Option<KineticFling>,
}

impl RadialGestureHandler {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            state: GestureState::Idle,
            down_position: PixelPoint::default(),
            last_position: PixelPoint::default(),
            velocity: VelocityTracker::new(),
            fling: None,
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

    pub fn cancel_fling(&mut self) -> bool {
        let cancelled = self.fling.take().is_some();
        if self.state == GestureState::Flinging {
            self.state = GestureState::Idle;
        }
        cancelled
    }

    /// Applies `event`, rotating `rotation_degrees` in place.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        computator: &ChartComputator,
        rotation_degrees: &mut f32,
    ) -> GestureOutcome {
        let mut outcome = GestureOutcome::default();
        match event.phase {
            PointerPhase::Down => {
                if self.fling.take().is_some() {
                    debug!("rotation fling interrupted by pointer down");
                }
                self.state = GestureState::Pending;
                self.down_position = event.position;
                self.last_position = event.position;
                self.velocity.reset();
                self.velocity.add(event.position, event.time);
            }
            PointerPhase::Move if event.pinch.is_some() => {}
            PointerPhase::Move => {
                match self.state {
                    GestureState::Pending => {
                        let travelled = self.down_position.distance_to(event.position);
                        if travelled <= self.settings.config.touch_slop_px {
                            self.velocity.add(event.position, event.time);
                            return outcome;
                        }
                        self.state = GestureState::Rotating;
                        outcome.navigation_started = true;
                        debug!(travelled, "rotation started");
                    }
                    GestureState::Rotating => {}
                    _ => return outcome,
                }
                self.velocity.add(event.position, event.time);
                let center = content_center(computator);
                let theta = vector_to_scalar_scroll(
                    event.position.x - self.last_position.x,
                    event.position.y - self.last_position.y,
                    event.position.x - center.x,
                    event.position.y - center.y,
                );
                self.last_position = event.position;
                if self.settings.scroll_enabled && theta != 0.0 {
                    rotate(rotation_degrees, theta / self.settings.config.rotation_downscale);
                    outcome.rotation_changed = true;
                }
            }
            PointerPhase::Up => {
                if self.state == GestureState::Rotating {
                    self.velocity.add(event.position, event.time);
                    self.start_fling(event, computator, &mut outcome);
                } else if self.state != GestureState::Flinging {
                    self.state = GestureState::Idle;
                }
            }
            PointerPhase::Cancel => {
                self.fling = None;
                self.state = GestureState::Idle;
                self.velocity.reset();
            }
        }
        outcome
    }

    /// Advances a running angular fling to `now`.
    pub fn compute_scroll(&mut self, now: Duration, rotation_degrees: &mut f32) -> GestureOutcome {
        let Some(fling) = self.fling.as_mut() else {
            return GestureOutcome::default();
        };
        let mut outcome = GestureOutcome::default();
        if let Some((degrees, _)) = fling.step(now) {
            if degrees != 0.0 {
                rotate(rotation_degrees, degrees);
                outcome.rotation_changed = true;
            }
        }
        if fling.is_finished() {
            self.fling = None;
            self.state = GestureState::Idle;
            trace!("rotation fling settled");
        } else {
            outcome.fling_active = true;
        }
        outcome
    }

    fn start_fling(
        &mut self,
        event: PointerEvent,
        computator: &ChartComputator,
        outcome: &mut GestureOutcome,
    ) {
        let config = self.settings.config;
        let (vx, vy) = self.velocity.velocity();
        let speed = vx.hypot(vy);
        if !self.settings.scroll_enabled || speed < config.min_fling_velocity_px_per_sec {
            self.state = GestureState::Idle;
            return;
        }

        let scale = if speed > config.max_fling_velocity_px_per_sec {
            config.max_fling_velocity_px_per_sec / speed
        } else {
            1.0
        };
        let center = content_center(computator);
        let angular = vector_to_scalar_scroll(
            vx * scale,
            vy * scale,
            event.position.x - center.x,
            event.position.y - center.y,
        ) / config.rotation_downscale;
        let fling_config = FlingConfig {
            decay_per_second: config.fling.decay_per_second,
            stop_velocity_px_per_sec: config.fling.stop_velocity_px_per_sec
                / config.rotation_downscale,
        };

        let fling = KineticFling::start(angular, 0.0, event.time, fling_config);
        if fling.is_finished() {
            self.state = GestureState::Idle;
            return;
        }
        debug!(degrees_per_sec = angular, "rotation fling started");
        self.fling = Some(fling);
        self.state = GestureState::Flinging;
        outcome.fling_active = true;
    }
}

fn content_center(computator: &ChartComputator) -> PixelPoint {
    let content = computator.content_rect();
    PixelPoint::new(content.center_x(), content.center_y())
}

fn rotate(rotation_degrees: &mut f32, delta: f32) {
    *rotation_degrees = (*rotation_degrees + delta).rem_euclid(360.0);
}
