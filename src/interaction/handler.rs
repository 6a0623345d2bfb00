use std::time::Duration;

use crate::core::{ChartComputator, ChartKind};
use crate::error::ChartResult;
use crate::interaction::{
    CartesianGestureHandler, GestureSettings, GestureState, PointerEvent, RadialGestureHandler,
};

/// What a pointer event or fling step did to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureOutcome {
    pub viewport_changed: bool,
    pub rotation_changed: bool,
    /// A user pan, pinch, rotation or double-tap zoom took over navigation.
    pub navigation_started: bool,
    /// A fling is still running and wants further frames.
    pub fling_active: bool,
}

impl GestureOutcome {
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        self.viewport_changed || self.rotation_changed || self.fling_active
    }
}

/// Gesture handler selected by chart family.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureHandler {
    Cartesian(CartesianGestureHandler),
    Radial(RadialGestureHandler),
}

impl GestureHandler {
    #[must_use]
    pub fn for_kind(kind: ChartKind, settings: GestureSettings) -> Self {
        if kind.is_radial() {
            Self::Radial(RadialGestureHandler::new(settings))
        } else {
            Self::Cartesian(CartesianGestureHandler::new(settings))
        }
    }

    #[must_use]
    pub fn is_radial(&self) -> bool {
        matches!(self, Self::Radial(_))
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        match self {
            Self::Cartesian(handler) => handler.state(),
            Self::Radial(handler) => handler.state(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> GestureSettings {
        match self {
            Self::Cartesian(handler) => handler.settings(),
            Self::Radial(handler) => handler.settings(),
        }
    }

    pub fn set_settings(&mut self, settings: GestureSettings) {
        match self {
            Self::Cartesian(handler) => handler.set_settings(settings),
            Self::Radial(handler) => handler.set_settings(settings),
        }
    }

    pub fn cancel_fling(&mut self) -> bool {
        match self {
            Self::Cartesian(handler) => handler.cancel_fling(),
            Self::Radial(handler) => handler.cancel_fling(),
        }
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        computator: &mut ChartComputator,
        rotation_degrees: &mut f32,
    ) -> ChartResult<GestureOutcome> {
        match self {
            Self::Cartesian(handler) => handler.handle(event, computator),
            Self::Radial(handler) => Ok(handler.handle(event, computator, rotation_degrees)),
        }
    }

    pub fn compute_scroll(
        &mut self,
        now: Duration,
        computator: &mut ChartComputator,
        rotation_degrees: &mut f32,
    ) -> ChartResult<GestureOutcome> {
        match self {
            Self::Cartesian(handler) => handler.compute_scroll(now, computator),
            Self::Radial(handler) => Ok(handler.compute_scroll(now, rotation_degrees)),
        }
    }
}
