use serde::{Deserialize, Serialize};

use crate::core::{ChartComputator, PixelPoint, SelectedValue, Viewport};
use crate::error::ChartResult;

/// Data that contributes a navigable range to the chart.
pub trait ViewportOwner {
    /// Bounds of all navigable data, or `None` when the data set has no
    /// cartesian extent (empty or radial data).
    fn calculate_max_viewport(&self) -> Option<Viewport>;
}

/// Data whose values follow the data animator's progress.
pub trait Animatable {
    /// Applies `progress` in `[0, 1]` to every animated value.
    fn update(&mut self, progress: f32);
    /// Snaps every value to its target and clears pending deltas.
    fn finish(&mut self);
}

/// Pointer location and tolerances used when resolving a touch to a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchProbe {
    pub point: PixelPoint,
    pub tolerance_px: f32,
    /// Current rotation of radial charts in degrees; ignored by cartesian data.
    pub rotation_degrees: f32,
}

impl TouchProbe {
    #[must_use]
    pub fn new(x: f32, y: f32, tolerance_px: f32) -> Self {
        Self {
            point: PixelPoint::new(x, y),
            tolerance_px,
            rotation_degrees: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_degrees: f32) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }
}

/// Data that can resolve a pixel to one of its values.
pub trait HitTestable {
    fn check_touch(
        &self,
        computator: &ChartComputator,
        probe: TouchProbe,
    ) -> ChartResult<Option<SelectedValue>>;
}
