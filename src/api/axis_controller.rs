use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisStops, ValueFormatter, compute_axis_stops, ideal_step_count, primitives::ensure_finite,
};
use crate::error::{ChartError, ChartResult};

use super::ChartView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Runs along X; ticks cover `left..right`.
    Horizontal,
    /// Runs along Y; ticks cover `bottom..top`.
    Vertical,
}

/// Estimated label size along each axis direction, measured by the host's
/// text layout.
///
/// Horizontal axes are limited by label width, vertical axes by label
/// height. A zero extent disables ticks on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelMetrics {
    pub horizontal_label_width_px: f32,
    pub vertical_label_height_px: f32,
}

impl Default for AxisLabelMetrics {
    fn default() -> Self {
        Self {
            horizontal_label_width_px: 0.0,
            vertical_label_height_px: 0.0,
        }
    }
}

impl ChartView {
    #[must_use]
    pub fn axis_label_metrics(&self) -> AxisLabelMetrics {
        self.axis_labels
    }

    pub fn set_axis_label_metrics(&mut self, metrics: AxisLabelMetrics) -> ChartResult<()> {
        for (name, value) in [
            ("horizontal_label_width_px", metrics.horizontal_label_width_px),
            ("vertical_label_height_px", metrics.vertical_label_height_px),
        ] {
            if ensure_finite(value, name)? < 0.0 {
                return Err(ChartError::InvalidData(format!("{name} must be >= 0")));
            }
        }
        self.axis_labels = metrics;
        debug!(?metrics, "axis label metrics updated");
        Ok(())
    }

    /// Ideal tick count for `orientation` given the content rectangle and
    /// label metrics.
    #[must_use]
    pub fn axis_ideal_step_count(&self, orientation: AxisOrientation) -> usize {
        let content = self.computator.content_rect();
        match orientation {
            AxisOrientation::Horizontal => {
                ideal_step_count(content.width(), self.axis_labels.horizontal_label_width_px)
            }
            AxisOrientation::Vertical => {
                ideal_step_count(content.height(), self.axis_labels.vertical_label_height_px)
            }
        }
    }

    /// Regenerates the tick set for the visible range on `orientation`,
    /// reusing that axis' buffer.
    pub fn axis_ticks(&mut self, orientation: AxisOrientation) -> ChartResult<&AxisStops> {
        let steps = self.axis_ideal_step_count(orientation);
        let viewport = self.computator.current_viewport();
        let (start, stop, stops) = match orientation {
            AxisOrientation::Horizontal => {
                (viewport.left, viewport.right, &mut self.horizontal_stops)
            }
            AxisOrientation::Vertical => (viewport.bottom, viewport.top, &mut self.vertical_stops),
        };
        compute_axis_stops(start, stop, steps, stops)?;
        Ok(stops)
    }

    /// Tick labels for `orientation`, formatted with the tick decimal hint.
    pub fn axis_labels(
        &mut self,
        orientation: AxisOrientation,
        formatter: &ValueFormatter,
    ) -> ChartResult<Vec<String>> {
        let stops = self.axis_ticks(orientation)?;
        Ok(formatter.format_stops(stops))
    }
}
