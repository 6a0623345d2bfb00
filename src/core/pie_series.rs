use serde::{Deserialize, Serialize};

use crate::core::animated_value::{finish_all, update_all};
use crate::core::{
    Animatable, AnimatedValue, ChartComputator, HitTestable, SelectedValue, SelectedValueType,
    TouchProbe, Viewport, ViewportOwner,
};
use crate::error::ChartResult;

/// Pie slices laid out clockwise from the chart rotation angle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieChartData {
    pub values: Vec<AnimatedValue>,
}

impl PieChartData {
    #[must_use]
    pub fn new(values: &[f32]) -> Self {
        Self {
            values: values.iter().copied().map(AnimatedValue::new).collect(),
        }
    }

    fn total(&self) -> f32 {
        self.values.iter().map(|slice| slice.value().abs()).sum()
    }

    /// Index of the slice under `angle_degrees`, measured clockwise from the
    /// slice origin (chart rotation already removed).
    #[must_use]
    pub fn slice_at_angle(&self, angle_degrees: f32) -> Option<usize> {
        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        let slice_scale = 360.0 / total;
        let mut slice_start = 0.0;
        let mut hit = None;
        for (index, slice) in self.values.iter().enumerate() {
            if angle_degrees >= slice_start {
                hit = Some(index);
            }
            slice_start += slice.value().abs() * slice_scale;
        }
        hit
    }
}

/// Screen angle of (`x`, `y`) around the center, clockwise from 3 o'clock.
#[must_use]
pub fn point_to_angle(x: f32, y: f32, center_x: f32, center_y: f32) -> f32 {
    let degrees = (y - center_y).atan2(x - center_x).to_degrees();
    degrees.rem_euclid(360.0)
}

impl ViewportOwner for PieChartData {
    fn calculate_max_viewport(&self) -> Option<Viewport> {
        None
    }
}

impl Animatable for PieChartData {
    fn update(&mut self, progress: f32) {
        update_all(&mut self.values, progress);
    }

    fn finish(&mut self) {
        finish_all(&mut self.values);
    }
}

impl HitTestable for PieChartData {
    fn check_touch(
        &self,
        computator: &ChartComputator,
        probe: TouchProbe,
    ) -> ChartResult<Option<SelectedValue>> {
        let content = computator.content_rect();
        let (center_x, center_y) = (content.center_x(), content.center_y());
        let radius = content.width().min(content.height()) / 2.0;
        let distance = (probe.point.x - center_x).hypot(probe.point.y - center_y);
        if distance > radius + probe.tolerance_px {
            return Ok(None);
        }

        let angle = (point_to_angle(probe.point.x, probe.point.y, center_x, center_y)
            - probe.rotation_degrees)
            .rem_euclid(360.0);
        Ok(self
            .slice_at_angle(angle)
            .map(|index| SelectedValue::new(index, index, SelectedValueType::Slice)))
    }
}

#[cfg(test)]
mod tests {
    use super::{PieChartData, point_to_angle};

    #[test]
    fn angles_grow_clockwise_on_screen() {
        assert_eq!(point_to_angle(10.0, 0.0, 0.0, 0.0), 0.0);
        assert!((point_to_angle(0.0, 10.0, 0.0, 0.0) - 90.0).abs() < 1e-4);
        assert!((point_to_angle(-10.0, 0.0, 0.0, 0.0) - 180.0).abs() < 1e-4);
        assert!((point_to_angle(0.0, -10.0, 0.0, 0.0) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn slice_lookup_uses_absolute_shares() {
        let data = PieChartData::new(&[1.0, -1.0, 2.0]);
        assert_eq!(data.slice_at_angle(10.0), Some(0));
        assert_eq!(data.slice_at_angle(100.0), Some(1));
        assert_eq!(data.slice_at_angle(200.0), Some(2));
        assert_eq!(PieChartData::new(&[0.0]).slice_at_angle(10.0), None);
    }
}
