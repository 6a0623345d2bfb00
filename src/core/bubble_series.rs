use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::animated_value::{finish_all, update_all};
use crate::core::line_series::points_extent;
use crate::core::{
    Animatable, AnimatedValue, ChartComputator, HitTestable, PixelPoint, SelectedValue,
    SelectedValueType, TouchProbe, Viewport, ViewportOwner,
};
use crate::error::ChartResult;

pub const DEFAULT_MIN_BUBBLE_RADIUS_PX: f32 = 6.0;

/// Bubble at (`x`, `y`) whose area encodes `z`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BubbleValue {
    pub x: AnimatedValue,
    pub y: AnimatedValue,
    pub z: AnimatedValue,
}

impl BubbleValue {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: AnimatedValue::new(x),
            y: AnimatedValue::new(y),
            z: AnimatedValue::new(z),
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32, z: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
        self.z.set_target(z);
    }
}

impl Animatable for BubbleValue {
    fn update(&mut self, progress: f32) {
        self.x.update(progress);
        self.y.update(progress);
        self.z.update(progress);
    }

    fn finish(&mut self) {
        self.x.finish();
        self.y.finish();
        self.z.finish();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleChartData {
    pub values: Vec<BubbleValue>,
    /// Multiplier on the largest bubble radius (an eighth of the shorter
    /// content side).
    #[serde(default = "default_bubble_scale")]
    pub bubble_scale: f32,
    #[serde(default = "default_min_bubble_radius")]
    pub min_bubble_radius_px: f32,
}

fn default_bubble_scale() -> f32 {
    1.0
}

fn default_min_bubble_radius() -> f32 {
    DEFAULT_MIN_BUBBLE_RADIUS_PX
}

impl Default for BubbleChartData {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl BubbleChartData {
    #[must_use]
    pub fn new(values: Vec<BubbleValue>) -> Self {
        Self {
            values,
            bubble_scale: default_bubble_scale(),
            min_bubble_radius_px: DEFAULT_MIN_BUBBLE_RADIUS_PX,
        }
    }

    /// Pixel radius for a `z` value; areas scale linearly with `|z|`.
    #[must_use]
    pub fn radius_px(&self, computator: &ChartComputator, z: f32) -> f32 {
        let max_abs_z = self
            .values
            .iter()
            .map(|bubble| bubble.z.value().abs())
            .fold(0.0f32, f32::max);
        if max_abs_z <= 0.0 || !max_abs_z.is_finite() {
            return self.min_bubble_radius_px;
        }
        let content = computator.content_rect();
        let max_radius = self.bubble_scale * content.width().min(content.height()) / 8.0;
        (max_radius * (z.abs() / max_abs_z).sqrt()).max(self.min_bubble_radius_px)
    }
}

impl ViewportOwner for BubbleChartData {
    fn calculate_max_viewport(&self) -> Option<Viewport> {
        points_extent(
            self.values
                .iter()
                .map(|bubble| (bubble.x.value(), bubble.y.value())),
        )
    }
}

impl Animatable for BubbleChartData {
    fn update(&mut self, progress: f32) {
        update_all(&mut self.values, progress);
    }

    fn finish(&mut self) {
        finish_all(&mut self.values);
    }
}

impl HitTestable for BubbleChartData {
    fn check_touch(
        &self,
        computator: &ChartComputator,
        probe: TouchProbe,
    ) -> ChartResult<Option<SelectedValue>> {
        let mut candidates = Vec::new();
        for (index, bubble) in self.values.iter().enumerate() {
            let center = PixelPoint::new(
                computator.data_to_pixel_x(bubble.x.value())?,
                computator.data_to_pixel_y(bubble.y.value())?,
            );
            let distance = center.distance_to(probe.point);
            if distance <= self.radius_px(computator, bubble.z.value()) + probe.tolerance_px {
                candidates.push((index, distance));
            }
        }

        Ok(candidates
            .into_iter()
            .min_by_key(|candidate| OrderedFloat(candidate.1))
            .map(|(index, _)| SelectedValue::new(index, index, SelectedValueType::Bubble)))
    }
}
