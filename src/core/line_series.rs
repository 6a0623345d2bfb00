use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::animated_value::{finish_all, update_all};
use crate::core::{
    Animatable, AnimatedValue, ChartComputator, HitTestable, PixelPoint, SelectedValue,
    SelectedValueType, TouchProbe, Viewport, ViewportOwner,
};
use crate::error::ChartResult;

pub const DEFAULT_POINT_RADIUS_PX: f32 = 6.0;

/// XY point whose coordinates animate independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointValue {
    pub x: AnimatedValue,
    pub y: AnimatedValue,
}

impl PointValue {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: AnimatedValue::new(x),
            y: AnimatedValue::new(y),
        }
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x.value()
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y.value()
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }
}

impl Animatable for PointValue {
    fn update(&mut self, progress: f32) {
        self.x.update(progress);
        self.y.update(progress);
    }

    fn finish(&mut self) {
        self.x.finish();
        self.y.finish();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub values: Vec<PointValue>,
    #[serde(default = "default_point_radius")]
    pub point_radius_px: f32,
}

fn default_point_radius() -> f32 {
    DEFAULT_POINT_RADIUS_PX
}

impl Line {
    #[must_use]
    pub fn new(values: Vec<PointValue>) -> Self {
        Self {
            values,
            point_radius_px: DEFAULT_POINT_RADIUS_PX,
        }
    }

    #[must_use]
    pub fn from_xy(points: &[(f32, f32)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| PointValue::new(x, y)).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartData {
    pub lines: Vec<Line>,
}

impl LineChartData {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

impl ViewportOwner for LineChartData {
    fn calculate_max_viewport(&self) -> Option<Viewport> {
        points_extent(
            self.lines
                .iter()
                .flat_map(|line| line.values.iter())
                .map(|point| (point.x(), point.y())),
        )
    }
}

impl Animatable for LineChartData {
    fn update(&mut self, progress: f32) {
        for line in &mut self.lines {
            update_all(&mut line.values, progress);
        }
    }

    fn finish(&mut self) {
        for line in &mut self.lines {
            finish_all(&mut line.values);
        }
    }
}

impl HitTestable for LineChartData {
    /// Selects the point nearest to the probe within its radius plus tolerance.
    fn check_touch(
        &self,
        computator: &ChartComputator,
        probe: TouchProbe,
    ) -> ChartResult<Option<SelectedValue>> {
        let mut candidates = Vec::new();
        for (line_index, line) in self.lines.iter().enumerate() {
            let reach = line.point_radius_px + probe.tolerance_px;
            for (point_index, point) in line.values.iter().enumerate() {
                let raw = PixelPoint::new(
                    computator.data_to_pixel_x(point.x())?,
                    computator.data_to_pixel_y(point.y())?,
                );
                let distance = raw.distance_to(probe.point);
                if distance <= reach {
                    candidates.push((line_index, point_index, distance));
                }
            }
        }

        Ok(candidates
            .into_iter()
            .min_by_key(|candidate| OrderedFloat(candidate.2))
            .map(|(line_index, point_index, _)| {
                SelectedValue::new(line_index, point_index, SelectedValueType::Line)
            }))
    }
}

/// Bounding viewport of a point cloud; `None` when empty or non-finite.
pub(crate) fn points_extent(points: impl Iterator<Item = (f32, f32)>) -> Option<Viewport> {
    let mut extent: Option<Viewport> = None;
    for (x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        extent = Some(match extent {
            None => Viewport::new(x, y, x, y),
            Some(current) => Viewport::new(
                current.left.min(x),
                current.top.max(y),
                current.right.max(x),
                current.bottom.min(y),
            ),
        });
    }
    extent
}
