use serde::{Deserialize, Serialize};

use crate::core::animated_value::{finish_all, update_all};
use crate::core::{
    Animatable, AnimatedValue, ChartComputator, HitTestable, PixelRect, SelectedValue,
    SelectedValueType, TouchProbe, Viewport, ViewportOwner,
};
use crate::error::ChartResult;

pub const DEFAULT_FILL_RATIO: f32 = 0.75;
pub const DEFAULT_SUB_COLUMN_SPACING_PX: f32 = 1.0;
const MIN_COLUMN_WIDTH_PX: f32 = 2.0;
const MIN_SUB_COLUMN_WIDTH_PX: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    pub values: Vec<AnimatedValue>,
}

impl Column {
    #[must_use]
    pub fn new(values: &[f32]) -> Self {
        Self {
            values: values.iter().copied().map(AnimatedValue::new).collect(),
        }
    }
}

/// Columns placed at integer X positions `0..n`, each holding sub-columns
/// that are either drawn side by side or stacked on the base value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnChartData {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub stacked: bool,
    /// Share of one X unit covered by a column, in `(0, 1]`.
    #[serde(default = "default_fill_ratio")]
    pub fill_ratio: f32,
    /// Value columns grow from.
    #[serde(default)]
    pub base_value: f32,
    #[serde(default = "default_sub_column_spacing")]
    pub sub_column_spacing_px: f32,
}

fn default_fill_ratio() -> f32 {
    DEFAULT_FILL_RATIO
}

fn default_sub_column_spacing() -> f32 {
    DEFAULT_SUB_COLUMN_SPACING_PX
}

impl Default for ColumnChartData {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ColumnChartData {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            stacked: false,
            fill_ratio: DEFAULT_FILL_RATIO,
            base_value: 0.0,
            sub_column_spacing_px: DEFAULT_SUB_COLUMN_SPACING_PX,
        }
    }

    #[must_use]
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_base_value(mut self, base_value: f32) -> Self {
        self.base_value = base_value;
        self
    }

    /// Pixel width of one column at the current zoom, never below 2px.
    pub fn column_width_px(&self, computator: &ChartComputator) -> f32 {
        let visible = computator.current_viewport().width();
        let width = self.fill_ratio * computator.content_rect().width() / visible;
        if width.is_finite() {
            width.max(MIN_COLUMN_WIDTH_PX)
        } else {
            MIN_COLUMN_WIDTH_PX
        }
    }

    /// Pixel rectangles of every sub-column of `column_index`, in value order.
    pub fn sub_column_rects(
        &self,
        computator: &ChartComputator,
        column_index: usize,
    ) -> ChartResult<Vec<PixelRect>> {
        let Some(column) = self.columns.get(column_index) else {
            return Ok(Vec::new());
        };
        let column_width = self.column_width_px(computator);
        if self.stacked {
            self.stacked_rects(computator, column, column_index, column_width)
        } else {
            self.side_by_side_rects(computator, column, column_index, column_width)
        }
    }

    fn side_by_side_rects(
        &self,
        computator: &ChartComputator,
        column: &Column,
        column_index: usize,
        column_width: f32,
    ) -> ChartResult<Vec<PixelRect>> {
        let count = column.values.len();
        if count == 0 {
            return Ok(Vec::new());
        }
        let spacing = self.sub_column_spacing_px;
        let sub_width = ((column_width - spacing * (count - 1) as f32) / count as f32)
            .max(MIN_SUB_COLUMN_WIDTH_PX);

        let raw_x = computator.data_to_pixel_x(column_index as f32)?;
        let half_width = column_width / 2.0;
        let base_raw_y = computator.data_to_pixel_y(self.base_value)?;

        let mut rects = Vec::with_capacity(count);
        let mut left = raw_x - half_width;
        for value in &column.values {
            if left > raw_x + half_width {
                break;
            }
            let raw_y = computator.data_to_pixel_y(value.value())?;
            rects.push(self.value_rect(value.value(), left, left + sub_width, base_raw_y, raw_y));
            left += sub_width + spacing;
        }
        Ok(rects)
    }

    fn stacked_rects(
        &self,
        computator: &ChartComputator,
        column: &Column,
        column_index: usize,
        column_width: f32,
    ) -> ChartResult<Vec<PixelRect>> {
        let raw_x = computator.data_to_pixel_x(column_index as f32)?;
        let half_width = column_width / 2.0;
        let mut positive_top = self.base_value;
        let mut negative_bottom = self.base_value;

        let mut rects = Vec::with_capacity(column.values.len());
        for value in &column.values {
            let value = value.value();
            let segment_base = if value >= self.base_value {
                let base = positive_top;
                positive_top += value;
                base
            } else {
                let base = negative_bottom;
                negative_bottom += value;
                base
            };
            let raw_base_y = computator.data_to_pixel_y(segment_base)?;
            let raw_y = computator.data_to_pixel_y(segment_base + value)?;
            rects.push(self.value_rect(
                value,
                raw_x - half_width,
                raw_x + half_width,
                raw_base_y,
                raw_y,
            ));
        }
        Ok(rects)
    }

    fn value_rect(&self, value: f32, left: f32, right: f32, raw_base_y: f32, raw_y: f32) -> PixelRect {
        let spacing = self.sub_column_spacing_px;
        if value >= self.base_value {
            PixelRect::new(left, raw_y, right, raw_base_y - spacing)
        } else {
            PixelRect::new(left, raw_base_y + spacing, right, raw_y)
        }
    }
}

impl ViewportOwner for ColumnChartData {
    fn calculate_max_viewport(&self) -> Option<Viewport> {
        if self.columns.is_empty() {
            return None;
        }
        let base = self.base_value;
        // Half a unit on each side keeps the outer columns fully visible.
        let mut viewport = Viewport::new(-0.5, base, self.columns.len() as f32 - 0.5, base);

        for column in &self.columns {
            if self.stacked {
                let mut positive_sum = base;
                let mut negative_sum = base;
                for value in &column.values {
                    if value.value() >= base {
                        positive_sum += value.value();
                    } else {
                        negative_sum += value.value();
                    }
                }
                viewport.top = viewport.top.max(positive_sum);
                viewport.bottom = viewport.bottom.min(negative_sum);
            } else {
                for value in &column.values {
                    let value = value.value();
                    if value >= base {
                        viewport.top = viewport.top.max(value);
                    } else {
                        viewport.bottom = viewport.bottom.min(value);
                    }
                }
            }
        }
        Some(viewport)
    }
}

impl Animatable for ColumnChartData {
    fn update(&mut self, progress: f32) {
        for column in &mut self.columns {
            update_all(&mut column.values, progress);
        }
    }

    fn finish(&mut self) {
        for column in &mut self.columns {
            finish_all(&mut column.values);
        }
    }
}

impl HitTestable for ColumnChartData {
    fn check_touch(
        &self,
        computator: &ChartComputator,
        probe: TouchProbe,
    ) -> ChartResult<Option<SelectedValue>> {
        let mut selected = None;
        for column_index in 0..self.columns.len() {
            let rects = self.sub_column_rects(computator, column_index)?;
            for (value_index, rect) in rects.iter().enumerate() {
                if rect.contains(probe.point.x, probe.point.y) {
                    selected = Some(SelectedValue::new(
                        column_index,
                        value_index,
                        SelectedValueType::Column,
                    ));
                }
            }
        }
        Ok(selected)
    }
}
