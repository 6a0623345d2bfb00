use serde::{Deserialize, Serialize};

use crate::core::{
    Animatable, BubbleChartData, ChartComputator, ColumnChartData, HitTestable, LineChartData,
    PieChartData, SelectedValue, TouchProbe, Viewport, ViewportOwner,
};
use crate::error::ChartResult;

/// Chart family, fixed when a chart is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Column,
    Bubble,
    Pie,
}

impl ChartKind {
    /// Radial charts rotate on drag instead of panning and never zoom.
    #[must_use]
    pub fn is_radial(self) -> bool {
        matches!(self, Self::Pie)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartData {
    Line(LineChartData),
    Column(ColumnChartData),
    Bubble(BubbleChartData),
    Pie(PieChartData),
}

impl ChartData {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line(_) => ChartKind::Line,
            Self::Column(_) => ChartKind::Column,
            Self::Bubble(_) => ChartKind::Bubble,
            Self::Pie(_) => ChartKind::Pie,
        }
    }

    /// Maximum viewport with zero-sized extents widened to one data unit.
    #[must_use]
    pub fn navigable_viewport(&self) -> Option<Viewport> {
        self.calculate_max_viewport().map(|viewport| {
            let mut viewport = viewport;
            if viewport.width() <= 0.0 {
                viewport.left -= 0.5;
                viewport.right += 0.5;
            }
            if viewport.height() <= 0.0 {
                viewport.top += 0.5;
                viewport.bottom -= 0.5;
            }
            viewport
        })
    }
}

impl ViewportOwner for ChartData {
    fn calculate_max_viewport(&self) -> Option<Viewport> {
        match self {
            Self::Line(data) => data.calculate_max_viewport(),
            Self::Column(data) => data.calculate_max_viewport(),
            Self::Bubble(data) => data.calculate_max_viewport(),
            Self::Pie(data) => data.calculate_max_viewport(),
        }
    }
}

impl Animatable for ChartData {
    fn update(&mut self, progress: f32) {
        match self {
            Self::Line(data) => data.update(progress),
            Self::Column(data) => data.update(progress),
            Self::Bubble(data) => data.update(progress),
            Self::Pie(data) => data.update(progress),
        }
    }

    fn finish(&mut self) {
        match self {
            Self::Line(data) => data.finish(),
            Self::Column(data) => data.finish(),
            Self::Bubble(data) => data.finish(),
            Self::Pie(data) => data.finish(),
        }
    }
}

impl HitTestable for ChartData {
    fn check_touch(
        &self,
        computator: &ChartComputator,
        probe: TouchProbe,
    ) -> ChartResult<Option<SelectedValue>> {
        match self {
            Self::Line(data) => data.check_touch(computator, probe),
            Self::Column(data) => data.check_touch(computator, probe),
            Self::Bubble(data) => data.check_touch(computator, probe),
            Self::Pie(data) => data.check_touch(computator, probe),
        }
    }
}
