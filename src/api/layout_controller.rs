use crate::core::{Margins, PixelRect};
use crate::error::ChartResult;

use super::ChartView;

impl ChartView {
    /// Sets the surface size and the padding around the plot area.
    ///
    /// Non-positive results fail with `InvalidGeometry`; the transform then
    /// keeps a 1x1 rectangle and frames are skipped until fixed.
    pub fn set_content_rect(
        &mut self,
        width: f32,
        height: f32,
        padding_left: f32,
        padding_top: f32,
        padding_right: f32,
        padding_bottom: f32,
    ) -> ChartResult<()> {
        self.computator.set_content_rect(
            width,
            height,
            padding_left,
            padding_top,
            padding_right,
            padding_bottom,
        )
    }

    /// Reserves space on each side for axis labels.
    pub fn set_axes_margins(&mut self, margins: Margins) -> ChartResult<()> {
        self.computator.set_axes_margins(margins)
    }

    #[must_use]
    pub fn axes_margins(&self) -> Margins {
        self.computator.axes_margins()
    }

    /// Content rectangle including axis margins.
    #[must_use]
    pub fn content_rect_with_axes(&self) -> PixelRect {
        self.computator.content_rect_with_axes()
    }

    #[must_use]
    pub fn has_valid_geometry(&self) -> bool {
        self.computator.has_valid_geometry()
    }

    pub fn data_to_pixel(&self, x: f32, y: f32) -> ChartResult<(f32, f32)> {
        Ok((
            self.computator.data_to_pixel_x(x)?,
            self.computator.data_to_pixel_y(y)?,
        ))
    }

    pub fn pixel_to_data(&self, x: f32, y: f32) -> ChartResult<(f32, f32)> {
        Ok((
            self.computator.pixel_to_data_x(x)?,
            self.computator.pixel_to_data_y(y)?,
        ))
    }
}
