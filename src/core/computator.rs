use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{PixelRect, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_MAX_ZOOM: f32 = 20.0;

/// Per-side pixel reservation subtracted from the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

/// Coordinate transform between the current data viewport and the pixel
/// content rectangle.
///
/// The transform never clamps the viewports it is given. Gesture and animation
/// code use [`ChartComputator::constrain_viewport`] before committing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartComputator {
    surface_width: f32,
    surface_height: f32,
    padding: Margins,
    axes_margins: Margins,
    content_rect: PixelRect,
    geometry_valid: bool,
    max_viewport: Viewport,
    current_viewport: Viewport,
    max_zoom: f32,
}

impl Default for ChartComputator {
    fn default() -> Self {
        Self {
            surface_width: 0.0,
            surface_height: 0.0,
            padding: Margins::default(),
            axes_margins: Margins::default(),
            content_rect: PixelRect::new(0.0, 0.0, 1.0, 1.0),
            geometry_valid: false,
            max_viewport: Viewport::UNIT,
            current_viewport: Viewport::UNIT,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ChartComputator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines the drawing surface and its outer padding.
    ///
    /// Fails with [`ChartError::InvalidGeometry`] when nothing drawable remains.
    /// The stored rectangle is still clamped to 1x1 so later projections cannot
    /// divide by zero.
    pub fn set_content_rect(
        &mut self,
        pixel_width: f32,
        pixel_height: f32,
        margin_left: f32,
        margin_top: f32,
        margin_right: f32,
        margin_bottom: f32,
    ) -> ChartResult<()> {
        self.surface_width = pixel_width;
        self.surface_height = pixel_height;
        self.padding = Margins::new(margin_left, margin_top, margin_right, margin_bottom);
        self.recompute_content_rect()
    }

    /// Reserves space for axis labels inside the padded surface.
    pub fn set_axes_margins(&mut self, margins: Margins) -> ChartResult<()> {
        self.axes_margins = margins;
        self.recompute_content_rect()
    }

    #[must_use]
    pub fn axes_margins(&self) -> Margins {
        self.axes_margins
    }

    /// Pixel rectangle available for plotting after every margin.
    #[must_use]
    pub fn content_rect(&self) -> PixelRect {
        self.content_rect
    }

    /// Pixel rectangle after padding, before axis margins.
    #[must_use]
    pub fn content_rect_with_axes(&self) -> PixelRect {
        PixelRect::new(
            self.content_rect.left - self.axes_margins.left,
            self.content_rect.top - self.axes_margins.top,
            self.content_rect.right + self.axes_margins.right,
            self.content_rect.bottom + self.axes_margins.bottom,
        )
    }

    /// `false` until a content rectangle with positive area has been set.
    #[must_use]
    pub fn has_valid_geometry(&self) -> bool {
        self.geometry_valid
    }

    fn recompute_content_rect(&mut self) -> ChartResult<()> {
        let left = self.padding.left + self.axes_margins.left;
        let top = self.padding.top + self.axes_margins.top;
        let right = self.surface_width - self.padding.right - self.axes_margins.right;
        let bottom = self.surface_height - self.padding.bottom - self.axes_margins.bottom;
        let width = right - left;
        let height = bottom - top;

        let finite = self.surface_width.is_finite()
            && self.surface_height.is_finite()
            && self.padding.is_finite()
            && self.axes_margins.is_finite();
        if !finite || !(width > 0.0 && height > 0.0) {
            let safe_left = if left.is_finite() { left } else { 0.0 };
            let safe_top = if top.is_finite() { top } else { 0.0 };
            self.content_rect =
                PixelRect::new(safe_left, safe_top, safe_left + 1.0, safe_top + 1.0);
            self.geometry_valid = false;
            warn!(width, height, "content rectangle has no drawable area");
            return Err(ChartError::InvalidGeometry { width, height });
        }

        self.content_rect = PixelRect::new(
            left,
            top,
            left + width.max(1.0),
            top + height.max(1.0),
        );
        self.geometry_valid = true;
        debug!(
            left,
            top,
            width = self.content_rect.width(),
            height = self.content_rect.height(),
            "content rectangle updated"
        );
        Ok(())
    }

    #[must_use]
    pub fn max_viewport(&self) -> Viewport {
        self.max_viewport
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.current_viewport
    }

    /// Replaces the maximum viewport; `None` restores [`Viewport::UNIT`].
    pub fn set_max_viewport(&mut self, viewport: Option<Viewport>) {
        self.max_viewport = viewport.unwrap_or(Viewport::UNIT);
        debug!(viewport = ?self.max_viewport, "maximum viewport set");
    }

    /// Replaces the current viewport as given; `None` resets it to the maximum.
    pub fn set_current_viewport(&mut self, viewport: Option<Viewport>) {
        self.current_viewport = viewport.unwrap_or(self.max_viewport);
    }

    #[must_use]
    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    pub fn set_max_zoom(&mut self, max_zoom: f32) -> ChartResult<()> {
        if !max_zoom.is_finite() || max_zoom < 1.0 {
            return Err(ChartError::InvalidData(
                "max zoom must be finite and >= 1".to_owned(),
            ));
        }
        self.max_zoom = max_zoom;
        Ok(())
    }

    #[must_use]
    pub fn min_viewport_width(&self) -> f32 {
        self.max_viewport.width() / self.max_zoom
    }

    #[must_use]
    pub fn min_viewport_height(&self) -> f32 {
        self.max_viewport.height() / self.max_zoom
    }

    /// `max(maxWidth / currentWidth, maxHeight / currentHeight)`.
    #[must_use]
    pub fn zoom_level(&self) -> f32 {
        let max = self.max_viewport;
        let current = self.current_viewport;
        (max.width() / current.width()).max(max.height() / current.height())
    }

    pub fn data_to_pixel_x(&self, data_x: f32) -> ChartResult<f32> {
        let width = self.checked_width()?;
        let offset = (data_x - self.current_viewport.left) / width;
        Ok(self.content_rect.left + offset * self.content_rect.width())
    }

    pub fn data_to_pixel_y(&self, data_y: f32) -> ChartResult<f32> {
        let height = self.checked_height()?;
        let offset = (self.current_viewport.top - data_y) / height;
        Ok(self.content_rect.top + offset * self.content_rect.height())
    }

    pub fn pixel_to_data_x(&self, pixel_x: f32) -> ChartResult<f32> {
        let width = self.checked_width()?;
        let fraction = (pixel_x - self.content_rect.left) / self.content_rect.width();
        Ok(self.current_viewport.left + fraction * width)
    }

    pub fn pixel_to_data_y(&self, pixel_y: f32) -> ChartResult<f32> {
        let height = self.checked_height()?;
        let fraction = (pixel_y - self.content_rect.top) / self.content_rect.height();
        Ok(self.current_viewport.top - fraction * height)
    }

    /// Converts a pixel-space length along X into data units.
    pub fn pixel_distance_to_data_x(&self, pixels: f32) -> ChartResult<f32> {
        Ok(pixels * self.checked_width()? / self.content_rect.width())
    }

    /// Converts a pixel-space length along Y into data units (sign preserved).
    pub fn pixel_distance_to_data_y(&self, pixels: f32) -> ChartResult<f32> {
        Ok(pixels * self.checked_height()? / self.content_rect.height())
    }

    /// Unprojects a pixel only when it lies inside the content rectangle.
    pub fn pixel_to_data_point(&self, pixel_x: f32, pixel_y: f32) -> ChartResult<Option<(f32, f32)>> {
        if !self.content_rect.contains(pixel_x, pixel_y) {
            return Ok(None);
        }
        Ok(Some((
            self.pixel_to_data_x(pixel_x)?,
            self.pixel_to_data_y(pixel_y)?,
        )))
    }

    /// Fits `viewport` inside the maximum viewport.
    ///
    /// Width and height are clamped to `[max / max_zoom, max]` around the
    /// viewport center, then the rectangle is translated so no edge leaves the
    /// maximum viewport. Overshoot saturates at the bound.
    #[must_use]
    pub fn constrain_viewport(&self, viewport: Viewport) -> Viewport {
        let max = self.max_viewport;
        let (left, right) = constrain_span(
            viewport.left,
            viewport.right,
            max.left,
            max.right,
            self.min_viewport_width(),
        );
        let (bottom, top) = constrain_span(
            viewport.bottom,
            viewport.top,
            max.bottom,
            max.top,
            self.min_viewport_height(),
        );
        Viewport::new(left, top, right, bottom)
    }

    /// Moves the current viewport so its top-left corner is at (`left`, `top`),
    /// keeping its size and saturating at the maximum viewport edges.
    pub fn set_viewport_top_left(&mut self, left: f32, top: f32) {
        let width = self.current_viewport.width();
        let height = self.current_viewport.height();
        let max = self.max_viewport;

        let left = left.min(max.right - width).max(max.left);
        let top = top.max(max.bottom + height).min(max.top);
        self.current_viewport =
            self.constrain_viewport(Viewport::new(left, top, left + width, top - height));
    }

    fn checked_width(&self) -> ChartResult<f32> {
        let width = self.current_viewport.width();
        if width == 0.0 || !width.is_finite() {
            return Err(self.degenerate());
        }
        Ok(width)
    }

    fn checked_height(&self) -> ChartResult<f32> {
        let height = self.current_viewport.height();
        if height == 0.0 || !height.is_finite() {
            return Err(self.degenerate());
        }
        Ok(height)
    }

    fn degenerate(&self) -> ChartError {
        ChartError::DegenerateViewport {
            width: self.current_viewport.width(),
            height: self.current_viewport.height(),
        }
    }
}

/// Clamps `[low, high]` to a span within `[min_span, bound_high - bound_low]`
/// and slides it inside `[bound_low, bound_high]`.
fn constrain_span(low: f32, high: f32, bound_low: f32, bound_high: f32, min_span: f32) -> (f32, f32) {
    let max_span = bound_high - bound_low;
    let span = (high - low).max(min_span).min(max_span);
    let center = (low + high) * 0.5;

    let mut new_low = center - span * 0.5;
    let mut new_high = new_low + span;
    if new_low < bound_low {
        new_low = bound_low;
        new_high = bound_low + span;
    } else if new_high > bound_high {
        new_high = bound_high;
        new_low = bound_high - span;
    }

    (new_low.max(bound_low), new_high.min(bound_high))
}
