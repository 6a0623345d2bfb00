use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::AnimationDuration;
use crate::core::{PixelPoint, Viewport, ViewportOwner, primitives::ensure_finite};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{AnimationKind, ChartEvent};
use crate::interaction::{ZoomType, zoom_around_focus};

use super::ChartView;
use super::validation::{validate_navigable_viewport, validate_viewport};

/// Direction of a horizontal scroll query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDirection {
    /// Toward smaller data X.
    Left,
    /// Toward larger data X.
    Right,
}

impl ChartView {
    /// Recomputes the maximum viewport from data and shows all of it.
    pub fn reset_viewports(&mut self) {
        let max_viewport = self.data.navigable_viewport();
        self.computator.set_max_viewport(max_viewport);
        self.computator.set_current_viewport(None);
        debug!(viewport = ?self.computator.max_viewport(), "viewports reset from data");
        self.emit_viewport_changed();
    }

    /// Replaces the maximum viewport; `None` falls back to the data extent
    /// or the unit viewport. The current viewport is re-fitted inside it.
    pub fn set_max_viewport(&mut self, viewport: Option<Viewport>) -> ChartResult<()> {
        let viewport = match viewport {
            Some(viewport) => Some(validate_navigable_viewport(viewport)?),
            None => self.data.navigable_viewport(),
        };
        self.computator.set_max_viewport(viewport);
        let constrained = self
            .computator
            .constrain_viewport(self.computator.current_viewport());
        self.commit_viewport(constrained);
        Ok(())
    }

    /// Sets the visible viewport, fitted inside the maximum viewport.
    ///
    /// Cancels a running viewport animation and any fling.
    pub fn set_current_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = validate_viewport(viewport)?;
        self.stop_navigation();
        let constrained = self.computator.constrain_viewport(viewport);
        self.commit_viewport(constrained);
        Ok(())
    }

    /// Animates from the current viewport to `target` (fitted inside the
    /// maximum viewport), replacing any running viewport animation.
    pub fn set_current_viewport_with_animation(
        &mut self,
        target: Viewport,
        duration: AnimationDuration,
        now: Duration,
    ) -> ChartResult<()> {
        let target = validate_viewport(target)?;
        let target = self.computator.constrain_viewport(target);
        self.start_viewport_animation(target, duration, now);
        Ok(())
    }

    /// Cancels a running viewport animation, leaving the viewport where the
    /// last frame put it. Returns whether anything was running.
    pub fn cancel_viewport_animation(&mut self) -> bool {
        let cancelled = self.viewport_animator.cancel();
        if cancelled {
            debug!("viewport animation cancelled");
            self.emit_animation_cancelled(AnimationKind::Viewport);
        }
        cancelled
    }

    /// Centers the current viewport on a data point without changing its
    /// size, saturating at the maximum viewport edges.
    pub fn move_to(&mut self, x: f32, y: f32) -> ChartResult<()> {
        let target = self.scroll_target(x, y)?;
        self.stop_navigation();
        self.commit_viewport(target);
        Ok(())
    }

    pub fn move_to_with_animation(&mut self, x: f32, y: f32, now: Duration) -> ChartResult<()> {
        let target = self.scroll_target(x, y)?;
        self.start_viewport_animation(target, AnimationDuration::Default, now);
        Ok(())
    }

    /// Zooms to `zoom_level` (clamped to `[1, max_zoom]`) centered on a data
    /// point; axes excluded by the zoom type keep their current extent.
    pub fn set_zoom_level(&mut self, x: f32, y: f32, zoom_level: f32) -> ChartResult<()> {
        let target = self.zoom_target(x, y, zoom_level)?;
        self.stop_navigation();
        self.commit_viewport(target);
        Ok(())
    }

    pub fn set_zoom_level_with_animation(
        &mut self,
        x: f32,
        y: f32,
        zoom_level: f32,
        now: Duration,
    ) -> ChartResult<()> {
        let target = self.zoom_target(x, y, zoom_level)?;
        self.start_viewport_animation(target, AnimationDuration::Default, now);
        Ok(())
    }

    /// Scales the viewport by `1 / scale` around a pixel focus on `axes`.
    ///
    /// Fails with `InvalidZoomType` when `axes` is not permitted by the
    /// configured zoom type or when the chart is radial.
    pub fn zoom_by(&mut self, focus: PixelPoint, scale: f32, axes: ZoomType) -> ChartResult<bool> {
        if self.data.kind().is_radial() {
            return Err(ChartError::InvalidZoomType {
                requested: axes,
                allowed: None,
            });
        }
        if !self.config.zoom_type.allows(axes) {
            return Err(ChartError::InvalidZoomType {
                requested: axes,
                allowed: Some(self.config.zoom_type),
            });
        }
        let scale = ensure_finite(scale, "zoom scale")?;
        if scale <= 0.0 {
            return Err(ChartError::InvalidData("zoom scale must be > 0".to_owned()));
        }

        self.stop_navigation();
        let changed = zoom_around_focus(&mut self.computator, focus, scale, axes)?;
        if changed {
            self.emit_viewport_changed();
        }
        Ok(changed)
    }

    /// Whether the viewport can still move toward `direction`; false when not
    /// zoomed in.
    #[must_use]
    pub fn can_scroll_horizontally(&self, direction: HorizontalDirection) -> bool {
        if self.computator.zoom_level() <= 1.0 {
            return false;
        }
        let current = self.computator.current_viewport();
        let max = self.computator.max_viewport();
        match direction {
            HorizontalDirection::Left => current.left > max.left,
            HorizontalDirection::Right => current.right < max.right,
        }
    }

    /// Sets the rotation of radial charts, normalized to `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f32) -> ChartResult<()> {
        let degrees = ensure_finite(degrees, "rotation")?.rem_euclid(360.0);
        self.gestures.cancel_fling();
        if degrees != self.rotation_degrees {
            self.rotation_degrees = degrees;
            self.emit_event(ChartEvent::RotationChanged { degrees });
        }
        Ok(())
    }

    /// Maximum data extent reported by the current data set.
    #[must_use]
    pub fn data_extent(&self) -> Option<Viewport> {
        self.data.calculate_max_viewport()
    }

    pub(super) fn stop_navigation(&mut self) {
        self.cancel_viewport_animation();
        self.gestures.cancel_fling();
    }

    fn start_viewport_animation(
        &mut self,
        target: Viewport,
        duration: AnimationDuration,
        now: Duration,
    ) {
        self.gestures.cancel_fling();
        let start = self.computator.current_viewport();
        if self.viewport_animator.start(start, target, duration, now) {
            self.emit_animation_cancelled(AnimationKind::Viewport);
        }
        self.emit_event(ChartEvent::AnimationStarted {
            kind: AnimationKind::Viewport,
        });
    }

    fn scroll_target(&self, x: f32, y: f32) -> ChartResult<Viewport> {
        let x = ensure_finite(x, "move_to x")?;
        let y = ensure_finite(y, "move_to y")?;
        let current = self.computator.current_viewport();
        let half_width = current.width() * 0.5;
        let half_height = current.height() * 0.5;
        Ok(self.computator.constrain_viewport(Viewport::new(
            x - half_width,
            y + half_height,
            x + half_width,
            y - half_height,
        )))
    }

    fn zoom_target(&self, x: f32, y: f32, zoom_level: f32) -> ChartResult<Viewport> {
        let x = ensure_finite(x, "zoom x")?;
        let y = ensure_finite(y, "zoom y")?;
        let zoom_level = ensure_finite(zoom_level, "zoom level")?
            .max(1.0)
            .min(self.computator.max_zoom());

        let max = self.computator.max_viewport();
        let current = self.computator.current_viewport();
        let half_width = max.width() / zoom_level * 0.5;
        let half_height = max.height() / zoom_level * 0.5;

        let mut target = Viewport::new(x - half_width, y + half_height, x + half_width, y - half_height);
        match self.config.zoom_type {
            ZoomType::Horizontal => {
                target.top = current.top;
                target.bottom = current.bottom;
            }
            ZoomType::Vertical => {
                target.left = current.left;
                target.right = current.right;
            }
            ZoomType::HorizontalAndVertical => {}
        }
        Ok(self.computator.constrain_viewport(target))
    }
}
