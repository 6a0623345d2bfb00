use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FlingConfig, GestureConfig};

use super::ChartViewConfig;

pub(super) fn validate_fling_config(config: FlingConfig) -> ChartResult<FlingConfig> {
    if !config.decay_per_second.is_finite()
        || config.decay_per_second <= 0.0
        || config.decay_per_second >= 1.0
    {
        return Err(ChartError::InvalidData(
            "fling decay_per_second must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !config.stop_velocity_px_per_sec.is_finite() || config.stop_velocity_px_per_sec <= 0.0 {
        return Err(ChartError::InvalidData(
            "fling stop_velocity_px_per_sec must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_gesture_config(config: GestureConfig) -> ChartResult<GestureConfig> {
    let non_negative = [
        ("touch_slop_px", config.touch_slop_px),
        ("double_tap_slop_px", config.double_tap_slop_px),
        ("min_fling_velocity_px_per_sec", config.min_fling_velocity_px_per_sec),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "gesture {name} must be finite and >= 0"
            )));
        }
    }
    if !config.max_fling_velocity_px_per_sec.is_finite()
        || config.max_fling_velocity_px_per_sec < config.min_fling_velocity_px_per_sec
    {
        return Err(ChartError::InvalidData(
            "gesture max_fling_velocity_px_per_sec must be finite and >= the minimum".to_owned(),
        ));
    }
    if !config.double_tap_zoom_factor.is_finite() || config.double_tap_zoom_factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "gesture double_tap_zoom_factor must be finite and > 0".to_owned(),
        ));
    }
    if !config.rotation_downscale.is_finite() || config.rotation_downscale <= 0.0 {
        return Err(ChartError::InvalidData(
            "gesture rotation_downscale must be finite and > 0".to_owned(),
        ));
    }
    validate_fling_config(config.fling)?;
    Ok(config)
}

pub(super) fn validate_view_config(config: ChartViewConfig) -> ChartResult<ChartViewConfig> {
    if !config.max_zoom.is_finite() || config.max_zoom < 1.0 {
        return Err(ChartError::InvalidData(
            "max_zoom must be finite and >= 1".to_owned(),
        ));
    }
    if !config.touch_tolerance_px.is_finite() || config.touch_tolerance_px < 0.0 {
        return Err(ChartError::InvalidData(
            "touch_tolerance_px must be finite and >= 0".to_owned(),
        ));
    }
    validate_gesture_config(config.gestures)?;
    Ok(config)
}

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_finite() {
        return Err(ChartError::InvalidData(
            "viewport edges must be finite".to_owned(),
        ));
    }
    Ok(viewport)
}

/// Rejects viewports a conversion could not divide by.
pub(super) fn validate_navigable_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    validate_viewport(viewport)?;
    if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
        return Err(ChartError::DegenerateViewport {
            width: viewport.width(),
            height: viewport.height(),
        });
    }
    Ok(viewport)
}

#[cfg(test)]
mod tests {
    use super::{validate_fling_config, validate_navigable_viewport, validate_view_config};
    use crate::api::ChartViewConfig;
    use crate::core::Viewport;
    use crate::error::ChartError;
    use crate::interaction::FlingConfig;

    #[test]
    fn fling_decay_must_be_a_fraction() {
        let config = FlingConfig {
            decay_per_second: 1.0,
            stop_velocity_px_per_sec: 20.0,
        };
        assert!(validate_fling_config(config).is_err());
    }

    #[test]
    fn max_zoom_below_one_is_rejected() {
        let config = ChartViewConfig::default().with_max_zoom(0.5);
        assert!(matches!(
            validate_view_config(config),
            Err(ChartError::InvalidData(_))
        ));
    }

    #[test]
    fn inverted_viewport_is_degenerate() {
        let error = validate_navigable_viewport(Viewport::new(5.0, 0.0, 1.0, 1.0))
            .expect_err("inverted viewport");
        assert!(matches!(error, ChartError::DegenerateViewport { .. }));
    }
}
