use approx::assert_abs_diff_eq;
use hello_viewport::ChartError;
use hello_viewport::core::{ChartComputator, Margins, Viewport};
use proptest::prelude::*;

fn computator_with(width: f32, height: f32, viewport: Viewport) -> ChartComputator {
    let mut computator = ChartComputator::new();
    computator
        .set_content_rect(width, height, 0.0, 0.0, 0.0, 0.0)
        .expect("valid geometry");
    computator.set_max_viewport(Some(viewport));
    computator.set_current_viewport(Some(viewport));
    computator
}

#[test]
fn projection_inverts_y_axis() {
    let computator = computator_with(200.0, 100.0, Viewport::new(0.0, 10.0, 20.0, 0.0));

    assert_abs_diff_eq!(computator.data_to_pixel_x(5.0).expect("x"), 50.0, epsilon = 1e-4);
    assert_abs_diff_eq!(computator.data_to_pixel_y(10.0).expect("top"), 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(computator.data_to_pixel_y(0.0).expect("bottom"), 100.0, epsilon = 1e-4);
    assert_abs_diff_eq!(computator.pixel_to_data_y(25.0).expect("y"), 7.5, epsilon = 1e-4);
}

#[test]
fn margins_shrink_content_rect() {
    let mut computator = ChartComputator::new();
    computator
        .set_content_rect(400.0, 300.0, 10.0, 20.0, 10.0, 20.0)
        .expect("valid geometry");
    computator
        .set_axes_margins(Margins::new(40.0, 0.0, 0.0, 30.0))
        .expect("axes fit");

    let content = computator.content_rect();
    assert_abs_diff_eq!(content.left, 50.0);
    assert_abs_diff_eq!(content.top, 20.0);
    assert_abs_diff_eq!(content.width(), 340.0);
    assert_abs_diff_eq!(content.height(), 230.0);

    let with_axes = computator.content_rect_with_axes();
    assert_abs_diff_eq!(with_axes.left, 10.0);
    assert_abs_diff_eq!(with_axes.bottom, 280.0);
}

#[test]
fn non_positive_content_rect_is_rejected_but_stays_usable() {
    let mut computator = ChartComputator::new();
    let error = computator
        .set_content_rect(20.0, 50.0, 15.0, 0.0, 15.0, 0.0)
        .expect_err("margins exceed width");

    assert!(matches!(error, ChartError::InvalidGeometry { .. }));
    assert!(!computator.has_valid_geometry());
    let content = computator.content_rect();
    assert!(content.width() >= 1.0 && content.height() >= 1.0);
    assert!(computator.data_to_pixel_x(0.5).expect("finite projection").is_finite());
}

#[test]
fn zero_width_viewport_fails_conversion() {
    let mut computator = computator_with(100.0, 100.0, Viewport::new(0.0, 10.0, 10.0, 0.0));
    computator.set_current_viewport(Some(Viewport::new(3.0, 10.0, 3.0, 0.0)));

    let error = computator.data_to_pixel_x(3.0).expect_err("degenerate");
    assert!(matches!(error, ChartError::DegenerateViewport { .. }));
    assert!(computator.data_to_pixel_y(3.0).is_ok());
}

#[test]
fn current_viewport_setter_does_not_clamp() {
    let mut computator = computator_with(100.0, 100.0, Viewport::new(0.0, 10.0, 10.0, 0.0));
    let outside = Viewport::new(-50.0, 80.0, 60.0, -20.0);
    computator.set_current_viewport(Some(outside));
    assert_eq!(computator.current_viewport(), outside);

    computator.set_current_viewport(None);
    assert_eq!(computator.current_viewport(), computator.max_viewport());
}

#[test]
fn zoom_level_uses_tighter_axis() {
    let mut computator = computator_with(100.0, 100.0, Viewport::new(0.0, 100.0, 100.0, 0.0));
    computator.set_current_viewport(Some(Viewport::new(0.0, 100.0, 25.0, 50.0)));
    assert_abs_diff_eq!(computator.zoom_level(), 4.0);
}

#[test]
fn pixel_outside_content_has_no_data_point() {
    let mut computator = ChartComputator::new();
    computator
        .set_content_rect(100.0, 100.0, 10.0, 10.0, 10.0, 10.0)
        .expect("valid geometry");
    assert_eq!(computator.pixel_to_data_point(5.0, 50.0).expect("projection"), None);
    assert!(computator.pixel_to_data_point(50.0, 50.0).expect("projection").is_some());
}

#[test]
fn constrain_viewport_fits_size_and_position() {
    let mut computator = computator_with(100.0, 100.0, Viewport::new(0.0, 100.0, 100.0, 0.0));
    computator.set_max_zoom(10.0).expect("valid max zoom");

    let tiny = computator.constrain_viewport(Viewport::new(50.0, 50.5, 50.5, 50.0));
    assert_abs_diff_eq!(tiny.width(), 10.0, epsilon = 1e-4);
    assert_abs_diff_eq!(tiny.height(), 10.0, epsilon = 1e-4);

    let shifted = computator.constrain_viewport(Viewport::new(95.0, 20.0, 115.0, 0.0));
    assert_abs_diff_eq!(shifted.right, 100.0);
    assert_abs_diff_eq!(shifted.width(), 20.0, epsilon = 1e-4);

    assert!(computator.set_max_zoom(0.5).is_err());
}

proptest! {
    #[test]
    fn projection_round_trips_inside_viewport(
        left in -1_000.0f32..1_000.0,
        bottom in -1_000.0f32..1_000.0,
        width in 1.0f32..500.0,
        height in 1.0f32..500.0,
        fx in 0.0f32..=1.0,
        fy in 0.0f32..=1.0,
        surface_w in 50.0f32..2_000.0,
        surface_h in 50.0f32..2_000.0,
    ) {
        let viewport = Viewport::new(left, bottom + height, left + width, bottom);
        let computator = computator_with(surface_w, surface_h, viewport);
        let x = left + fx * width;
        let y = bottom + fy * height;

        let px = computator.data_to_pixel_x(x).expect("to pixel x");
        let py = computator.data_to_pixel_y(y).expect("to pixel y");
        let back_x = computator.pixel_to_data_x(px).expect("to data x");
        let back_y = computator.pixel_to_data_y(py).expect("to data y");

        let tolerance_x = 1e-3 * (1.0 + x.abs() + width);
        let tolerance_y = 1e-3 * (1.0 + y.abs() + height);
        prop_assert!((back_x - x).abs() <= tolerance_x);
        prop_assert!((back_y - y).abs() <= tolerance_y);
    }
}
