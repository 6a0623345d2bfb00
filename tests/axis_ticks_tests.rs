use hello_viewport::ChartError;
use hello_viewport::core::{AxisStops, ValueFormatter, compute_axis_stops, ideal_step_count};
use proptest::prelude::*;

fn assert_stops(stops: &AxisStops, expected: &[f32]) {
    assert_eq!(stops.len(), expected.len(), "stops: {:?}", stops.values());
    for (actual, expected) in stops.values().iter().zip(expected) {
        assert!(
            (actual - expected).abs() <= 1e-5,
            "expected {expected}, got {actual}"
        );
    }
}

#[test]
fn whole_number_range_produces_round_ticks() {
    let mut stops = AxisStops::new();
    compute_axis_stops(0.0, 100.0, 5, &mut stops).expect("valid range");

    assert_stops(&stops, &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(stops.decimals(), 0);
}

#[test]
fn unit_range_keeps_upper_bound_tick() {
    let mut stops = AxisStops::new();
    compute_axis_stops(0.0, 1.0, 4, &mut stops).expect("valid range");

    assert_stops(&stops, &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(stops.decimals(), 1);
}

#[test]
fn large_leading_digit_promotes_to_next_power_of_ten() {
    let mut stops = AxisStops::new();
    compute_axis_stops(0.0, 70.0, 10, &mut stops).expect("valid range");

    assert_stops(&stops, &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);
}

#[test]
fn ticks_straddle_zero_for_negative_ranges() {
    let mut stops = AxisStops::new();
    compute_axis_stops(-5.0, 5.0, 4, &mut stops).expect("valid range");

    assert_stops(&stops, &[-4.0, -2.0, 0.0, 2.0, 4.0]);
}

#[test]
fn empty_inputs_produce_no_ticks() {
    let mut stops = AxisStops::new();
    compute_axis_stops(0.0, 10.0, 5, &mut stops).expect("valid range");
    assert!(!stops.is_empty());

    compute_axis_stops(3.0, 3.0, 5, &mut stops).expect("equal bounds");
    assert!(stops.is_empty());

    compute_axis_stops(0.0, 10.0, 0, &mut stops).expect("zero steps");
    assert!(stops.is_empty());
}

#[test]
fn reversed_or_non_finite_range_is_rejected() {
    let mut stops = AxisStops::new();
    let error = compute_axis_stops(10.0, 0.0, 5, &mut stops).expect_err("reversed");
    assert!(matches!(error, ChartError::InvalidRange { .. }));

    let error = compute_axis_stops(0.0, f32::NAN, 5, &mut stops).expect_err("nan");
    assert!(matches!(error, ChartError::InvalidRange { .. }));
    assert!(stops.is_empty());
}

#[test]
fn generation_is_deterministic_and_reuses_buffer() {
    let mut first = AxisStops::with_capacity(32);
    let mut second = AxisStops::new();
    compute_axis_stops(-12.5, 987.25, 7, &mut first).expect("valid range");
    compute_axis_stops(-12.5, 987.25, 7, &mut second).expect("valid range");
    assert_eq!(first, second);

    let capacity = first.capacity();
    for _ in 0..16 {
        compute_axis_stops(0.0, 100.0, 5, &mut first).expect("valid range");
    }
    assert_eq!(first.capacity(), capacity);
}

#[test]
fn ideal_step_count_leaves_label_sized_gaps() {
    assert_eq!(ideal_step_count(400.0, 40.0), 5);
    assert_eq!(ideal_step_count(100.0, 0.0), 0);
    assert_eq!(ideal_step_count(-5.0, 10.0), 0);
}

#[test]
fn formatter_applies_digits_separator_and_affixes() {
    let mut stops = AxisStops::new();
    compute_axis_stops(0.0, 1.0, 4, &mut stops).expect("valid range");

    let labels = ValueFormatter::default()
        .with_decimal_separator(',')
        .with_affixes("~", " kg")
        .format_stops(&stops);
    assert_eq!(labels.first().map(String::as_str), Some("~0,0 kg"));
    assert_eq!(labels.last().map(String::as_str), Some("~1,0 kg"));

    let fixed = ValueFormatter::default().with_decimal_digits(3);
    assert_eq!(fixed.format(2.5, 0), "2.500");
    assert_eq!(ValueFormatter::default().format(-0.01, 1), "0.0");
}

#[test]
fn formatter_round_trips_through_json() {
    let formatter = ValueFormatter::default().with_affixes("$", "");
    let json = serde_json::to_string(&formatter).expect("serialize");
    let restored: ValueFormatter = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, formatter);

    let partial: ValueFormatter = serde_json::from_str("{}").expect("defaults");
    assert_eq!(partial, ValueFormatter::default());
}

proptest! {
    #[test]
    fn ticks_stay_inside_range_and_ascend(
        start in -10_000.0f32..10_000.0,
        span in 0.001f32..50_000.0,
        steps in 1usize..40,
    ) {
        let stop = start + span;
        let mut stops = AxisStops::new();
        compute_axis_stops(start, stop, steps, &mut stops).expect("valid range");

        let slack = 1e-4 * (1.0 + start.abs().max(stop.abs()));
        for value in stops.values() {
            prop_assert!(*value >= start - slack && *value <= stop + slack);
        }
        for pair in stops.values().windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        prop_assert!(stops.len() <= steps * 3 + 1);
    }
}
