use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use hello_viewport::core::{
    BubbleChartData, BubbleValue, ChartData, Column, ColumnChartData, Line, LineChartData,
    PieChartData, SelectedValue, SelectedValueType,
};
use hello_viewport::extensions::{ChartContext, ChartEvent, ChartListener};
use hello_viewport::interaction::PointerEvent;
use hello_viewport::{ChartView, ChartViewConfig};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn view_with(data: ChartData, config: ChartViewConfig, width: f32, height: f32) -> ChartView {
    let mut view = ChartView::new(data, config).expect("valid config");
    view.set_content_rect(width, height, 0.0, 0.0, 0.0, 0.0)
        .expect("valid geometry");
    view
}

/// Line points (0,0), (50,40), (100,100) in a 400x300 surface; the middle
/// point sits at pixel (200, 180).
fn line_view(config: ChartViewConfig) -> ChartView {
    let data = ChartData::Line(LineChartData::new(vec![Line::from_xy(&[
        (0.0, 0.0),
        (50.0, 40.0),
        (100.0, 100.0),
    ])]));
    view_with(data, config, 400.0, 300.0)
}

struct SelectionLog {
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl ChartListener for SelectionLog {
    fn id(&self) -> &str {
        "selection-log"
    }

    fn on_event(&mut self, event: ChartEvent, _context: ChartContext) {
        if matches!(
            event,
            ChartEvent::ValueSelected { .. } | ChartEvent::ValueDeselected
        ) {
            self.events.borrow_mut().push(event);
        }
    }
}

fn record_selection(view: &mut ChartView) -> Rc<RefCell<Vec<ChartEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    view.register_listener(Box::new(SelectionLog {
        events: Rc::clone(&events),
    }))
    .expect("register listener");
    events
}

#[test]
fn line_hit_picks_point_within_radius_and_tolerance() {
    let view = line_view(ChartViewConfig::default());

    assert_eq!(
        view.hit_test(205.0, 183.0).expect("hit test"),
        Some(SelectedValue::new(0, 1, SelectedValueType::Line))
    );
    assert_eq!(
        view.hit_test(200.0, 196.0).expect("hit test"),
        Some(SelectedValue::new(0, 1, SelectedValueType::Line))
    );
    assert_eq!(view.hit_test(200.0, 200.0).expect("hit test"), None);
    assert_eq!(view.hit_test(250.0, 100.0).expect("hit test"), None);
}

#[test]
fn nearest_line_point_wins_when_reaches_overlap() {
    let data = ChartData::Line(LineChartData::new(vec![
        Line::from_xy(&[(0.0, 0.0), (10.0, 10.0)]),
        Line::from_xy(&[(0.2, 0.0), (10.0, 9.0)]),
    ]));
    let view = view_with(data, ChartViewConfig::default(), 100.0, 100.0);

    // Points sit at pixel (0, 100) and (2, 100).
    assert_eq!(
        view.hit_test(3.0, 99.0).expect("hit test"),
        Some(SelectedValue::new(1, 0, SelectedValueType::Line))
    );
}

#[test]
fn column_hit_resolves_sub_columns() {
    let data = ChartData::Column(ColumnChartData::new(vec![
        Column::new(&[4.0]),
        Column::new(&[2.0, 6.0]),
    ]));
    let view = view_with(data, ChartViewConfig::default(), 400.0, 300.0);

    assert_eq!(
        view.hit_test(100.0, 200.0).expect("hit test"),
        Some(SelectedValue::new(0, 0, SelectedValueType::Column))
    );
    assert_eq!(
        view.hit_test(260.0, 250.0).expect("hit test"),
        Some(SelectedValue::new(1, 0, SelectedValueType::Column))
    );
    assert_eq!(
        view.hit_test(340.0, 50.0).expect("hit test"),
        Some(SelectedValue::new(1, 1, SelectedValueType::Column))
    );
    assert_eq!(view.hit_test(260.0, 150.0).expect("hit test"), None);
    assert_eq!(view.hit_test(200.0, 250.0).expect("hit test"), None);
}

#[test]
fn pie_hit_accounts_for_rotation() {
    let data = ChartData::Pie(PieChartData::new(&[1.0, 1.0, 2.0]));
    let mut view = view_with(data, ChartViewConfig::default(), 200.0, 200.0);

    let at_45_degrees = (150.0, 150.0);
    assert_eq!(
        view.hit_test(at_45_degrees.0, at_45_degrees.1).expect("hit test"),
        Some(SelectedValue::new(0, 0, SelectedValueType::Slice))
    );

    view.set_rotation(90.0).expect("rotation");
    assert_eq!(
        view.hit_test(at_45_degrees.0, at_45_degrees.1).expect("hit test"),
        Some(SelectedValue::new(2, 2, SelectedValueType::Slice))
    );

    assert_eq!(view.hit_test(100.0, 213.0).expect("hit test"), None);
}

#[test]
fn bubble_hit_uses_scaled_radius() {
    let data = ChartData::Bubble(BubbleChartData::new(vec![
        BubbleValue::new(0.0, 0.0, 10.0),
        BubbleValue::new(10.0, 10.0, 40.0),
    ]));
    let view = view_with(data, ChartViewConfig::default(), 200.0, 200.0);

    // Largest bubble radius is an eighth of the shorter side: 25 px.
    assert_eq!(
        view.hit_test(190.0, 20.0).expect("hit test"),
        Some(SelectedValue::new(1, 1, SelectedValueType::Bubble))
    );
    assert_eq!(
        view.hit_test(10.0, 190.0).expect("hit test"),
        Some(SelectedValue::new(0, 0, SelectedValueType::Bubble))
    );
    assert_eq!(view.hit_test(100.0, 100.0).expect("hit test"), None);
}

#[test]
fn hit_test_without_geometry_finds_nothing() {
    let data = ChartData::Line(LineChartData::new(vec![Line::from_xy(&[(0.0, 0.0)])]));
    let view = ChartView::new(data, ChartViewConfig::default()).expect("valid config");
    assert_eq!(view.hit_test(0.0, 0.0).expect("hit test"), None);
}

#[test]
fn tap_highlights_transiently_without_selection_mode() {
    let mut view = line_view(ChartViewConfig::default());
    let events = record_selection(&mut view);

    assert!(view
        .handle_pointer_event(PointerEvent::down(200.0, 180.0, ms(0)))
        .expect("down"));
    assert_eq!(
        view.selected_value(),
        Some(SelectedValue::new(0, 1, SelectedValueType::Line))
    );

    view.handle_pointer_event(PointerEvent::up(201.0, 181.0, ms(80)))
        .expect("up");
    assert_eq!(view.selected_value(), None);
    assert_eq!(
        *events.borrow(),
        vec![ChartEvent::ValueSelected {
            value: SelectedValue::new(0, 1, SelectedValueType::Line)
        }]
    );
}

#[test]
fn selection_mode_keeps_value_until_miss() {
    let mut view = line_view(ChartViewConfig::default().with_value_selection(true));
    let events = record_selection(&mut view);
    let expected = SelectedValue::new(0, 1, SelectedValueType::Line);

    view.handle_pointer_event(PointerEvent::down(200.0, 180.0, ms(0)))
        .expect("down");
    view.handle_pointer_event(PointerEvent::up(200.0, 180.0, ms(80)))
        .expect("up");
    assert_eq!(view.selected_value(), Some(expected));

    view.handle_pointer_event(PointerEvent::down(300.0, 60.0, ms(2_000)))
        .expect("down on empty space");
    assert_eq!(view.selected_value(), None);
    view.handle_pointer_event(PointerEvent::up(300.0, 60.0, ms(2_080)))
        .expect("up");

    assert_eq!(
        *events.borrow(),
        vec![
            ChartEvent::ValueSelected { value: expected },
            ChartEvent::ValueDeselected,
        ]
    );
}

#[test]
fn panning_drops_pressed_value() {
    let mut view = line_view(ChartViewConfig::default());
    let events = record_selection(&mut view);

    view.handle_pointer_event(PointerEvent::down(200.0, 180.0, ms(0)))
        .expect("down");
    assert!(view.selected_value().is_some());
    view.handle_pointer_event(PointerEvent::moved(240.0, 180.0, ms(16)))
        .expect("move");
    assert_eq!(view.selected_value(), None);
    view.handle_pointer_event(PointerEvent::up(240.0, 180.0, ms(400)))
        .expect("up");

    assert!(events.borrow().is_empty());
}

#[test]
fn disabled_value_touch_skips_hit_testing() {
    let mut view = line_view(ChartViewConfig::default());
    view.set_value_touch_enabled(false);

    view.handle_pointer_event(PointerEvent::down(200.0, 180.0, ms(0)))
        .expect("down");
    assert_eq!(view.selected_value(), None);
}

#[test]
fn programmatic_selection_round_trip() {
    let mut view = line_view(ChartViewConfig::default());
    let events = record_selection(&mut view);
    let value = SelectedValue::new(0, 2, SelectedValueType::Line);

    view.select_value(value);
    assert_eq!(view.selected_value(), Some(value));
    view.clear_selection();
    assert_eq!(view.selected_value(), None);
    view.clear_selection();

    assert_eq!(
        *events.borrow(),
        vec![ChartEvent::ValueSelected { value }, ChartEvent::ValueDeselected]
    );
}
