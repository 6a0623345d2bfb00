use std::cell::RefCell;
use std::rc::Rc;

use hello_viewport::core::{ChartData, ChartKind, Line, LineChartData, PieChartData, Viewport};
use hello_viewport::extensions::{ChartContext, ChartEvent, ChartListener};
use hello_viewport::{ChartError, ChartView, ChartViewConfig};

type Log = Rc<RefCell<Vec<(String, ChartEvent, ChartContext)>>>;

struct RecordingListener {
    id: String,
    log: Log,
}

impl RecordingListener {
    fn boxed(id: &str, log: &Log) -> Box<dyn ChartListener> {
        Box::new(Self {
            id: id.to_owned(),
            log: Rc::clone(log),
        })
    }
}

impl ChartListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: ChartEvent, context: ChartContext) {
        self.log.borrow_mut().push((self.id.clone(), event, context));
    }
}

fn line_view() -> ChartView {
    let data = ChartData::Line(LineChartData::new(vec![Line::from_xy(&[
        (0.0, 0.0),
        (10.0, 10.0),
    ])]));
    let mut view = ChartView::new(data, ChartViewConfig::default()).expect("valid config");
    view.set_content_rect(100.0, 100.0, 0.0, 0.0, 0.0, 0.0)
        .expect("valid geometry");
    view
}

#[test]
fn duplicate_and_empty_ids_are_rejected() {
    let log = Log::default();
    let mut view = line_view();

    view.register_listener(RecordingListener::boxed("a", &log))
        .expect("first registration");
    let duplicate = view
        .register_listener(RecordingListener::boxed("a", &log))
        .expect_err("duplicate id");
    assert!(matches!(duplicate, ChartError::InvalidData(_)));
    let empty = view
        .register_listener(RecordingListener::boxed("", &log))
        .expect_err("empty id");
    assert!(matches!(empty, ChartError::InvalidData(_)));

    assert_eq!(view.listener_count(), 1);
    assert!(view.has_listener("a"));
}

#[test]
fn listeners_receive_events_in_registration_order() {
    let log = Log::default();
    let mut view = line_view();
    for id in ["first", "second", "third"] {
        view.register_listener(RecordingListener::boxed(id, &log))
            .expect("register");
    }
    assert!(view.unregister_listener("second"));
    assert!(!view.unregister_listener("second"));

    view.set_current_viewport(Viewport::new(0.0, 5.0, 5.0, 0.0))
        .expect("set viewport");

    let log = log.borrow();
    let ids: Vec<&str> = log.iter().map(|(id, _, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["first", "third"]);
}

#[test]
fn context_reflects_state_after_change() {
    let log = Log::default();
    let mut view = line_view();
    view.register_listener(RecordingListener::boxed("ctx", &log))
        .expect("register");

    let target = Viewport::new(2.0, 7.0, 7.0, 2.0);
    view.set_current_viewport(target).expect("set viewport");

    let log = log.borrow();
    let (_, event, context) = log.last().expect("event delivered");
    assert_eq!(*event, ChartEvent::ViewportChanged { viewport: target });
    assert_eq!(context.kind, ChartKind::Line);
    assert_eq!(context.current_viewport, target);
    assert_eq!(context.max_viewport, Viewport::new(0.0, 10.0, 10.0, 0.0));
    assert!((context.zoom_level - 2.0).abs() < 1e-6);
}

#[test]
fn unchanged_viewport_is_not_reported() {
    let log = Log::default();
    let mut view = line_view();
    view.register_listener(RecordingListener::boxed("quiet", &log))
        .expect("register");

    let current = view.current_viewport();
    view.set_current_viewport(current).expect("same viewport");
    view.move_to(5.0, 5.0).expect("centered already");

    assert!(log.borrow().is_empty());
}

#[test]
fn switching_chart_family_resets_rotation_and_viewport() {
    let log = Log::default();
    let mut view = ChartView::new(
        ChartData::Pie(PieChartData::new(&[1.0, 2.0])),
        ChartViewConfig::default(),
    )
    .expect("valid config");
    view.set_rotation(45.0).expect("rotation");
    view.register_listener(RecordingListener::boxed("switch", &log))
        .expect("register");

    view.set_data(ChartData::Line(LineChartData::new(vec![Line::from_xy(&[
        (0.0, 0.0),
        (4.0, 2.0),
    ])])));

    assert_eq!(view.kind(), ChartKind::Line);
    assert_eq!(view.rotation(), 0.0);
    assert_eq!(view.current_viewport(), Viewport::new(0.0, 2.0, 4.0, 0.0));

    let events: Vec<ChartEvent> = log.borrow().iter().map(|(_, event, _)| *event).collect();
    assert_eq!(
        events,
        vec![
            ChartEvent::RotationChanged { degrees: 0.0 },
            ChartEvent::ViewportChanged {
                viewport: Viewport::new(0.0, 2.0, 4.0, 0.0)
            },
        ]
    );
}
