mod axis_controller;
mod chart_view;
mod data_controller;
mod event_dispatch;
mod frame_driver;
mod input_controller;
mod layout_controller;
mod listener_registry;
mod navigation_controller;
mod snapshot;
mod validation;
mod view_config;

pub use axis_controller::{AxisLabelMetrics, AxisOrientation};
pub use chart_view::ChartView;
pub use navigation_controller::HorizontalDirection;
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};
pub use view_config::{ChartViewConfig, DEFAULT_TOUCH_TOLERANCE_PX};
