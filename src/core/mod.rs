pub mod animated_value;
pub mod axis_ticks;
pub mod bubble_series;
pub mod capabilities;
pub mod chart_data;
pub mod column_series;
pub mod computator;
pub mod line_series;
pub mod pie_series;
pub mod primitives;
pub mod selection;
pub mod types;

pub use animated_value::AnimatedValue;
pub use axis_ticks::{
    AxisStops, ValueFormatter, compute_axis_stops, ideal_step_count,
    round_to_one_significant_figure,
};
pub use bubble_series::{BubbleChartData, BubbleValue};
pub use capabilities::{Animatable, HitTestable, TouchProbe, ViewportOwner};
pub use chart_data::{ChartData, ChartKind};
pub use column_series::{Column, ColumnChartData};
pub use computator::{ChartComputator, DEFAULT_MAX_ZOOM, Margins};
pub use line_series::{Line, LineChartData, PointValue};
pub use pie_series::{PieChartData, point_to_angle};
pub use primitives::{PixelPoint, PixelRect};
pub use selection::{SelectedValue, SelectedValueType};
pub use types::Viewport;
