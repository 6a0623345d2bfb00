//! hello-viewport: viewport coordinate engine for interactive charts.
//!
//! The crate maps a data viewport onto a pixel content rectangle, picks
//! readable axis ticks, turns pointer sequences into pan/zoom/rotate
//! navigation and animates viewport and data transitions. Drawing stays with
//! the host; it reads projections, ticks and selection back from
//! [`ChartView`].

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ChartError, ChartResult};
