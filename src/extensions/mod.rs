//! Observer surface for hosts that react to chart state changes.

pub mod listeners;

pub use listeners::{AnimationKind, ChartContext, ChartEvent, ChartListener};
