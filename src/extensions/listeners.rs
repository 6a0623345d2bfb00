use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, SelectedValue, Viewport};
use crate::interaction::GestureState;

/// Which animator an animation event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKind {
    Viewport,
    Data,
}

/// Notifications delivered to registered listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    ViewportChanged { viewport: Viewport },
    RotationChanged { degrees: f32 },
    AnimationStarted { kind: AnimationKind },
    AnimationFinished { kind: AnimationKind },
    /// Stopped before completion, either explicitly or by a newer animation.
    AnimationCancelled { kind: AnimationKind },
    ValueSelected { value: SelectedValue },
    ValueDeselected,
}

/// Read-only view state passed along with every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartContext {
    pub kind: ChartKind,
    pub current_viewport: Viewport,
    pub max_viewport: Viewport,
    pub zoom_level: f32,
    pub rotation_degrees: f32,
    pub gesture_state: GestureState,
    pub selected_value: Option<SelectedValue>,
}

/// Observer hook for chart state changes.
///
/// Listeners observe events and read context; they cannot mutate the view
/// from inside a callback.
pub trait ChartListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ChartContext);
}
