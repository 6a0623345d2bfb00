use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, PixelRect, SelectedValue, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::GestureState;

use super::ChartView;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view state used by regression tests and debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub kind: ChartKind,
    pub content_rect: PixelRect,
    pub max_viewport: Viewport,
    pub current_viewport: Viewport,
    pub zoom_level: f32,
    pub rotation_degrees: f32,
    pub gesture_state: GestureState,
    pub selected_value: Option<SelectedValue>,
    pub viewport_animation_running: bool,
    pub data_animation_running: bool,
    pub data_animation_progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ChartView {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            kind: self.data.kind(),
            content_rect: self.computator.content_rect(),
            max_viewport: self.computator.max_viewport(),
            current_viewport: self.computator.current_viewport(),
            zoom_level: self.computator.zoom_level(),
            rotation_degrees: self.rotation_degrees,
            gesture_state: self.gestures.state(),
            selected_value: self.selected_value(),
            viewport_animation_running: self.viewport_animator.is_running(),
            data_animation_running: self.data_animator.is_running(),
            data_animation_progress: self.data_animator.progress(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
