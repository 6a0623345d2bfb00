use serde::{Deserialize, Serialize};

/// Kind of value a selection points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectedValueType {
    /// `first_index` is the line, `second_index` the point.
    Line,
    /// `first_index` is the column, `second_index` the sub-column.
    Column,
    /// Both indices name the bubble.
    Bubble,
    /// Both indices name the slice.
    Slice,
}

/// One data value inside one series.
///
/// The unset state is modelled as `Option<SelectedValue>::None` by owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedValue {
    pub first_index: usize,
    pub second_index: usize,
    pub kind: SelectedValueType,
}

impl SelectedValue {
    #[must_use]
    pub fn new(first_index: usize, second_index: usize, kind: SelectedValueType) -> Self {
        Self {
            first_index,
            second_index,
            kind,
        }
    }
}
