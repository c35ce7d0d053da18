use serde::{Deserialize, Serialize};

use crate::model::task::TaskPatch;
use crate::ops::column_ops::TaskLocation;

/// A user action forwarded by the render layer.
///
/// Intents are plain data: the render layer describes what the user did and
/// the store decides what, if anything, changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Intent {
    /// Create a column with the configured default title.
    AddColumn,
    EditColumnTitle { column_id: String, title: String },
    /// Create a task at the front of a column.
    AddTask { column_id: String },
    EditTask { task_id: String, patch: TaskPatch },
    /// A finished task drag.
    MoveTask {
        source: TaskLocation,
        destination: TaskLocation,
    },
    /// A finished column drag, by position in the display order.
    ReorderColumns { source: usize, destination: usize },
    StartTimer { task_id: String },
    StopTimer,
    SelectTask { task_id: String },
    /// Open the "new label" entry for a label slot.
    AddLabel { slot: usize },
    /// Commit the "new label" entry.
    SaveNewLabel { text: String },
}
