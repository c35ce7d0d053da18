use serde::{Deserialize, Serialize};

/// A named, ordered container of task references.
///
/// The ids are referential, not owning: the tasks live in the board's task
/// registry, and deleting a task strips it from here in the same transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    /// Display order, top of the column first.
    pub task_ids: Vec<String>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Column {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }
}
