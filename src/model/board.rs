use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::Column;
use super::task::Task;

/// The aggregate the render layer draws: every task, every column, and the
/// left-to-right column display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Task registry, keyed by task id.
    pub tasks: IndexMap<String, Task>,
    /// Column registry, keyed by column id.
    pub columns: IndexMap<String, Column>,
    /// Column display order, independent of each column's task order.
    pub column_order: Vec<String>,
}

/// A broken cross-reference invariant.
///
/// A correct sequence of transitions never produces one of these; they exist
/// so the invariants can be checked directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("column order references unknown column {0}")]
    UnknownColumnInOrder(String),
    #[error("column {column_id} references unknown task {task_id}")]
    DanglingTaskRef { column_id: String, task_id: String },
    #[error("task {0} appears in more than one column slot")]
    DuplicateTaskRef(String),
    #[error("tasks {0} and {1} are both active")]
    MultipleActive(String, String),
}

impl Board {
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id)
    }

    /// The task currently being timed, if any.
    pub fn active_task(&self) -> Option<&Task> {
        self.tasks.values().find(|t| t.active)
    }

    /// The task currently selected, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.values().find(|t| t.selected)
    }

    /// Columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// Check every cross-reference invariant: each ordered column id resolves,
    /// each referenced task id resolves exactly once, and at most one task is
    /// active.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return Err(IntegrityError::UnknownColumnInOrder(id.clone()));
            }
        }
        let mut seen = HashSet::new();
        for column in self.columns.values() {
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(IntegrityError::DanglingTaskRef {
                        column_id: column.id.clone(),
                        task_id: task_id.clone(),
                    });
                }
                if !seen.insert(task_id) {
                    return Err(IntegrityError::DuplicateTaskRef(task_id.clone()));
                }
            }
        }
        let mut active = self.tasks.values().filter(|t| t.active);
        if let (Some(a), Some(b)) = (active.next(), active.next()) {
            return Err(IntegrityError::MultipleActive(a.id.clone(), b.id.clone()));
        }
        Ok(())
    }
}
