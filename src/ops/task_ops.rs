use crate::model::board::Board;
use crate::model::task::{LABEL_SLOTS, Task, TaskPatch};

use super::BoardError;

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

/// Insert a freshly created task at the front of a column (newest first).
pub fn insert_task(board: &mut Board, column_id: &str, task: Task) -> Result<(), BoardError> {
    let column = board
        .columns
        .get_mut(column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
    column.task_ids.insert(0, task.id.clone());
    board.tasks.insert(task.id.clone(), task);
    Ok(())
}

/// Apply one edit to a task. Returns true when the board changed.
///
/// An unknown task id is recoverable: the caller logs it and the board is
/// returned unchanged.
pub fn edit_task(board: &mut Board, task_id: &str, patch: TaskPatch) -> Result<bool, BoardError> {
    match patch {
        TaskPatch::Delete => {
            delete_task(board, task_id)?;
            Ok(true)
        }
        TaskPatch::Content(text) => {
            task_mut(board, task_id)?.content = text;
            Ok(true)
        }
        TaskPatch::Assignee(name) => {
            task_mut(board, task_id)?.assignee = name;
            Ok(true)
        }
        TaskPatch::Label { slot, label } => {
            if slot >= LABEL_SLOTS {
                return Err(BoardError::LabelSlotOutOfRange(slot));
            }
            task_mut(board, task_id)?.labels[slot] = label;
            Ok(true)
        }
        TaskPatch::GoalTime(raw) => Ok(set_goal_time(task_mut(board, task_id)?, &raw)),
    }
}

/// Remove a task from the registry and strip its id from every column's
/// task sequence in the same transition.
pub fn delete_task(board: &mut Board, task_id: &str) -> Result<(), BoardError> {
    if board.tasks.shift_remove(task_id).is_none() {
        return Err(BoardError::TaskNotFound(task_id.to_string()));
    }
    for column in board.columns.values_mut() {
        column.task_ids.retain(|id| id != task_id);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Free-text goal input. Whole minute counts are stored normalized; empty
/// input clears the goal; anything else is dropped without touching the
/// field. Returns true when the field changed.
fn set_goal_time(task: &mut Task, raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        let changed = task.goal_time.is_some();
        task.goal_time = None;
        return changed;
    }
    match raw.parse::<u64>() {
        Ok(minutes) => {
            task.goal_time = Some(minutes.to_string());
            true
        }
        Err(_) => false,
    }
}

fn task_mut<'a>(board: &'a mut Board, task_id: &str) -> Result<&'a mut Task, BoardError> {
    board
        .tasks
        .get_mut(task_id)
        .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::Column;
    use crate::ops::column_ops;

    fn sample_board() -> Board {
        let mut board = Board::default();
        column_ops::insert_column(&mut board, Column::new("column-1", "Todo"));
        column_ops::insert_column(&mut board, Column::new("column-2", "Doing"));
        // Front insertion leaves column-1 as [task-1, task-2, task-3].
        for id in ["task-3", "task-2", "task-1"] {
            insert_task(&mut board, "column-1", Task::new(id, format!("Task {id}"))).unwrap();
        }
        board
    }

    // --- insert ---

    #[test]
    fn test_insert_task_goes_to_front() {
        let mut board = sample_board();
        insert_task(&mut board, "column-1", Task::new("task-4", "Newest")).unwrap();
        let column = board.column("column-1").unwrap();
        assert_eq!(column.task_ids[0], "task-4");
        assert_eq!(column.task_ids.len(), 4);
        assert!(board.task("task-4").is_some());
    }

    #[test]
    fn test_insert_task_unknown_column() {
        let mut board = sample_board();
        let err = insert_task(&mut board, "column-9", Task::new("task-4", "Lost")).unwrap_err();
        assert_eq!(err, BoardError::ColumnNotFound("column-9".to_string()));
        // Nothing registered, nothing referenced.
        assert!(board.task("task-4").is_none());
        assert_eq!(board.verify(), Ok(()));
    }

    // --- edit ---

    #[test]
    fn test_edit_content() {
        let mut board = sample_board();
        let changed =
            edit_task(&mut board, "task-1", TaskPatch::Content("Rewritten".into())).unwrap();
        assert!(changed);
        assert_eq!(board.task("task-1").unwrap().content, "Rewritten");
    }

    #[test]
    fn test_edit_assignee() {
        let mut board = sample_board();
        edit_task(&mut board, "task-2", TaskPatch::Assignee("Ana".into())).unwrap();
        assert_eq!(board.task("task-2").unwrap().assignee, "Ana");
    }

    #[test]
    fn test_edit_unknown_task() {
        let mut board = sample_board();
        let before = board.clone();
        let err = edit_task(&mut board, "task-9", TaskPatch::Content("x".into())).unwrap_err();
        assert_eq!(err, BoardError::TaskNotFound("task-9".to_string()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_label_slot() {
        let mut board = sample_board();
        edit_task(
            &mut board,
            "task-1",
            TaskPatch::Label {
                slot: 1,
                label: Some("urgent".into()),
            },
        )
        .unwrap();
        let task = board.task("task-1").unwrap();
        assert_eq!(task.labels, [None, Some("urgent".to_string())]);

        // Clearing puts the slot back to empty.
        edit_task(&mut board, "task-1", TaskPatch::Label { slot: 1, label: None }).unwrap();
        assert_eq!(board.task("task-1").unwrap().labels, [None, None]);
    }

    #[test]
    fn test_set_label_slot_out_of_range() {
        let mut board = sample_board();
        let err = edit_task(
            &mut board,
            "task-1",
            TaskPatch::Label {
                slot: 2,
                label: Some("nope".into()),
            },
        )
        .unwrap_err();
        assert_eq!(err, BoardError::LabelSlotOutOfRange(2));
    }

    // --- goal time ---

    #[test]
    fn test_goal_time_valid_digits() {
        let mut board = sample_board();
        let changed = edit_task(&mut board, "task-1", TaskPatch::GoalTime("45".into())).unwrap();
        assert!(changed);
        assert_eq!(
            board.task("task-1").unwrap().goal_time,
            Some("45".to_string())
        );
    }

    #[test]
    fn test_goal_time_normalizes_leading_zeros() {
        let mut board = sample_board();
        edit_task(&mut board, "task-1", TaskPatch::GoalTime("045".into())).unwrap();
        assert_eq!(
            board.task("task-1").unwrap().goal_time,
            Some("45".to_string())
        );
    }

    #[test]
    fn test_goal_time_non_numeric_is_discarded() {
        let mut board = sample_board();
        edit_task(&mut board, "task-1", TaskPatch::GoalTime("45".into())).unwrap();
        let changed = edit_task(&mut board, "task-1", TaskPatch::GoalTime("abc".into())).unwrap();
        assert!(!changed);
        assert_eq!(
            board.task("task-1").unwrap().goal_time,
            Some("45".to_string())
        );
    }

    #[test]
    fn test_goal_time_empty_clears() {
        let mut board = sample_board();
        edit_task(&mut board, "task-1", TaskPatch::GoalTime("45".into())).unwrap();
        let changed = edit_task(&mut board, "task-1", TaskPatch::GoalTime("".into())).unwrap();
        assert!(changed);
        assert_eq!(board.task("task-1").unwrap().goal_time, None);
    }

    #[test]
    fn test_goal_time_clear_when_already_empty_reports_no_change() {
        let mut board = sample_board();
        let changed = edit_task(&mut board, "task-1", TaskPatch::GoalTime("".into())).unwrap();
        assert!(!changed);
    }

    // --- delete ---

    #[test]
    fn test_delete_removes_task_and_references() {
        let mut board = sample_board();
        // Reference the task from a second column too.
        board
            .columns
            .get_mut("column-2")
            .unwrap()
            .task_ids
            .push("task-2".to_string());

        edit_task(&mut board, "task-2", TaskPatch::Delete).unwrap();

        assert!(board.task("task-2").is_none());
        for column in board.columns.values() {
            assert!(!column.task_ids.contains(&"task-2".to_string()));
        }
        assert_eq!(board.verify(), Ok(()));
    }

    #[test]
    fn test_delete_unknown_task() {
        let mut board = sample_board();
        let err = edit_task(&mut board, "task-9", TaskPatch::Delete).unwrap_err();
        assert_eq!(err, BoardError::TaskNotFound("task-9".to_string()));
    }
}
