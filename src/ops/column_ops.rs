use serde::{Deserialize, Serialize};

use crate::model::board::Board;
use crate::model::column::Column;

use super::BoardError;
use super::reorder::{reorder, transfer};

/// One end of a task drag: a column and a position within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLocation {
    pub column_id: String,
    pub index: usize,
}

/// Append a new column to the registry and to the end of the display order.
pub fn insert_column(board: &mut Board, column: Column) {
    board.column_order.push(column.id.clone());
    board.columns.insert(column.id.clone(), column);
}

/// Replace a column's title.
pub fn edit_title(board: &mut Board, column_id: &str, title: String) -> Result<(), BoardError> {
    let column = board
        .columns
        .get_mut(column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
    column.title = title;
    Ok(())
}

/// Reorder the column display sequence. Returns true when anything moved.
pub fn reorder_columns(board: &mut Board, from: usize, to: usize) -> Result<bool, BoardError> {
    if from == to {
        return Ok(false);
    }
    reorder(&mut board.column_order, from, to)?;
    Ok(true)
}

/// Move a task card within or between columns. Returns true when anything
/// moved; an identical source and destination is the drag-cancel no-op.
pub fn move_task(
    board: &mut Board,
    source: &TaskLocation,
    dest: &TaskLocation,
) -> Result<bool, BoardError> {
    if source == dest {
        return Ok(false);
    }
    if source.column_id == dest.column_id {
        let column = board
            .columns
            .get_mut(&source.column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(source.column_id.clone()))?;
        reorder(&mut column.task_ids, source.index, dest.index)?;
        return Ok(true);
    }

    // Work on copies so a bad index cannot leave the move half-applied.
    let mut source_ids = board
        .columns
        .get(&source.column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(source.column_id.clone()))?
        .task_ids
        .clone();
    let mut dest_ids = board
        .columns
        .get(&dest.column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(dest.column_id.clone()))?
        .task_ids
        .clone();
    transfer(&mut source_ids, &mut dest_ids, source.index, dest.index)?;

    if let Some(column) = board.columns.get_mut(&source.column_id) {
        column.task_ids = source_ids;
    }
    if let Some(column) = board.columns.get_mut(&dest.column_id) {
        column.task_ids = dest_ids;
    }
    Ok(true)
}
