use crate::model::board::Board;
use crate::model::label::{LabelCatalog, PendingLabel};
use crate::model::task::LABEL_SLOTS;

use super::BoardError;

/// Open the "new label" entry for one of the fixed label slots.
pub fn open_new_label(catalog: &mut LabelCatalog, slot: usize) -> Result<(), BoardError> {
    if slot >= LABEL_SLOTS {
        return Err(BoardError::LabelSlotOutOfRange(slot));
    }
    catalog.pending = Some(PendingLabel { slot });
    Ok(())
}

/// Commit the pending "new label" entry.
///
/// A fresh, non-empty label joins the catalog and lands in the selected
/// task's pending slot. Empty or duplicate text changes neither the catalog
/// nor any task. Either way the pending entry is consumed. Returns true when
/// anything observable changed.
pub fn save_new_label(board: &mut Board, catalog: &mut LabelCatalog, text: &str) -> bool {
    let pending = catalog.pending.take();
    if text.is_empty() || catalog.contains(text) {
        return pending.is_some();
    }
    catalog.labels.push(text.to_string());
    if let Some(PendingLabel { slot }) = pending
        && let Some(task) = board.tasks.values_mut().find(|t| t.selected)
    {
        task.labels[slot] = Some(text.to_string());
    }
    true
}
