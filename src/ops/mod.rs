pub mod reorder;
pub mod task_ops;
pub mod column_ops;
pub mod label_ops;
pub mod timer_ops;

pub use reorder::ReorderError;

/// Error type for board operations.
///
/// Every variant is a precondition violation: the operation referenced
/// something that does not exist, and the board is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("label slot {0} out of range")]
    LabelSlotOutOfRange(usize),
    #[error(transparent)]
    Reorder(#[from] ReorderError),
}
