/// Error type for reorder operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("source index {index} out of bounds (len {len})")]
    SourceOutOfBounds { index: usize, len: usize },
    #[error("destination index {index} out of bounds (len {len})")]
    DestinationOutOfBounds { index: usize, len: usize },
}

/// Move the element at `from` to `to` within one sequence.
///
/// Standard drag-reorder semantics: the element is removed first and `to`
/// addresses the shortened sequence, so `to == len - 1` drops it at the end.
pub fn reorder<T>(seq: &mut Vec<T>, from: usize, to: usize) -> Result<(), ReorderError> {
    if from >= seq.len() {
        return Err(ReorderError::SourceOutOfBounds {
            index: from,
            len: seq.len(),
        });
    }
    if to >= seq.len() {
        return Err(ReorderError::DestinationOutOfBounds {
            index: to,
            len: seq.len(),
        });
    }
    if from == to {
        return Ok(());
    }
    let item = seq.remove(from);
    seq.insert(to, item);
    Ok(())
}

/// Move the element at `from` in `source` to position `to` in `dest`.
///
/// The two sequences must be distinct. Both indices are validated before
/// either sequence is touched, so a bad index cannot leave the move
/// half-applied.
pub fn transfer<T>(
    source: &mut Vec<T>,
    dest: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<(), ReorderError> {
    if from >= source.len() {
        return Err(ReorderError::SourceOutOfBounds {
            index: from,
            len: source.len(),
        });
    }
    if to > dest.len() {
        return Err(ReorderError::DestinationOutOfBounds {
            index: to,
            len: dest.len(),
        });
    }
    let item = source.remove(from);
    dest.insert(to, item);
    Ok(())
}
