use serde::{Deserialize, Serialize};

/// A pending "new label" entry, opened from one of a task's label slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLabel {
    /// The label slot the saved label will be assigned into.
    pub slot: usize,
}

/// The reusable label strings offered by the label pickers.
///
/// Labels are distinct and append-only; there is no removal flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCatalog {
    /// Distinct labels in the order they were added.
    pub labels: Vec<String>,
    /// Set while the "new label" dialog is open.
    pub pending: Option<PendingLabel>,
}

impl LabelCatalog {
    /// Build a catalog from preloaded labels, dropping empties and duplicates.
    pub fn new(initial: Vec<String>) -> Self {
        let mut catalog = LabelCatalog::default();
        for label in initial {
            if !label.is_empty() && !catalog.contains(&label) {
                catalog.labels.push(label);
            }
        }
        catalog
    }

    pub fn contains(&self, text: &str) -> bool {
        self.labels.iter().any(|l| l == text)
    }
}
