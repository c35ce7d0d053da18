use serde::{Deserialize, Serialize};

/// Host configuration for a board store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Content given to tasks created by the add-task intent.
    #[serde(default = "default_task_content")]
    pub new_task_content: String,
    /// Title given to columns created by the add-column intent.
    #[serde(default = "default_column_title")]
    pub new_column_title: String,
    /// Columns created when the store starts.
    #[serde(default)]
    pub initial_columns: Vec<String>,
    /// Labels preloaded into the catalog.
    #[serde(default)]
    pub initial_labels: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            new_task_content: default_task_content(),
            new_column_title: default_column_title(),
            initial_columns: Vec::new(),
            initial_labels: Vec::new(),
        }
    }
}

fn default_task_content() -> String {
    "New task".to_string()
}

fn default_column_title() -> String {
    "New list".to_string()
}
