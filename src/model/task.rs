use serde::{Deserialize, Serialize};

/// Number of label slots on a task card.
pub const LABEL_SLOTS: usize = 2;

/// A single field edit applied to a task.
///
/// Every edit intent carries exactly one variant, so an edit can only touch
/// the field the variant names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TaskPatch {
    /// Replace the task text.
    Content(String),
    /// Put a label into one of the fixed slots (`None` clears the slot).
    Label { slot: usize, label: Option<String> },
    /// Replace the assignee.
    Assignee(String),
    /// Free-text goal input in minutes; validated before it lands.
    GoalTime(String),
    /// Remove the task and every reference to it.
    Delete,
}

/// A trackable unit of work with timer-accumulated totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    /// Fixed label slots; an empty slot holds `None`.
    pub labels: [Option<String>; LABEL_SLOTS],
    /// Stored for the render layer; no transition reads it.
    pub assignee: String,
    /// Lifetime seconds, mirrored from the stopwatch every tick.
    pub time_spent: u64,
    /// Seconds committed this week. Grows only when a session stops.
    pub weekly_total: u64,
    pub monthly_total: u64,
    /// Highest weekly total ever reached. Never decreases.
    pub weekly_best: u64,
    pub monthly_best: u64,
    /// Goal in minutes, kept as the validated digit string.
    pub goal_time: Option<String>,
    /// True while the stopwatch runs on this task.
    pub active: bool,
    pub selected: bool,
}

impl Task {
    /// Create a task with zeroed counters and empty labels.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            content: content.into(),
            labels: Default::default(),
            assignee: String::new(),
            time_spent: 0,
            weekly_total: 0,
            monthly_total: 0,
            weekly_best: 0,
            monthly_best: 0,
            goal_time: None,
            active: false,
            selected: false,
        }
    }
}
