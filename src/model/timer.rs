use serde::{Deserialize, Serialize};

/// The stopwatch: idle, or running on exactly one task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    #[default]
    Idle,
    Running {
        task_id: String,
        /// Seconds on the stopwatch since this session started.
        elapsed: u64,
    },
}

/// Single-active-task timer.
///
/// The session's seconds are committed into the task's weekly/monthly totals
/// only when the session stops; the lifetime counter is mirrored every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub state: TimerState,
    /// Bumped on every start/stop/cancel. A tick stamped with an older
    /// generation belongs to a session that no longer exists and is dropped.
    pub generation: u64,
}

impl Timer {
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Id of the running task, if any.
    pub fn active_task_id(&self) -> Option<&str> {
        match &self.state {
            TimerState::Running { task_id, .. } => Some(task_id),
            TimerState::Idle => None,
        }
    }

    /// Seconds on the stopwatch; zero when idle.
    pub fn elapsed(&self) -> u64 {
        match &self.state {
            TimerState::Running { elapsed, .. } => *elapsed,
            TimerState::Idle => 0,
        }
    }

    /// Drop the session without committing anything.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = TimerState::Idle;
    }
}
