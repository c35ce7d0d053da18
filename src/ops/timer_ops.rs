use crate::model::board::Board;
use crate::model::timer::{Timer, TimerState};

use super::BoardError;

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Start timing a task. Whatever session is already running commits first,
/// so the single-active invariant holds without an explicit stop.
pub fn start(timer: &mut Timer, board: &mut Board, task_id: &str) -> Result<(), BoardError> {
    if !board.tasks.contains_key(task_id) {
        return Err(BoardError::TaskNotFound(task_id.to_string()));
    }
    stop(timer, board);
    if let Some(task) = board.tasks.get_mut(task_id) {
        task.active = true;
        task.selected = true;
    }
    timer.generation += 1;
    timer.state = TimerState::Running {
        task_id: task_id.to_string(),
        elapsed: 0,
    };
    Ok(())
}

/// Commit the running session into the task's totals and go idle.
///
/// Weekly and monthly totals grow by the session's elapsed seconds, and each
/// best record rises to the new total when that is higher. Stopping while
/// idle is a no-op. Returns true when a session was stopped.
pub fn stop(timer: &mut Timer, board: &mut Board) -> bool {
    let TimerState::Running { task_id, elapsed } = &timer.state else {
        return false;
    };
    if let Some(task) = board.tasks.get_mut(task_id) {
        task.weekly_total += *elapsed;
        task.monthly_total += *elapsed;
        task.weekly_best = task.weekly_best.max(task.weekly_total);
        task.monthly_best = task.monthly_best.max(task.monthly_total);
        task.active = false;
    }
    timer.cancel();
    true
}

/// Advance the stopwatch by one second.
///
/// One clock event feeds two counters in the same transition: the session's
/// elapsed display and the running task's lifetime total. A tick stamped
/// with a stale generation (scheduled before its session ended) is dropped.
/// Returns true when the tick was applied.
pub fn tick(timer: &mut Timer, board: &mut Board, generation: u64) -> bool {
    if generation != timer.generation {
        return false;
    }
    let TimerState::Running { task_id, elapsed } = &mut timer.state else {
        return false;
    };
    *elapsed += 1;
    if let Some(task) = board.tasks.get_mut(task_id) {
        task.time_spent += 1;
    }
    true
}

/// Select a task, deselecting every other one. Selecting the running task
/// also re-syncs the stopwatch display from the task's lifetime seconds.
pub fn select(timer: &mut Timer, board: &mut Board, task_id: &str) -> Result<(), BoardError> {
    if !board.tasks.contains_key(task_id) {
        return Err(BoardError::TaskNotFound(task_id.to_string()));
    }
    for (id, task) in board.tasks.iter_mut() {
        task.selected = id == task_id;
    }
    if let TimerState::Running { task_id: running, elapsed } = &mut timer.state
        && running.as_str() == task_id
        && let Some(task) = board.tasks.get(task_id)
    {
        *elapsed = task.time_spent;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
