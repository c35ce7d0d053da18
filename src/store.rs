use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::model::board::Board;
use crate::model::column::Column;
use crate::model::config::BoardConfig;
use crate::model::label::LabelCatalog;
use crate::model::task::{Task, TaskPatch};
use crate::model::timer::Timer;
use crate::ops::column_ops::{self, TaskLocation};
use crate::ops::{BoardError, label_ops, task_ops, timer_ops};

/// Everything the render layer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub timer: Timer,
    pub labels: LabelCatalog,
}

impl Snapshot {
    /// Id of the task currently being timed, if any.
    pub fn active_task_id(&self) -> Option<&str> {
        self.timer.active_task_id()
    }

    /// Seconds on the stopwatch; zero when idle.
    pub fn elapsed(&self) -> u64 {
        self.timer.elapsed()
    }
}

/// The single writer that owns the board state.
///
/// Every transition runs to completion against a scratch copy of the state;
/// only a successful, state-changing transition swaps the published
/// `Arc<Snapshot>`. A renderer holding a snapshot therefore never observes a
/// partial or failed transition, and a rejected intent or a drag no-op
/// leaves the published pointer untouched.
pub struct BoardStore {
    state: Arc<Snapshot>,
    config: BoardConfig,
    /// Next id suffixes. Monotonic, never reused, even after deletions.
    next_task: u64,
    next_column: u64,
}

impl Default for BoardStore {
    fn default() -> Self {
        BoardStore::new(BoardConfig::default())
    }
}

impl BoardStore {
    pub fn new(config: BoardConfig) -> Self {
        let mut store = BoardStore {
            state: Arc::new(Snapshot {
                labels: LabelCatalog::new(config.initial_labels.clone()),
                ..Snapshot::default()
            }),
            config,
            next_task: 1,
            next_column: 1,
        };
        for title in store.config.initial_columns.clone() {
            store.push_column(title);
        }
        store
    }

    /// The current published snapshot. Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Generation stamp for scheduling the next tick. See [`Self::tick`].
    pub fn timer_generation(&self) -> u64 {
        self.state.timer.generation
    }

    /// Apply one user intent. A rejected intent is logged and leaves the
    /// published snapshot untouched.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), BoardError> {
        let result = match intent {
            Intent::AddColumn => {
                self.add_column();
                Ok(())
            }
            Intent::EditColumnTitle { column_id, title } => {
                self.edit_column_title(&column_id, title)
            }
            Intent::AddTask { column_id } => self.add_task(&column_id).map(|_| ()),
            Intent::EditTask { task_id, patch } => self.edit_task(&task_id, patch),
            Intent::MoveTask {
                source,
                destination,
            } => self.move_task(&source, &destination),
            Intent::ReorderColumns {
                source,
                destination,
            } => self.reorder_columns(source, destination),
            Intent::StartTimer { task_id } => self.start_timer(&task_id),
            Intent::StopTimer => {
                self.stop_timer();
                Ok(())
            }
            Intent::SelectTask { task_id } => self.select_task(&task_id),
            Intent::AddLabel { slot } => self.add_label(slot),
            Intent::SaveNewLabel { text } => {
                self.save_new_label(&text);
                Ok(())
            }
        };
        if let Err(err) = &result {
            warn!("intent rejected: {err}");
        }
        result
    }

    // -----------------------------------------------------------------------
    // Columns
    // -----------------------------------------------------------------------

    /// Create a column with the configured default title. Returns its id.
    pub fn add_column(&mut self) -> String {
        self.push_column(self.config.new_column_title.clone())
    }

    pub fn edit_column_title(&mut self, column_id: &str, title: String) -> Result<(), BoardError> {
        self.mutate(|s| {
            column_ops::edit_title(&mut s.board, column_id, title)?;
            Ok(true)
        })
    }

    pub fn reorder_columns(&mut self, source: usize, destination: usize) -> Result<(), BoardError> {
        self.mutate(|s| column_ops::reorder_columns(&mut s.board, source, destination))
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Create a task at the front of `column_id`. Returns the new task id.
    pub fn add_task(&mut self, column_id: &str) -> Result<String, BoardError> {
        let id = format!("task-{}", self.next_task);
        let task = Task::new(id.clone(), self.config.new_task_content.clone());
        self.mutate(|s| {
            task_ops::insert_task(&mut s.board, column_id, task)?;
            Ok(true)
        })?;
        self.next_task += 1;
        Ok(id)
    }

    pub fn edit_task(&mut self, task_id: &str, patch: TaskPatch) -> Result<(), BoardError> {
        self.mutate(|s| {
            let deleting = matches!(patch, TaskPatch::Delete);
            let changed = task_ops::edit_task(&mut s.board, task_id, patch)?;
            // A running stopwatch on a deleted task dies with it, uncommitted.
            if deleting && s.timer.active_task_id() == Some(task_id) {
                s.timer.cancel();
            }
            Ok(changed)
        })
    }

    pub fn move_task(
        &mut self,
        source: &TaskLocation,
        destination: &TaskLocation,
    ) -> Result<(), BoardError> {
        self.mutate(|s| column_ops::move_task(&mut s.board, source, destination))
    }

    // -----------------------------------------------------------------------
    // Timer
    // -----------------------------------------------------------------------

    pub fn start_timer(&mut self, task_id: &str) -> Result<(), BoardError> {
        self.mutate(|s| {
            timer_ops::start(&mut s.timer, &mut s.board, task_id)?;
            Ok(true)
        })
    }

    /// Stop and commit the running session. No-op when idle.
    pub fn stop_timer(&mut self) {
        let mut next = (*self.state).clone();
        if timer_ops::stop(&mut next.timer, &mut next.board) {
            self.publish(next);
        }
    }

    /// Deliver one scheduled 1 Hz tick.
    ///
    /// `generation` is the [`Self::timer_generation`] value captured when the
    /// tick was scheduled; a tick whose session has since ended carries a
    /// stale generation and is dropped.
    pub fn tick(&mut self, generation: u64) {
        let mut next = (*self.state).clone();
        if timer_ops::tick(&mut next.timer, &mut next.board, generation) {
            self.publish(next);
        }
    }

    pub fn select_task(&mut self, task_id: &str) -> Result<(), BoardError> {
        self.mutate(|s| {
            timer_ops::select(&mut s.timer, &mut s.board, task_id)?;
            Ok(true)
        })
    }

    // -----------------------------------------------------------------------
    // Labels
    // -----------------------------------------------------------------------

    /// Open the "new label" entry for a label slot.
    pub fn add_label(&mut self, slot: usize) -> Result<(), BoardError> {
        self.mutate(|s| {
            label_ops::open_new_label(&mut s.labels, slot)?;
            Ok(true)
        })
    }

    /// Commit the pending "new label" entry. Returns true when the label was
    /// added to the catalog.
    pub fn save_new_label(&mut self, text: &str) -> bool {
        let mut next = (*self.state).clone();
        let before = next.labels.labels.len();
        let changed = label_ops::save_new_label(&mut next.board, &mut next.labels, text);
        let added = next.labels.labels.len() > before;
        if changed {
            self.publish(next);
        }
        added
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn push_column(&mut self, title: String) -> String {
        let id = format!("column-{}", self.next_column);
        self.next_column += 1;
        let mut next = (*self.state).clone();
        column_ops::insert_column(&mut next.board, Column::new(id.clone(), title));
        self.publish(next);
        id
    }

    /// Run one fallible transition against a scratch copy; publish only when
    /// it succeeds and reports a change.
    fn mutate(
        &mut self,
        f: impl FnOnce(&mut Snapshot) -> Result<bool, BoardError>,
    ) -> Result<(), BoardError> {
        let mut next = (*self.state).clone();
        if f(&mut next)? {
            self.publish(next);
        }
        Ok(())
    }

    fn publish(&mut self, next: Snapshot) {
        debug_assert!(next.board.verify().is_ok(), "transition broke the board");
        self.state = Arc::new(next);
    }
}
