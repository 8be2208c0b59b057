//! Task store: the in-memory task sequence and its durable mirror.
//!
//! Storage is a flat key-value layout under the data directory: `tasks.json`
//! holds the full task array, `dark_mode` holds the literal string `"true"`
//! or `"false"`. Every mutation rewrites the complete task array.

use crate::models::{Filter, Priority, Task, TaskId, TaskStats};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const TASKS_KEY: &str = "tasks.json";
const DARK_MODE_KEY: &str = "dark_mode";

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no task with id {0}")]
    TaskNotFound(TaskId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The ordered task sequence plus its persistence root.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    root: Option<PathBuf>,
}

impl TaskStore {
    /// Open the store rooted at `root`, loading any persisted tasks.
    /// Absent or unreadable data starts an empty sequence.
    pub fn open(root: &Path) -> StoreResult<Self> {
        std::fs::create_dir_all(root)?;
        let raw = std::fs::read_to_string(root.join(TASKS_KEY)).unwrap_or_default();
        let mut store = Self {
            tasks: deserialize_tasks(&raw),
            next_id: 1,
            root: Some(root.to_path_buf()),
        };
        store.renumber();
        debug!(count = store.tasks.len(), "store opened");
        Ok(store)
    }

    /// Create a store with no durable mirror (for testing).
    pub fn in_memory() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            root: None,
        }
    }

    /// Assign fresh ids in sequence order. Ids are live-only; the persisted
    /// layout has no id field.
    fn renumber(&mut self) {
        self.next_id = 1;
        for task in &mut self.tasks {
            task.id = self.next_id;
            self.next_id += 1;
        }
    }

    /// Append a new task. Whitespace-only text is silently ignored and
    /// leaves the sequence unchanged.
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        date: String,
        time: String,
    ) -> StoreResult<Option<TaskId>> {
        if text.trim().is_empty() {
            debug!("ignoring blank task text");
            return Ok(None);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, text, priority, date, time));
        self.persist()?;
        debug!(id, "task added");
        Ok(Some(id))
    }

    /// Flip completion on the task with `id`.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist()?;
        debug!(id, completed, "task toggled");
        Ok(())
    }

    /// Remove the task with `id`; later tasks shift one position left.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        let task = self.tasks.remove(pos);
        self.persist()?;
        debug!(id, "task deleted");
        Ok(task)
    }

    /// Tasks matching `filter`, in insertion order. Pure.
    pub fn query(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.accepts(t)).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Counters over the unfiltered sequence.
    pub fn stats(&self) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Write the complete task array, overwriting any prior value. Never
    /// partial. In-memory stores skip this.
    pub fn persist(&self) -> StoreResult<()> {
        let Some(root) = &self.root else {
            return Ok(());
        };
        std::fs::create_dir_all(root)?;
        std::fs::write(root.join(TASKS_KEY), serialize_tasks(&self.tasks)?)?;
        Ok(())
    }

    /// Read the persisted dark-mode flag. Anything other than the literal
    /// string `"true"` means light mode.
    pub fn load_dark_mode(&self) -> bool {
        let Some(root) = &self.root else {
            return false;
        };
        std::fs::read_to_string(root.join(DARK_MODE_KEY))
            .map(|s| s.trim() == "true")
            .unwrap_or(false)
    }

    /// Persist the dark-mode flag as the literal string `"true"`/`"false"`,
    /// independently of the task array.
    pub fn save_dark_mode(&self, on: bool) -> StoreResult<()> {
        let Some(root) = &self.root else {
            return Ok(());
        };
        std::fs::create_dir_all(root)?;
        std::fs::write(root.join(DARK_MODE_KEY), if on { "true" } else { "false" })?;
        Ok(())
    }
}

/// Serialize a task sequence to the stored JSON array.
pub fn serialize_tasks(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(tasks)
}

/// Deserialize the stored JSON array. Malformed or empty input falls back
/// to an empty sequence.
pub fn deserialize_tasks(raw: &str) -> Vec<Task> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(%err, "unreadable task list, starting empty");
            Vec::new()
        }
    }
}
