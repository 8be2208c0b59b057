//! Data models for the to-do list.

use serde::{Deserialize, Serialize};

/// Stable task identifier, assigned by the store.
pub type TaskId = u64;

/// Task priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All levels in selector order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Position among the selector options (0, 1, 2).
    pub fn rank(&self) -> usize {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    pub fn next(&self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

// Stored values outside the closed set degrade to the default rather than
// poisoning the whole task list.
impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// Task status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in selector order.
    pub const CHOICES: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a task belongs to this filter's view.
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// A to-do item.
///
/// The persisted layout is exactly `{text, completed, priority, date, time}`;
/// ids are live-only and reassigned when a stored list is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

impl Task {
    pub fn new(
        id: TaskId,
        text: impl Into<String>,
        priority: Priority,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority,
            date: date.into(),
            time: time.into(),
        }
    }
}

/// Counters shown under the task list, always computed over the unfiltered
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}
