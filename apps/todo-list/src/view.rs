//! View-model projection.
//!
//! `build` is a pure function from (store, filter) to the displayed state;
//! the ratatui adapter in `ui.rs` draws it without any logic of its own.
//! Calling it repeatedly mutates nothing.

use crate::models::{Filter, Priority, TaskId};
use crate::store::TaskStore;

/// Placeholder shown instead of the list when the filtered view is empty.
pub const EMPTY_MESSAGE: &str = "No tasks found";

/// One visible task row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    /// Stable id carried by the row's toggle/delete controls.
    pub id: TaskId,
    pub text: String,
    /// Due date and time on one line; missing parts render as empty.
    pub schedule: String,
    pub priority: Priority,
    pub completed: bool,
}

/// Everything the adapter needs to draw the list area and counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub filter: Filter,
    pub rows: Vec<TaskRow>,
    pub total_label: String,
    pub completed_label: String,
}

impl ViewModel {
    /// Whether the adapter should draw the empty-state placeholder.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project the store's current state through `filter`.
pub fn build(store: &TaskStore, filter: Filter) -> ViewModel {
    let rows = store
        .query(filter)
        .into_iter()
        .map(|task| TaskRow {
            id: task.id,
            text: task.text.clone(),
            schedule: schedule_line(&task.date, &task.time),
            priority: task.priority,
            completed: task.completed,
        })
        .collect();

    let stats = store.stats();
    ViewModel {
        filter,
        rows,
        total_label: format!("{} tasks", stats.total),
        completed_label: format!("{} completed", stats.completed),
    }
}

fn schedule_line(date: &str, time: &str) -> String {
    match (date.is_empty(), time.is_empty()) {
        (true, true) => String::new(),
        (false, true) => date.to_string(),
        (true, false) => time.to_string(),
        (false, false) => format!("{} {}", date, time),
    }
}

/// Horizontal offset of the priority-selector indicator, as a percentage of
/// the selector width. Rank 0/1/2 maps to 0%, 33.3%, 66.6%.
pub fn indicator_percent(priority: Priority) -> f32 {
    priority.rank() as f32 * 33.3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn seeded() -> TaskStore {
        let mut store = TaskStore::in_memory();
        store
            .add("write report", Priority::High, "2026-08-06".into(), "14:00".into())
            .unwrap();
        store
            .add("water plants", Priority::Low, String::new(), String::new())
            .unwrap();
        store
    }

    #[test]
    fn test_empty_store_flags_placeholder() {
        let store = TaskStore::in_memory();
        let vm = build(&store, Filter::Active);
        assert!(vm.is_empty());
        assert_eq!(vm.total_label, "0 tasks");
        assert_eq!(vm.completed_label, "0 completed");
    }

    #[test]
    fn test_rows_carry_stable_ids() {
        let mut store = seeded();
        let first = store.query(Filter::All)[0].id;
        store.toggle(first).unwrap();

        // Filtered to Active, the single row still addresses the second
        // task's id, not a position in the filtered view.
        let vm = build(&store, Filter::Active);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].id, store.query(Filter::All)[1].id);
        assert_eq!(vm.rows[0].text, "water plants");
    }

    #[test]
    fn test_schedule_never_shows_placeholders() {
        let store = seeded();
        let vm = build(&store, Filter::All);
        assert_eq!(vm.rows[0].schedule, "2026-08-06 14:00");
        assert_eq!(vm.rows[1].schedule, "");
    }

    #[test]
    fn test_stats_labels_cover_unfiltered_sequence() {
        let mut store = seeded();
        let first = store.query(Filter::All)[0].id;
        store.toggle(first).unwrap();

        let vm = build(&store, Filter::Completed);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.total_label, "2 tasks");
        assert_eq!(vm.completed_label, "1 completed");
    }

    #[test]
    fn test_build_is_idempotent() {
        let store = seeded();
        assert_eq!(build(&store, Filter::All), build(&store, Filter::All));
    }

    #[test]
    fn test_indicator_offsets() {
        assert_eq!(indicator_percent(Priority::Low), 0.0);
        assert!((indicator_percent(Priority::Medium) - 33.3).abs() < f32::EPSILON);
        assert!((indicator_percent(Priority::High) - 66.6).abs() < 0.001);
    }
}
