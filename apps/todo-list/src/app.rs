//! Application state and logic.

use crate::config::Config;
use crate::models::{Filter, Priority, TaskId};
use crate::store::{StoreError, TaskStore};
use crate::view::{self, ViewModel};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;
use todo_theme::{builtin_backgrounds, Mode, Theme};
use tracing::error;

/// Application state.
pub struct App {
    /// Task store.
    pub store: TaskStore,
    /// Configuration.
    pub config: Config,
    /// Presentation state (mode + background preset).
    pub theme: Theme,
    /// Current status filter.
    pub filter: Filter,
    /// Default priority for new tasks.
    pub selected_priority: Priority,
    /// Selected row in the filtered view.
    pub selected_index: usize,
    /// Add dialog, when open.
    pub add_form: Option<AddForm>,
    /// Message to display.
    pub message: Option<(String, MessageType)>,
    /// Show help popup.
    pub show_help: bool,
    background_index: Option<usize>,
}

/// Input state of the add dialog.
#[derive(Debug, Clone)]
pub struct AddForm {
    pub text: String,
    pub date: String,
    pub time: String,
    pub field: AddField,
}

impl AddForm {
    fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            AddField::Text => &mut self.text,
            AddField::Date => &mut self.date,
            AddField::Time => &mut self.time,
        }
    }
}

/// Focused field of the add dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Text,
    Date,
    Time,
}

impl AddField {
    fn next(&self) -> AddField {
        match self {
            AddField::Text => AddField::Date,
            AddField::Date => AddField::Time,
            AddField::Time => AddField::Text,
        }
    }

    fn prev(&self) -> AddField {
        match self {
            AddField::Text => AddField::Time,
            AddField::Date => AddField::Text,
            AddField::Time => AddField::Date,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddField::Text => "Task",
            AddField::Date => "Date",
            AddField::Time => "Time",
        }
    }
}

/// Message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

impl App {
    /// Create new application against the durable store.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load();
        let root = Config::data_dir().unwrap_or_else(|| PathBuf::from(".todo-list"));
        let store = TaskStore::open(&root)?;

        let mode = if store.load_dark_mode() {
            Mode::Dark
        } else {
            Mode::Light
        };

        Ok(Self::with_parts(store, config, Theme::new(mode)))
    }

    /// Build an app around an existing store (used by tests with an
    /// in-memory store).
    pub fn with_store(store: TaskStore) -> Self {
        Self::with_parts(store, Config::default(), Theme::default())
    }

    fn with_parts(store: TaskStore, config: Config, theme: Theme) -> Self {
        Self {
            store,
            config,
            theme,
            filter: Filter::All,
            selected_priority: Priority::Medium,
            selected_index: 0,
            add_form: None,
            message: None,
            show_help: false,
            background_index: None,
        }
    }

    /// Project the current store state through the current filter.
    pub fn view_model(&self) -> ViewModel {
        view::build(&self.store, self.filter)
    }

    /// Check if the add dialog is open.
    pub fn is_editing(&self) -> bool {
        self.add_form.is_some()
    }

    /// Handle key input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle help popup
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Clear message on any key
        self.message = None;

        if self.add_form.is_some() {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('g') => self.selected_index = 0,
            KeyCode::Char('G') => {
                let rows = self.view_model().rows.len();
                if rows > 0 {
                    self.selected_index = rows - 1;
                }
            }

            // Task actions
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('a') => self.open_add_form(),

            // Filters
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Active),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),

            // Priority selector
            KeyCode::Char('p') => self.selected_priority = self.selected_priority.next(),

            // Presentation
            KeyCode::Char('m') => self.toggle_dark_mode(),
            KeyCode::Char('t') => self.cycle_background(),

            // Help
            KeyCode::Char('?') => self.show_help = true,

            _ => {}
        }
    }

    /// Handle keys while the add dialog is open.
    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.add_form else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.add_form = None;
            }
            KeyCode::Tab => form.field = form.field.next(),
            KeyCode::BackTab => form.field = form.field.prev(),
            KeyCode::Enter => self.submit_add_form(),
            KeyCode::Backspace => {
                form.buffer_mut().pop();
            }
            KeyCode::Char(c) => {
                form.buffer_mut().push(c);
            }
            _ => {}
        }
    }

    /// Move selection by delta within the filtered view.
    fn move_selection(&mut self, delta: i32) {
        let rows = self.view_model().rows.len();
        if rows == 0 {
            return;
        }
        let new_index = self.selected_index as i32 + delta;
        self.selected_index = new_index.clamp(0, rows as i32 - 1) as usize;
    }

    /// Keep the selection inside the filtered view after a mutation.
    fn clamp_selection(&mut self) {
        let rows = self.view_model().rows.len();
        if self.selected_index >= rows && rows > 0 {
            self.selected_index = rows - 1;
        }
        if rows == 0 {
            self.selected_index = 0;
        }
    }

    /// Stable id of the selected row.
    fn selected_id(&self) -> Option<TaskId> {
        self.view_model().rows.get(self.selected_index).map(|r| r.id)
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Err(err) = self.store.toggle(id) {
            self.report(err);
        }
        self.clamp_selection();
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.store.delete(id) {
            Ok(task) => {
                self.message = Some((format!("Deleted '{}'", task.text), MessageType::Success));
            }
            Err(err) => self.report(err),
        }
        self.clamp_selection();
    }

    /// Open the add dialog with date/time prefilled from the clock.
    fn open_add_form(&mut self) {
        let now = Local::now();
        self.add_form = Some(AddForm {
            text: String::new(),
            date: now.format(&self.config.display.date_format).to_string(),
            time: now.format(&self.config.display.time_format).to_string(),
            field: AddField::Text,
        });
    }

    /// Submit the add dialog. Blank text is silently ignored and the
    /// dialog stays open.
    fn submit_add_form(&mut self) {
        let Some(form) = self.add_form.clone() else {
            return;
        };
        match self.store.add(
            &form.text,
            self.selected_priority,
            form.date,
            form.time,
        ) {
            Ok(Some(_)) => {
                self.add_form = None;
                self.message = Some(("Task added".to_string(), MessageType::Success));
            }
            Ok(None) => {}
            Err(err) => self.report(err),
        }
    }

    /// Switch the status filter. Mutations never switch it back; only
    /// explicit selection lands here.
    fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.selected_index = 0;
    }

    fn toggle_dark_mode(&mut self) {
        self.theme.toggle_mode();
        if let Err(err) = self.store.save_dark_mode(self.theme.mode.is_dark()) {
            self.report(err);
        }
    }

    /// Select the next background preset. Session-only; never persisted.
    fn cycle_background(&mut self) {
        let presets = builtin_backgrounds();
        let index = match self.background_index {
            None => 0,
            Some(i) => (i + 1) % presets.len(),
        };
        self.background_index = Some(index);
        self.theme.select_background(presets[index]);
    }

    fn report(&mut self, err: StoreError) {
        error!(%err, "store operation failed");
        self.message = Some((err.to_string(), MessageType::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_tasks(texts: &[&str]) -> App {
        let mut store = TaskStore::in_memory();
        for text in texts {
            store
                .add(text, Priority::Medium, "2026-08-06".into(), "09:00".into())
                .unwrap();
        }
        App::with_store(store)
    }

    #[test]
    fn test_initial_state() {
        let app = app_with_tasks(&[]);
        assert_eq!(app.filter, Filter::All);
        assert_eq!(app.selected_priority, Priority::Medium);
        assert!(!app.theme.mode.is_dark());
        assert!(app.theme.background.is_none());
    }

    #[test]
    fn test_completing_last_active_keeps_filter() {
        let mut app = app_with_tasks(&["only"]);
        app.handle_key(key('2'));
        assert_eq!(app.filter, Filter::Active);

        app.handle_key(code(KeyCode::Enter));
        assert_eq!(app.filter, Filter::Active);
        assert!(app.view_model().is_empty());
    }

    #[test]
    fn test_add_uses_selector_priority() {
        let mut app = app_with_tasks(&[]);
        app.handle_key(key('p')); // medium -> high
        app.handle_key(key('a'));
        for c in "ship it".chars() {
            app.handle_key(key(c));
        }
        app.handle_key(code(KeyCode::Enter));

        let all = app.store.query(Filter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "ship it");
        assert_eq!(all[0].priority, Priority::High);
        assert!(app.add_form.is_none());
    }

    #[test]
    fn test_add_form_prefills_date_and_time() {
        let mut app = app_with_tasks(&[]);
        app.handle_key(key('a'));
        let form = app.add_form.as_ref().unwrap();
        assert_eq!(form.date.len(), 10);
        assert_eq!(form.time.len(), 5);
    }

    #[test]
    fn test_blank_submit_is_silent_noop() {
        let mut app = app_with_tasks(&[]);
        app.handle_key(key('a'));
        app.handle_key(key(' '));
        app.handle_key(code(KeyCode::Enter));

        assert!(app.store.is_empty());
        assert!(app.add_form.is_some());
        assert!(app.message.is_none());
    }

    #[test]
    fn test_selection_clamps_after_delete() {
        let mut app = app_with_tasks(&["a", "b", "c"]);
        app.handle_key(key('G'));
        assert_eq!(app.selected_index, 2);

        app.handle_key(key('d'));
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn test_dark_mode_toggle_flips_theme() {
        let mut app = app_with_tasks(&[]);
        app.handle_key(key('m'));
        assert!(app.theme.mode.is_dark());
        app.handle_key(key('m'));
        assert!(!app.theme.mode.is_dark());
    }

    #[test]
    fn test_background_cycles_through_presets() {
        let mut app = app_with_tasks(&[]);
        let presets = builtin_backgrounds();

        app.handle_key(key('t'));
        assert_eq!(app.theme.background, Some(presets[0]));
        app.handle_key(key('t'));
        assert_eq!(app.theme.background, Some(presets[1]));

        for _ in 0..presets.len() - 1 {
            app.handle_key(key('t'));
        }
        assert_eq!(app.theme.background, Some(presets[0]));
    }

    #[test]
    fn test_form_field_navigation() {
        let mut app = app_with_tasks(&[]);
        app.handle_key(key('a'));
        assert_eq!(app.add_form.as_ref().unwrap().field, AddField::Text);

        app.handle_key(code(KeyCode::Tab));
        assert_eq!(app.add_form.as_ref().unwrap().field, AddField::Date);
        app.handle_key(code(KeyCode::BackTab));
        assert_eq!(app.add_form.as_ref().unwrap().field, AddField::Text);

        app.handle_key(code(KeyCode::Esc));
        assert!(app.add_form.is_none());
    }
}
