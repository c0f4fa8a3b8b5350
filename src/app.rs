use crate::domain::{catalog, progress, DayMode, UiMode};
use crate::notifications;
use crate::persistence::{FileGateway, LAST_MODE_KEY};
use crate::store::TaskStateStore;
use crate::timer::{TimerError, TimerService};
use std::time::Duration;

/// The focus timer started with 't' (25 minutes)
pub const FOCUS_TIMER_SECS: u64 = 1500;
pub const FOCUS_TIMER_MESSAGE: &str = "Coding Session Done!";

/// One rendered checklist row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub label: String,
    pub checked: bool,
}

/// Main application state.
///
/// Owns the mode state machine: `current_mode` starts as None and moves
/// between day modes on user selection. Every switch reads completion state
/// from the store (never overwrites it) and replaces the row list in one
/// assignment, so no intermediate state is ever rendered.
pub struct AppState {
    pub store: TaskStateStore,
    gateway: FileGateway,
    pub current_mode: Option<DayMode>,
    pub rows: Vec<TaskRow>,
    pub selected_index: usize,
    pub status_text: String,
    pub ui_mode: UiMode,
    pub timer: TimerService,
    pub timer_banner: Option<String>,
    pub save_warning: Option<String>,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(store: TaskStateStore, gateway: FileGateway) -> Self {
        Self {
            store,
            gateway,
            current_mode: None,
            rows: Vec::new(),
            selected_index: 0,
            status_text: String::from("Select your day type:"),
            ui_mode: UiMode::Normal,
            timer: TimerService::new(),
            timer_banner: None,
            save_warning: None,
            use_emoji: true,
        }
    }

    /// Re-activate the last persisted mode, if any. Called once at startup
    /// so the app reopens on the list the user last viewed. Unknown names
    /// parse to Holiday.
    pub fn restore_last_mode(&mut self) {
        if let Some(name) = self.gateway.load(LAST_MODE_KEY) {
            self.set_mode(DayMode::from_name(name.trim()));
        }
    }

    /// Switch the active day mode.
    ///
    /// Checked state comes from the store, so completions made in another
    /// mode (or a previous visit to this one) survive the switch. The new
    /// mode is persisted as `last_mode` for the next startup.
    pub fn set_mode(&mut self, mode: DayMode) {
        let rows: Vec<TaskRow> = catalog::tasks_for(mode)
            .iter()
            .map(|label| TaskRow {
                label: label.to_string(),
                checked: self.store.get(label),
            })
            .collect();

        self.rows = rows;
        self.current_mode = Some(mode);
        self.status_text = mode.status_line().to_string();

        if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len().saturating_sub(1);
        }

        match self.gateway.save(LAST_MODE_KEY, mode.name()) {
            Ok(()) => self.save_warning = None,
            Err(e) => self.save_warning = Some(e.to_string()),
        }
    }

    /// Record a checkbox interaction. Every toggle must come through here;
    /// the store write-through is what makes completions durable.
    pub fn on_task_toggled(&mut self, label: &str, value: bool) {
        match self.store.set(label, value) {
            Ok(()) => self.save_warning = None,
            Err(e) => self.save_warning = Some(e.to_string()),
        }

        if let Some(row) = self.rows.iter_mut().find(|r| r.label == label) {
            row.checked = value;
        }
    }

    /// Toggle the currently selected row
    pub fn toggle_selected(&mut self) {
        if let Some(row) = self.rows.get(self.selected_index) {
            let label = row.label.clone();
            let value = !row.checked;
            self.on_task_toggled(&label, value);
        }
    }

    /// Completed fraction of the visible list, recomputed on every call
    pub fn progress(&self) -> f64 {
        progress::compute(self.rows.iter().map(|r| r.label.as_str()), &self.store)
    }

    /// Kick off the 25-minute focus timer
    pub fn start_focus_timer(&mut self) {
        self.start_timer(Duration::from_secs(FOCUS_TIMER_SECS), FOCUS_TIMER_MESSAGE);
    }

    pub fn start_timer(&mut self, duration: Duration, message: &str) {
        match self.timer.start(duration, message) {
            Ok(()) => {
                self.timer_banner = None;
                self.status_text = format!("⏳ Timer: {} mins", duration.as_secs() / 60);
            }
            Err(TimerError::AlreadyRunning) => {
                self.status_text = String::from("A timer is already running");
            }
        }
    }

    /// Abandon a running countdown
    pub fn cancel_timer(&mut self) {
        self.timer.cancel();
        self.status_text = String::from("Timer cancelled");
    }

    /// Per-tick work: drain the timer channel and surface a completed
    /// countdown. Runs on the interaction thread, so toggles and mode
    /// switches are never blocked by a pending timer.
    pub fn tick(&mut self) {
        if let Some(message) = self.timer.poll() {
            notifications::notify_timer_done(&message);
            self.timer_banner = Some(message);
            self.status_text = String::from("✅ Timer Finished!");
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if !self.rows.is_empty() && self.selected_index < self.rows.len() - 1 {
            self.selected_index += 1;
        }
    }
}
