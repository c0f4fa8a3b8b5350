use crate::app::AppState;
use crate::domain::{DayMode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::ModeSelector => handle_mode_selector_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle the selected checkbox
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Direct mode selection
        KeyCode::Char('1') => {
            app.set_mode(DayMode::Short);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_mode(DayMode::Long);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_mode(DayMode::Holiday);
            Ok(false)
        }

        // Open the mode selector
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.ui_mode = UiMode::ModeSelector;
            Ok(false)
        }

        // Focus timer
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.start_focus_timer();
            Ok(false)
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.cancel_timer();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the mode selector modal
fn handle_mode_selector_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('1') => {
            app.set_mode(DayMode::Short);
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_mode(DayMode::Long);
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_mode(DayMode::Holiday);
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        _ => Ok(false),
    }
}
