pub mod checklist_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod status_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use checklist_pane::render_checklist_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_mode_selector;
use ratatui::Frame;
use status_pane::{render_progress_pane, render_status_pane};
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_status_pane(f, app, layout.status_area);
    render_progress_pane(f, app, layout.progress_area);
    render_checklist_pane(f, app, layout.checklist_area);
    render_timer_pane(f, app, layout.timer_area);

    // Render mode selector if active
    if app.ui_mode == UiMode::ModeSelector {
        render_mode_selector(f, app, size);
    }
}
