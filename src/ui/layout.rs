use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub status_area: Rect,
    pub progress_area: Rect,
    pub checklist_area: Rect,
    pub timer_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Status line + mode buttons (3 rows)
/// - Progress gauge (3 rows)
/// - Checklist (remaining space)
/// - Timer pane (3 rows)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Status
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),    // Checklist
            Constraint::Length(3), // Timer
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        status_area: chunks[1],
        progress_area: chunks[2],
        checklist_area: chunks[3],
        timer_area: chunks[4],
    }
}

/// Create centered modal area (for the mode selector)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
