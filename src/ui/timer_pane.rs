use crate::app::AppState;
use crate::domain::TimerStatus;
use crate::ui::styles::{border_style, default_style, done_style, timer_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match app.timer.status() {
        TimerStatus::Running => {
            let remaining = app.timer.remaining().unwrap_or_default();
            let mins = remaining.as_secs() / 60;
            let secs = remaining.as_secs() % 60;
            Line::from(Span::styled(
                format!(" ⏳ Focus timer: {:02}:{:02} remaining ", mins, secs),
                timer_style(),
            ))
        }
        _ => match &app.timer_banner {
            Some(message) => Line::from(Span::styled(
                format!(" ⏰ {} ", message),
                done_style(),
            )),
            None => Line::from(Span::styled(
                " Press t to start a 25m focus timer ",
                default_style(),
            )),
        },
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Focus Timer ", title_style())),
    );

    f.render_widget(paragraph, area);
}
