use crate::app::AppState;
use crate::ui::styles::{border_style, gauge_style, status_style, title_style, warning_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the status line (mode status text + save warnings)
pub fn render_status_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" Grind Tracker ({}) ", date);

    let mut spans = vec![Span::styled(app.status_text.clone(), status_style())];
    if let Some(warning) = &app.save_warning {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("⚠ {}", warning), warning_style()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Render the completion gauge for the visible list
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let ratio = app.progress().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Progress ", title_style())),
        )
        .gauge_style(gauge_style())
        .label(format!("{:.0}%", ratio * 100.0))
        .ratio(ratio);

    f.render_widget(gauge, area);
}
