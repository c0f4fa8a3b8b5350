use crate::app::AppState;
use crate::domain::{DayMode, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the mode selector modal
pub fn render_mode_selector(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode == UiMode::ModeSelector {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw("  Select your day type:"));
        lines.push(Line::raw(""));

        let keys = ['1', '2', '3'];
        for (idx, mode) in DayMode::all().iter().enumerate() {
            let key = keys[idx];
            let is_current = app.current_mode == Some(*mode);

            let line = if is_current {
                Line::from(vec![
                    Span::styled(format!("  [{}] ", key), modal_title_style()),
                    Span::styled(mode.name(), modal_title_style()),
                    Span::raw(" ← Current"),
                ])
            } else {
                Line::from(vec![
                    Span::styled(format!("  [{}] ", key), modal_title_style()),
                    Span::raw(mode.name()),
                ])
            };
            lines.push(line);
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("  [Esc]", modal_title_style()),
            Span::raw(" Cancel"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Day Type ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
