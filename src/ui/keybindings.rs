use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Space/Enter check   "),
        Span::raw("1 short   "),
        Span::raw("2 long   "),
        Span::raw("3 holiday   "),
        Span::raw("m mode   "),
        Span::raw("t 25m timer   "),
        Span::raw("c cancel timer   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
