use crate::app::{AppState, TaskRow};
use crate::domain::progress::checkbox_glyph;
use crate::ui::styles::{
    border_style, default_style, done_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the "Your Mission" checklist for the active mode
pub fn render_checklist_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = if app.rows.is_empty() {
        vec![ListItem::new(Line::raw(
            "  Pick a day type with 1/2/3 or m",
        ))]
    } else {
        app.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let line = create_task_line(row, app.use_emoji);
                let style = if idx == app.selected_index {
                    selected_style()
                } else if row.checked {
                    done_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let mode_name = app
        .current_mode
        .map(|m| m.name())
        .unwrap_or("No mode");
    let title = format!(" Your Mission — {} ", mode_name);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single checklist line: `☑ Power Workout (3:30 PM)`
fn create_task_line(row: &TaskRow, use_emoji: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(" {} ", checkbox_glyph(row.checked, use_emoji))),
        Span::raw(row.label.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_line_unchecked() {
        let row = TaskRow {
            label: "Test task".to_string(),
            checked: false,
        };
        let line = create_task_line(&row, false);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Test task"));
        assert!(line_str.contains("[ ]"));
    }

    #[test]
    fn test_create_task_line_checked() {
        let row = TaskRow {
            label: "Test task".to_string(),
            checked: true,
        };
        let line = create_task_line(&row, false);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[x]"));
    }
}
