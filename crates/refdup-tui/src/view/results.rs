use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::{App, Focus};
use crate::view::truncate;

/// Render the duplicate-group list.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Results;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(format!(" 重复结果 ({}) ", app.rows.len()));

    if app.rows.is_empty() {
        let hint = if app.last_outcome.is_some() {
            " 未发现重复的参考文献标题"
        } else {
            " 检测重复（按标题）: F5 / Ctrl+d"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.dim),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2} ", i + 1), Style::default().fg(theme.dim)),
                Span::styled(
                    truncate(row, width.saturating_sub(3)),
                    Style::default().fg(theme.text),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight_style());

    let mut state = ListState::default();
    state.select(Some(app.selected_row));
    f.render_stateful_widget(list, area, &mut state);
}
