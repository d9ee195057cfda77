use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use refdup_session::Highlight;

use crate::app::{App, Focus};
use crate::theme::Theme;

/// Placeholder shown while the buffer is empty.
const PLACEHOLDER: &str = "在此输入参考文献列表";

/// Render the bibliography editor with duplicate highlights.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Editor;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(" 参考文献 ");

    let lines: Vec<Line> = if app.editor.is_empty() {
        vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        visible_lines(
            app.editor.text(),
            app.editor_scroll,
            app.editor_height,
            app.highlight.as_ref(),
            theme,
        )
    };

    // Lines are already cut to the vertical window; only scroll sideways.
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((0, app.editor_hscroll as u16));
    f.render_widget(paragraph, area);

    let modal_open = app.notice.is_some() || app.show_help;
    if focused && !modal_open {
        let (line, _) = app.editor.cursor_line_col();
        let col = app.cursor_column().saturating_sub(app.editor_hscroll) as u16;
        let row = line.saturating_sub(app.editor_scroll) as u16;
        f.set_cursor_position(Position::new(
            (area.x + 1 + col).min(area.right().saturating_sub(2)),
            area.y + 1 + row,
        ));
    }
}

/// Build the styled lines in view, marking highlighted parts.
fn visible_lines<'a>(
    text: &'a str,
    scroll: usize,
    height: usize,
    highlight: Option<&Highlight>,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let text_style = Style::default().fg(theme.text);
    let mut lines = Vec::with_capacity(height);
    let mut offset = 0;

    for (line_no, line) in text.split('\n').enumerate() {
        let line_offset = offset;
        offset += line.len() + 1;

        if line_no < scroll {
            continue;
        }
        if lines.len() >= height {
            break;
        }

        let start = highlight.and_then(|hl| hl.line_start(line_no));
        let styled = match start {
            Some(start) if start >= line_offset && start - line_offset <= line.len() => {
                let (before, matched) = line.split_at(start - line_offset);
                Line::from(vec![
                    Span::styled(before, text_style),
                    Span::styled(matched, theme.match_style()),
                ])
            }
            _ => Line::from(Span::styled(line, text_style)),
        };
        lines.push(styled);
    }

    lines
}
