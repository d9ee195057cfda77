use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Focus};

/// Render the title bar with the current highlight mode.
pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(" 参考文献重复检测（基于标题） ", theme.header_style()),
        Span::styled(
            format!(" mode: {} ", app.highlight_mode()),
            Style::default().fg(theme.active),
        ),
        Span::styled(
            &app.status,
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render key hints for the focused pane.
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Editor => {
            " F5/Ctrl+d:detect  Tab:results  Ctrl+l:clear  Ctrl+t:mode  Ctrl+s:save  F1:help  Ctrl+c:quit"
        }
        Focus::Results => {
            " j/k:nav  Enter:highlight  d:detect  m:mode  Esc:clear  Tab:editor  ?:help  q:quit"
        }
    };
    let footer = Line::from(Span::styled(hints, app.theme.footer_style()));
    f.render_widget(Paragraph::new(footer), area);
}
