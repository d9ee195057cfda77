use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Notice;
use crate::theme::Theme;
use crate::view::centered_rect;

/// Render a notice as a centered popup.
pub fn render(f: &mut Frame, notice: &Notice, theme: &Theme) {
    let area = f.area();
    let width = (Span::raw(notice.message.as_str()).width() as u16 + 8).max(30);
    let popup = centered_rect(width, 5, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", notice.message),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "  Enter / Esc",
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": OK", Style::default().fg(theme.dim)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.notice))
            .title(format!(" {} ", notice.title)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
