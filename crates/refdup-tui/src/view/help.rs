use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(64, 27, area);

    let lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section_header("Anywhere", theme),
        key_line("F5 / Ctrl+d", "Detect duplicate titles", theme),
        key_line("Tab", "Switch editor / results", theme),
        key_line("Ctrl+t", "Toggle literal / pattern highlighting", theme),
        key_line("Ctrl+s", "Save settings to config file", theme),
        key_line("Esc", "Clear highlight / back to editor", theme),
        key_line("F1", "Toggle this help", theme),
        key_line("Ctrl+c", "Quit", theme),
        Line::from(""),
        section_header("Editor", theme),
        key_line("Arrows", "Move cursor", theme),
        key_line("Home / End", "Start / end of line", theme),
        key_line("Ctrl+l", "Clear all text", theme),
        key_line("Paste", "Insert bibliography text", theme),
        Line::from(""),
        section_header("Results", theme),
        key_line("j / \u{2193}", "Move down", theme),
        key_line("k / \u{2191}", "Move up", theme),
        key_line("g / G", "Go to top / bottom", theme),
        key_line("Enter", "Highlight entries in the text", theme),
        key_line("m", "Toggle highlight mode", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q", "Quit", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<16}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
