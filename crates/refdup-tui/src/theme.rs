use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub name: &'static str,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub match_fg: Color,
    pub match_bg: Color,
    pub notice: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Default theme: duplicate lines marked in bright yellow.
    pub fn standard() -> Self {
        Self {
            name: "default",

            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            active: Color::Rgb(60, 140, 255),
            match_fg: Color::Black,
            match_bg: Color::Rgb(255, 255, 0),
            notice: Color::Rgb(0, 200, 80),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    /// Monochrome theme for terminals without color support.
    pub fn mono() -> Self {
        Self {
            name: "mono",

            header_fg: Color::Black,
            header_bg: Color::White,
            border: Color::Gray,
            text: Color::Reset,
            dim: Color::Gray,
            highlight_bg: Color::DarkGray,
            active: Color::White,
            match_fg: Color::Black,
            match_bg: Color::White,
            notice: Color::White,
            footer_fg: Color::Gray,
            footer_bg: Color::Reset,
        }
    }

    /// Look up a theme by config/CLI name; unknown names fall back to default.
    pub fn by_name(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            _ => Self::standard(),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for text marked as part of the selected duplicate group.
    pub fn match_style(&self) -> Style {
        Style::default().fg(self.match_fg).bg(self.match_bg)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.active)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
