mod update;

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;

use refdup_core::config_file::ConfigFile;
use refdup_session::{DetectOutcome, Highlight, HighlightMode, Session};

use crate::model::editor::TextBuffer;
use crate::theme::Theme;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Results,
}

/// A modal acknowledgment that must be dismissed before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

pub struct App {
    pub editor: TextBuffer,
    pub session: Session,
    /// Display rows from the last detection, parallel to `session.last_groups`.
    pub rows: Vec<String>,
    pub selected_row: usize,
    /// Highlight for the last selected row; cleared on edit.
    pub highlight: Option<Highlight>,
    pub last_outcome: Option<DetectOutcome>,
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub show_help: bool,
    pub status: String,
    pub theme: Theme,
    pub config: ConfigFile,

    /// First editor line shown on screen.
    pub editor_scroll: usize,
    /// Editor lines that fit on screen, updated on each render.
    pub editor_height: usize,
    /// First editor column shown on screen.
    pub editor_hscroll: usize,
    /// Editor columns that fit on screen, updated on each render.
    pub editor_width: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(text: String, theme: Theme, mode: HighlightMode, config: ConfigFile) -> Self {
        Self {
            editor: TextBuffer::new(text),
            session: Session::default().with_mode(mode),
            rows: Vec::new(),
            selected_row: 0,
            highlight: None,
            last_outcome: None,
            focus: Focus::Editor,
            notice: None,
            show_help: false,
            status: String::new(),
            theme,
            config,
            editor_scroll: 0,
            editor_height: 10,
            editor_hscroll: 0,
            editor_width: 80,
            should_quit: false,
        }
    }

    pub fn highlight_mode(&self) -> HighlightMode {
        self.session.highlight_mode
    }

    /// Keep the editor cursor inside the visible window.
    pub fn ensure_cursor_visible(&mut self) {
        let (line, _) = self.editor.cursor_line_col();
        let height = self.editor_height.max(1);
        if line < self.editor_scroll {
            self.editor_scroll = line;
        } else if line >= self.editor_scroll + height {
            self.editor_scroll = line + 1 - height;
        }

        let col = self.cursor_column();
        let width = self.editor_width.max(1);
        if col < self.editor_hscroll {
            self.editor_hscroll = col;
        } else if col >= self.editor_hscroll + width {
            self.editor_hscroll = col + 1 - width;
        }
    }

    /// Display column of the cursor within its line.
    pub fn cursor_column(&self) -> usize {
        Span::raw(self.editor.cursor_prefix()).width()
    }

    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();
        let results_height = (area.height / 3).clamp(5, 14);

        let chunks = Layout::vertical([
            Constraint::Length(1),              // header
            Constraint::Min(5),                 // editor
            Constraint::Length(results_height), // result list
            Constraint::Length(1),              // footer
        ])
        .split(area);

        crate::view::status::render_header(f, chunks[0], self);

        // Borders take two rows and two columns.
        self.editor_height = chunks[1].height.saturating_sub(2) as usize;
        self.editor_width = chunks[1].width.saturating_sub(2) as usize;
        self.ensure_cursor_visible();
        crate::view::editor::render_in(f, self, chunks[1]);

        crate::view::results::render_in(f, self, chunks[2]);
        crate::view::status::render_footer(f, chunks[3], self);

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
        if let Some(ref notice) = self.notice {
            crate::view::notice::render(f, notice, &self.theme);
        }
    }
}
