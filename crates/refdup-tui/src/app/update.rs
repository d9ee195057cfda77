use refdup_core::config_file::{self, DisplayConfig, HighlightConfig};
use refdup_session::{RESULT_TITLE, on_detect, on_select_row};

use super::{App, Focus, Notice};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        if action == Action::Quit {
            self.should_quit = true;
            return true;
        }

        // Notice modal — any confirming key dismisses it
        if self.notice.is_some() {
            if matches!(
                action,
                Action::NavigateBack | Action::SelectRow | Action::InsertNewline
            ) {
                self.notice = None;
            }
            return false;
        }

        // Help overlay intercepts everything except its own toggles
        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::NavigateBack) {
                self.show_help = false;
            }
            return false;
        }

        match action {
            Action::Detect => self.detect(),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Editor => Focus::Results,
                    Focus::Results => Focus::Editor,
                };
            }
            Action::NavigateBack => {
                if self.highlight.take().is_some() {
                    self.status = "Highlight cleared".to_string();
                } else if self.focus == Focus::Results {
                    self.focus = Focus::Editor;
                }
            }
            Action::ToggleHelp => self.show_help = true,
            Action::ToggleHighlightMode => self.toggle_highlight_mode(),
            Action::SaveConfig => self.save_config(),

            Action::InsertChar(ch) => self.edit(|e| e.insert_char(ch)),
            Action::InsertNewline => self.edit(|e| e.insert_char('\n')),
            Action::Paste(text) => self.edit(|e| e.insert_str(&text)),
            Action::Backspace => self.edit(|e| {
                e.backspace();
            }),
            Action::DeleteForward => self.edit(|e| {
                e.delete_forward();
            }),
            Action::ClearText => self.edit(|e| e.clear()),
            Action::CursorLeft => self.editor.move_left(),
            Action::CursorRight => self.editor.move_right(),
            Action::CursorUp => self.editor.move_up(),
            Action::CursorDown => self.editor.move_down(),
            Action::CursorHome => self.editor.move_home(),
            Action::CursorEnd => self.editor.move_end(),

            Action::MoveUp => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            Action::MoveDown => {
                if self.selected_row + 1 < self.rows.len() {
                    self.selected_row += 1;
                }
            }
            Action::GoTop => self.selected_row = 0,
            Action::GoBottom => self.selected_row = self.rows.len().saturating_sub(1),
            Action::SelectRow => self.select_row(),

            Action::Quit | Action::None => {}
        }

        self.ensure_cursor_visible();
        false
    }

    /// Apply an edit to the buffer. Spans refer to the old text, so any
    /// highlight is dropped.
    fn edit(&mut self, f: impl FnOnce(&mut crate::model::editor::TextBuffer)) {
        f(&mut self.editor);
        self.highlight = None;
    }

    fn detect(&mut self) {
        let mut session = std::mem::take(&mut self.session);
        session.input_text = self.editor.text().to_string();
        let (session, outcome) = on_detect(session);
        self.session = session;

        self.rows = outcome.rows.clone();
        self.selected_row = 0;
        self.highlight = None;
        self.status = format!(
            "Parsed {} entries, {} duplicate groups ({} blocks without a title)",
            outcome.entries_parsed,
            self.rows.len(),
            outcome.dropped_blocks
        );

        if let Some(message) = outcome.status.notice() {
            self.notice = Some(Notice {
                title: RESULT_TITLE.to_string(),
                message: message.to_string(),
            });
        } else {
            self.focus = Focus::Results;
        }
        self.last_outcome = Some(outcome);
    }

    fn select_row(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        // Highlight against the text as it is now, not as it was at detect time.
        self.session.input_text = self.editor.text().to_string();
        let Some(hl) = on_select_row(&self.session, self.selected_row) else {
            return;
        };

        if let Some(offset) = hl.scroll_to {
            self.editor.set_cursor(offset);
        }
        self.status = format!(
            "Row {}: {} highlighted lines ({} mode)",
            self.selected_row + 1,
            hl.lines().len(),
            self.highlight_mode()
        );
        self.highlight = Some(hl);
    }

    fn toggle_highlight_mode(&mut self) {
        self.session.highlight_mode = self.session.highlight_mode.toggled();
        if self.highlight.is_some() {
            self.select_row();
        } else {
            self.status = format!("Highlight mode: {}", self.highlight_mode());
        }
    }

    fn save_config(&mut self) {
        self.config.highlight = Some(HighlightConfig {
            mode: Some(self.highlight_mode()),
        });
        let color = self.config.color();
        self.config.display = Some(DisplayConfig {
            theme: Some(self.theme.name.to_string()),
            color,
        });

        self.status = match config_file::save_config(&self.config) {
            Ok(path) => format!("Saved config to {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to save config");
                format!("Could not save config: {}", e)
            }
        };
    }
}
