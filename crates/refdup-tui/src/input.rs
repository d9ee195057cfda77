use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::app::Focus;

/// Map a crossterm terminal event to a TUI action, respecting focus.
pub fn map_event(event: &Event, focus: Focus) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of focus
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }
            if let Some(action) = map_key_global(key) {
                return action;
            }

            match focus {
                Focus::Editor => map_key_editor(key),
                Focus::Results => map_key_results(key),
            }
        }
        Event::Paste(text) if focus == Focus::Editor => Action::Paste(text.clone()),
        _ => Action::None,
    }
}

/// Keys that mean the same thing in every pane.
fn map_key_global(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::F(5) => Action::Detect,
        KeyCode::Char('d') if ctrl => Action::Detect,
        KeyCode::Char('s') if ctrl => Action::SaveConfig,
        KeyCode::Char('t') if ctrl => Action::ToggleHighlightMode,
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
        KeyCode::Esc => Action::NavigateBack,
        _ => return None,
    };
    Some(action)
}

fn map_key_editor(key: &KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('l') if ctrl => Action::ClearText,
        KeyCode::Char(_) if ctrl => Action::None,
        KeyCode::Char(c) => Action::InsertChar(c),
        KeyCode::Enter => Action::InsertNewline,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::DeleteForward,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Up => Action::CursorUp,
        KeyCode::Down => Action::CursorDown,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        _ => Action::None,
    }
}

fn map_key_results(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectRow,
        KeyCode::Char('d') => Action::Detect,
        KeyCode::Char('m') => Action::ToggleHighlightMode,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let evt = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_event(&evt, Focus::Editor), Action::Quit);
        assert_eq!(map_event(&evt, Focus::Results), Action::Quit);
    }

    #[test]
    fn letters_type_in_editor_but_navigate_results() {
        let q = press(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_event(&q, Focus::Editor), Action::InsertChar('q'));
        assert_eq!(map_event(&q, Focus::Results), Action::Quit);

        let j = press(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(map_event(&j, Focus::Results), Action::MoveDown);
    }

    #[test]
    fn detect_keys() {
        let f5 = press(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(map_event(&f5, Focus::Editor), Action::Detect);
        let ctrl_d = press(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(map_event(&ctrl_d, Focus::Editor), Action::Detect);
    }

    #[test]
    fn paste_only_reaches_editor() {
        let paste = Event::Paste("[1] A. B. C.".into());
        assert_eq!(
            map_event(&paste, Focus::Editor),
            Action::Paste("[1] A. B. C.".into())
        );
        assert_eq!(map_event(&paste, Focus::Results), Action::None);
    }
}
