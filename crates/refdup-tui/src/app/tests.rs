use super::*;
use crate::action::Action;

const BIBLIOGRAPHY: &str = "\
[1] LeCun Y, Bengio Y, Hinton G. Deep learning. Nature, 2015.
[2] Goodfellow I. Generative adversarial nets. NeurIPS, 2014.
[3] LeCun Y. Deep Learning. Nature 521, 2015.
[4] Goodfellow I, Pouget-Abadie J. Generative Adversarial Nets. 2014.";

/// Create a minimal App for testing (empty buffer, default config).
fn test_app() -> App {
    App::new(
        String::new(),
        Theme::standard(),
        HighlightMode::default(),
        ConfigFile::default(),
    )
}

fn app_with(text: &str) -> App {
    App::new(
        text.to_string(),
        Theme::standard(),
        HighlightMode::default(),
        ConfigFile::default(),
    )
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        if ch == '\n' {
            app.update(Action::InsertNewline);
        } else {
            app.update(Action::InsertChar(ch));
        }
    }
}

// ── Editing ─────────────────────────────────────────────────────

#[test]
fn typing_fills_the_editor() {
    let mut app = test_app();
    type_text(&mut app, "[1] A. Title one. 2020.\n[2] B.");
    assert_eq!(app.editor.text(), "[1] A. Title one. 2020.\n[2] B.");
    assert_eq!(app.focus, Focus::Editor);
}

#[test]
fn paste_inserts_whole_block() {
    let mut app = test_app();
    app.update(Action::Paste(BIBLIOGRAPHY.to_string()));
    assert_eq!(app.editor.text(), BIBLIOGRAPHY);
}

#[test]
fn clear_text_empties_editor() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::ClearText);
    assert!(app.editor.is_empty());
}

// ── Detection ───────────────────────────────────────────────────

#[test]
fn detect_with_duplicates_lists_rows_and_focuses_results() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);

    assert_eq!(
        app.rows,
        vec![
            "重复标题：deep learning（条目：1, 3）",
            "重复标题：generative adversarial nets（条目：2, 4）",
        ]
    );
    assert_eq!(app.session.last_groups.len(), 2);
    assert_eq!(app.focus, Focus::Results);
    assert!(app.notice.is_none());
    assert_eq!(app.selected_row, 0);
}

#[test]
fn detect_without_duplicates_shows_notice() {
    let mut app = app_with("[1] A. Only one. 2020.\n[2] B. Another one. 2021.");
    app.update(Action::Detect);

    assert!(app.rows.is_empty());
    let notice = app.notice.as_ref().unwrap();
    assert_eq!(notice.title, "检测结果");
    assert_eq!(notice.message, "未发现重复的参考文献标题");
    assert_eq!(app.focus, Focus::Editor);
}

#[test]
fn detect_on_empty_editor_shows_notice() {
    let mut app = test_app();
    app.update(Action::Detect);
    assert!(app.notice.is_some());
    assert!(app.rows.is_empty());
}

#[test]
fn notice_blocks_input_until_dismissed() {
    let mut app = test_app();
    app.update(Action::Detect);

    app.update(Action::InsertChar('x'));
    assert!(app.editor.is_empty());
    assert!(app.notice.is_some());

    app.update(Action::NavigateBack);
    assert!(app.notice.is_none());

    app.update(Action::InsertChar('x'));
    assert_eq!(app.editor.text(), "x");
}

#[test]
fn redetect_replaces_previous_rows() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);
    assert_eq!(app.rows.len(), 2);

    app.update(Action::ToggleFocus);
    app.update(Action::ClearText);
    app.update(Action::Paste("[1] A. Solo. 2020.".to_string()));
    app.update(Action::Detect);

    assert!(app.rows.is_empty());
    assert!(app.session.last_groups.is_empty());
}

// ── Selection and highlight ─────────────────────────────────────

#[test]
fn select_row_highlights_group_and_moves_cursor() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);
    app.update(Action::SelectRow);

    let hl = app.highlight.as_ref().unwrap();
    assert_eq!(hl.lines(), vec![0, 2]);
    assert_eq!(app.editor.cursor(), BIBLIOGRAPHY.find("Deep learning").unwrap());
}

#[test]
fn move_down_then_select_highlights_second_group() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);
    app.update(Action::MoveDown);
    app.update(Action::SelectRow);

    assert_eq!(app.selected_row, 1);
    assert_eq!(app.highlight.as_ref().unwrap().lines(), vec![1, 3]);
}

#[test]
fn move_down_stops_at_last_row() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);
    for _ in 0..5 {
        app.update(Action::MoveDown);
    }
    assert_eq!(app.selected_row, 1);

    app.update(Action::GoTop);
    assert_eq!(app.selected_row, 0);
    app.update(Action::GoBottom);
    assert_eq!(app.selected_row, 1);
}

#[test]
fn select_row_without_results_does_nothing() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::SelectRow);
    assert!(app.highlight.is_none());
}

#[test]
fn editing_clears_highlight() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);
    app.update(Action::SelectRow);
    assert!(app.highlight.is_some());

    app.update(Action::ToggleFocus);
    app.update(Action::InsertChar('x'));
    assert!(app.highlight.is_none());
}

#[test]
fn navigate_back_clears_highlight_then_leaves_results() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);
    app.update(Action::SelectRow);

    app.update(Action::NavigateBack);
    assert!(app.highlight.is_none());
    assert_eq!(app.focus, Focus::Results);

    app.update(Action::NavigateBack);
    assert_eq!(app.focus, Focus::Editor);
}

// ── Highlight mode ──────────────────────────────────────────────

#[test]
fn toggle_highlight_mode_flips_session_mode() {
    let mut app = test_app();
    assert_eq!(app.highlight_mode(), HighlightMode::Literal);
    app.update(Action::ToggleHighlightMode);
    assert_eq!(app.highlight_mode(), HighlightMode::Pattern);
    app.update(Action::ToggleHighlightMode);
    assert_eq!(app.highlight_mode(), HighlightMode::Literal);
}

#[test]
fn toggle_mode_recomputes_active_highlight() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::Detect);
    app.update(Action::SelectRow);

    app.update(Action::ToggleHighlightMode);
    let hl = app.highlight.as_ref().unwrap();
    assert_eq!(hl.lines(), vec![0, 2]);
    assert!(app.status.contains("pattern"));
}

// ── Help overlay ────────────────────────────────────────────────

#[test]
fn help_overlay_swallows_actions() {
    let mut app = app_with(BIBLIOGRAPHY);
    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    app.update(Action::Detect);
    assert!(app.rows.is_empty());

    app.update(Action::ToggleHelp);
    assert!(!app.show_help);
}

// ── Quit ────────────────────────────────────────────────────────

#[test]
fn quit_sets_flag() {
    let mut app = test_app();
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn quit_works_while_notice_is_open() {
    let mut app = test_app();
    app.update(Action::Detect);
    assert!(app.update(Action::Quit));
}

// ── Scrolling ───────────────────────────────────────────────────

#[test]
fn cursor_stays_inside_editor_window() {
    let mut app = test_app();
    app.editor_height = 3;
    for _ in 0..10 {
        app.update(Action::InsertNewline);
    }
    assert_eq!(app.editor_scroll, 8);

    app.update(Action::CursorUp);
    app.update(Action::CursorUp);
    app.update(Action::CursorUp);
    assert_eq!(app.editor_scroll, 7);
}

#[test]
fn long_line_scrolls_sideways_with_cursor() {
    let mut app = test_app();
    app.editor_width = 10;
    type_text(&mut app, "[1] Smith. A very long bibliography title. 2020.");
    let len = "[1] Smith. A very long bibliography title. 2020.".len();
    assert_eq!(app.cursor_column(), len);
    assert_eq!(app.editor_hscroll, len + 1 - 10);

    app.update(Action::CursorHome);
    assert_eq!(app.editor_hscroll, 0);

    app.update(Action::CursorEnd);
    assert_eq!(app.editor_hscroll, len + 1 - 10);
}

#[test]
fn wide_characters_count_double_for_sideways_scroll() {
    let mut app = test_app();
    app.editor_width = 6;
    type_text(&mut app, "深度学习");
    assert_eq!(app.cursor_column(), 8);
    assert_eq!(app.editor_hscroll, 3);
}
