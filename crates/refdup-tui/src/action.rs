/// User actions produced by input mapping and consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Run parsing and duplicate detection on the editor text.
    Detect,
    ToggleFocus,

    // Editor
    InsertChar(char),
    InsertNewline,
    Paste(String),
    Backspace,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    ClearText,

    // Result list
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,
    SelectRow,

    NavigateBack,
    ToggleHelp,
    ToggleHighlightMode,
    SaveConfig,
    None,
}
