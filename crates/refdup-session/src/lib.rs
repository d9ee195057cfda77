use serde::Serialize;

// Re-export domain types for convenience
pub use refdup_core::{
    DuplicateGroup, Entry, Highlight, HighlightMode, HighlightSpan, find_duplicates,
    highlight_group,
};
pub use refdup_parsing::{ParseReport, parse_entries, parse_entries_with_report};

/// Title of the acknowledgment shown when a run finds nothing.
pub const RESULT_TITLE: &str = "检测结果";
/// Message of the acknowledgment shown when a run finds nothing.
pub const NO_DUPLICATES_MESSAGE: &str = "未发现重复的参考文献标题";

/// State carried between detect and select interactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// The bibliography text as the user last submitted it.
    pub input_text: String,
    /// Groups from the most recent detection, one per display row.
    pub last_groups: Vec<DuplicateGroup>,
    pub highlight_mode: HighlightMode,
}

impl Session {
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: HighlightMode) -> Self {
        self.highlight_mode = mode;
        self
    }

    /// The group behind display row `row_index`.
    pub fn group(&self, row_index: usize) -> Option<&DuplicateGroup> {
        self.last_groups.get(row_index)
    }
}

/// What a detection run found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetectStatus {
    /// No block produced an entry.
    NoEntries,
    /// Entries were parsed but every title is unique.
    NoDuplicates,
    Duplicates { groups: usize },
}

impl DetectStatus {
    /// Acknowledgment message for runs that found no duplicates.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::NoEntries | Self::NoDuplicates => Some(NO_DUPLICATES_MESSAGE),
            Self::Duplicates { .. } => None,
        }
    }
}

/// Result of [`on_detect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectOutcome {
    pub status: DetectStatus,
    /// One display string per duplicate group.
    pub rows: Vec<String>,
    pub entries_parsed: usize,
    /// Blocks without an extractable title.
    pub dropped_blocks: usize,
}

/// Display string for one duplicate group.
pub fn display_row(group: &DuplicateGroup) -> String {
    format!(
        "重复标题：{}（条目：{}）",
        group.normalized_title,
        group.ids().join(", ")
    )
}

/// Run parsing and duplicate detection over the session's input text.
///
/// The returned session holds the new groups; groups from earlier runs are
/// discarded even when this run finds nothing.
pub fn on_detect(session: Session) -> (Session, DetectOutcome) {
    let report = parse_entries_with_report(&session.input_text);
    let groups = find_duplicates(&report.entries).into_groups();

    let status = if report.entries.is_empty() {
        DetectStatus::NoEntries
    } else if groups.is_empty() {
        DetectStatus::NoDuplicates
    } else {
        DetectStatus::Duplicates {
            groups: groups.len(),
        }
    };

    tracing::info!(
        entries = report.entries.len(),
        dropped = report.dropped_blocks,
        groups = groups.len(),
        "detection run"
    );

    let outcome = DetectOutcome {
        status,
        rows: groups.iter().map(display_row).collect(),
        entries_parsed: report.entries.len(),
        dropped_blocks: report.dropped_blocks,
    };

    let session = Session {
        last_groups: groups,
        ..session
    };
    (session, outcome)
}

/// Highlight the group behind `row_index` in the session's input text.
///
/// Returns `None` when the row does not exist.
pub fn on_select_row(session: &Session, row_index: usize) -> Option<Highlight> {
    let group = session.group(row_index)?;
    Some(highlight_group(
        &session.input_text,
        group,
        session.highlight_mode,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DUPES: &str = "[1] Smith. Deep Learning. 2020.\n[2] Jones. deep   learning. 2021.";

    #[test]
    fn test_display_row_format() {
        let (_, outcome) = on_detect(Session::new(TWO_DUPES));
        assert_eq!(outcome.rows, vec!["重复标题：deep learning（条目：1, 2）"]);
    }

    #[test]
    fn test_detect_stores_groups() {
        let (session, outcome) = on_detect(Session::new(TWO_DUPES));
        assert_eq!(outcome.status, DetectStatus::Duplicates { groups: 1 });
        assert_eq!(outcome.entries_parsed, 2);
        assert_eq!(outcome.dropped_blocks, 0);
        assert_eq!(session.last_groups.len(), 1);
        assert_eq!(session.input_text, TWO_DUPES);
        assert!(outcome.status.notice().is_none());
    }

    #[test]
    fn test_detect_distinguishes_no_entries_from_no_duplicates() {
        let (_, outcome) = on_detect(Session::new("[1] Smith 2020 no periods here"));
        assert_eq!(outcome.status, DetectStatus::NoEntries);
        assert_eq!(outcome.status.notice(), Some(NO_DUPLICATES_MESSAGE));
        assert_eq!(outcome.dropped_blocks, 1);

        let (_, outcome) = on_detect(Session::new("[1] A. One. 1.\n[2] B. Two. 2."));
        assert_eq!(outcome.status, DetectStatus::NoDuplicates);
        assert_eq!(outcome.status.notice(), Some(NO_DUPLICATES_MESSAGE));
        assert!(outcome.rows.is_empty());
    }

    #[test]
    fn test_detect_replaces_previous_groups() {
        let (mut session, _) = on_detect(Session::new(TWO_DUPES));
        assert_eq!(session.last_groups.len(), 1);

        session.input_text = "[1] A. One. 1.".to_string();
        let (session, outcome) = on_detect(session);
        assert!(session.last_groups.is_empty());
        assert!(outcome.rows.is_empty());
    }

    #[test]
    fn test_select_row_highlights_group() {
        let (session, _) = on_detect(Session::new(TWO_DUPES));
        let hl = on_select_row(&session, 0).unwrap();
        assert_eq!(hl.lines(), vec![0, 1]);
        assert_eq!(hl.scroll_to, Some(11));
    }

    #[test]
    fn test_select_row_out_of_range() {
        let (session, _) = on_detect(Session::new(TWO_DUPES));
        assert!(on_select_row(&session, 1).is_none());
        assert!(on_select_row(&Session::default(), 0).is_none());
    }

    #[test]
    fn test_select_row_uses_session_mode() {
        let text = "[1] A. Deep, Learning. 1.\n[2] B. deep learning. 2.";
        let (session, _) = on_detect(Session::new(text));
        // Literal scan looks for "deep learning", present only on line 1.
        assert_eq!(on_select_row(&session, 0).unwrap().lines(), vec![1]);

        let session = session.with_mode(HighlightMode::Pattern);
        // Pattern search finds "Deep, Learning" on line 0 and "deep learning" on line 1.
        assert_eq!(on_select_row(&session, 0).unwrap().lines(), vec![0, 1]);
    }
}
