use serde::Serialize;

pub mod config_file;
pub mod detector;
pub mod highlight;
pub mod text_utils;

// Re-export for convenience
pub use detector::{DuplicateMap, find_duplicates};
pub use highlight::{Highlight, HighlightMode, HighlightSpan, highlight_group};
pub use text_utils::normalize_title;

/// A single bibliography entry parsed from a block of input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Bracketed marker preceding the first `]`, e.g. `"1"` for `[1]`.
    pub id: String,
    /// Text between the first and second period of the entry, trimmed.
    pub title: String,
    /// Deduplication key derived from `title` by [`normalize_title`].
    pub normalized_title: String,
    /// The entry's lines joined by single spaces.
    pub raw_text: String,
}

/// Two or more entries sharing the same normalized title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub normalized_title: String,
    pub entries: Vec<Entry>,
}

impl DuplicateGroup {
    /// Entry ids in encounter order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
