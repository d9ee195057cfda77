use std::fmt;
use std::str::FromStr;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::text_utils::{line_end, line_of};
use crate::{DuplicateGroup, Entry};

/// How a selected group is located in the input buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Plain substring scan for each entry's normalized title in the
    /// lowercased buffer.
    #[default]
    Literal,
    /// Case-insensitive search for each entry's raw title.
    Pattern,
}

impl HighlightMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Pattern => "pattern",
        }
    }

    /// The other mode, for toggling.
    pub fn toggled(self) -> Self {
        match self {
            Self::Literal => Self::Pattern,
            Self::Pattern => Self::Literal,
        }
    }
}

impl fmt::Display for HighlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HighlightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "pattern" => Ok(Self::Pattern),
            other => Err(format!(
                "unknown highlight mode '{other}' (expected 'literal' or 'pattern')"
            )),
        }
    }
}

/// A highlighted region: from a match start to the end of its line.
///
/// Offsets are byte offsets into the buffer that was highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    /// 0-based line number containing `start`.
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Highlighting for one selected duplicate group.
///
/// The span list replaces any earlier highlighting wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Sorted by `start`, at most one span per start offset.
    pub spans: Vec<HighlightSpan>,
    /// Offset of the first entry's title inside that entry's own `raw_text`.
    ///
    /// This is not an offset into the buffer. Renderers that scroll to it may
    /// land on a position that does not line up with `spans`.
    pub scroll_to: Option<usize>,
}

impl Highlight {
    /// Distinct line numbers covered by spans, ascending.
    pub fn lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.spans.iter().map(|s| s.line).collect();
        lines.dedup();
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Earliest highlighted byte offset on `line`, if any span covers it.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.spans
            .iter()
            .filter(|s| s.line == line)
            .map(|s| s.start)
            .min()
    }

    /// Line of `buffer` that `scroll_to` lands on when used as a buffer
    /// offset, clamped to the buffer.
    pub fn scroll_line(&self, buffer: &str) -> Option<usize> {
        let mut offset = self.scroll_to?.min(buffer.len());
        while !buffer.is_char_boundary(offset) {
            offset -= 1;
        }
        Some(line_of(buffer, offset))
    }
}

/// Compute highlight spans in `buffer` for every entry of `group`.
pub fn highlight_group(buffer: &str, group: &DuplicateGroup, mode: HighlightMode) -> Highlight {
    highlight_entries(buffer, &group.entries, mode)
}

/// Compute highlight spans in `buffer` for `entries`.
pub fn highlight_entries(buffer: &str, entries: &[Entry], mode: HighlightMode) -> Highlight {
    let mut spans = Vec::new();

    match mode {
        HighlightMode::Literal => {
            let lowered = LoweredText::new(buffer);
            for entry in entries {
                spans.extend(literal_spans(buffer, &lowered, entry));
            }
        }
        HighlightMode::Pattern => {
            for entry in entries {
                spans.extend(pattern_spans(buffer, entry));
            }
        }
    }

    spans.sort_by_key(|s| s.start);
    spans.dedup_by_key(|s| s.start);

    let scroll_to = entries
        .first()
        .and_then(|e| e.raw_text.find(e.title.as_str()));

    tracing::debug!(
        mode = %mode,
        entries = entries.len(),
        spans = spans.len(),
        "highlight computed"
    );

    Highlight { spans, scroll_to }
}

/// Lowercased copy of a buffer that remembers, for every byte, the offset of
/// the original character it came from.
struct LoweredText {
    text: String,
    origin: Vec<usize>,
}

impl LoweredText {
    fn new(buffer: &str) -> Self {
        // Whole-string lowercasing applies the word-final sigma rule, like
        // the needle. Per-char lowercasing yields the same char counts, so
        // the two iterators stay in step.
        let text = buffer.to_lowercase();
        let mut origin = Vec::with_capacity(text.len() + 1);
        let mut lowered = text.chars();
        for (offset, ch) in buffer.char_indices() {
            for _ in ch.to_lowercase() {
                if let Some(lower) = lowered.next() {
                    origin.extend(std::iter::repeat_n(offset, lower.len_utf8()));
                }
            }
        }
        origin.push(buffer.len());
        Self { text, origin }
    }

    /// Byte offset `count` characters after `from`, clamped to the end.
    fn advance(&self, from: usize, count: usize) -> usize {
        self.text[from..]
            .char_indices()
            .nth(count)
            .map(|(i, _)| from + i)
            .unwrap_or(self.text.len())
    }
}

fn literal_spans(buffer: &str, lowered: &LoweredText, entry: &Entry) -> Vec<HighlightSpan> {
    let needle = entry.normalized_title.as_str();
    if needle.is_empty() {
        return Vec::new();
    }

    // The scan resumes one raw-title length past each match start.
    let step = entry.title.chars().count().max(1);
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(found) = lowered.text[pos..].find(needle) {
        let index = pos + found;
        let start = lowered.origin[index];
        tracing::trace!(id = %entry.id, start, "literal match");
        spans.push(span_from(buffer, start));
        pos = lowered.advance(index, step);
    }
    spans
}

fn pattern_spans(buffer: &str, entry: &Entry) -> Vec<HighlightSpan> {
    if entry.title.is_empty() {
        return Vec::new();
    }

    let re = match RegexBuilder::new(&regex::escape(&entry.title))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(id = %entry.id, error = %e, "could not build title pattern");
            return Vec::new();
        }
    };

    re.find_iter(buffer)
        .map(|m| {
            tracing::trace!(id = %entry.id, start = m.start(), "pattern match");
            span_from(buffer, m.start())
        })
        .collect()
}

fn span_from(buffer: &str, start: usize) -> HighlightSpan {
    HighlightSpan {
        line: line_of(buffer, start),
        start,
        end: line_end(buffer, start),
    }
}
