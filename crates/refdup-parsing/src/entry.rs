use once_cell::sync::Lazy;
use regex::Regex;

use refdup_core::{Entry, normalize_title};

/// Parse a single space-joined block into an [`Entry`].
///
/// Returns `None` when the block has no title span, i.e. fewer than two
/// periods.
pub fn parse_entry(block: &str) -> Option<Entry> {
    let title = extract_title(block)?;
    Some(Entry {
        id: extract_id(block),
        normalized_title: normalize_title(&title),
        title,
        raw_text: block.to_string(),
    })
}

/// The entry marker: text before the first `]`, with surrounding `[`/`]`
/// characters removed and then whitespace trimmed.
///
/// Without any `]` this is the whole block. Leading whitespace is trimmed
/// only after the brackets, so `"  [3] ..."` yields `"[3"`.
pub fn extract_id(block: &str) -> String {
    let marker = block.split(']').next().unwrap_or_default();
    marker
        .trim_matches(&['[', ']'][..])
        .trim()
        .to_string()
}

/// The title: the text between the first period and the next one.
///
/// Surrounding whitespace is not part of the title. Abbreviated author
/// initials defeat this rule (`"W. J. Smith. Title."` yields `"J"`).
pub fn extract_title(block: &str) -> Option<String> {
    static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s*(.*?)\s*\.").unwrap());

    TITLE_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
