use once_cell::sync::Lazy;
use regex::Regex;

/// Normalize a title into its deduplication key.
///
/// Every maximal run of non-word characters becomes a single space, the
/// result is trimmed and lowercased. Word characters are letters, numbers of
/// any kind and `_`, so CJK titles and superscript digits stay intact while
/// combining marks act as separators.
pub fn normalize_title(title: &str) -> String {
    static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]+").unwrap());

    NON_WORD_RE
        .replace_all(title, " ")
        .trim()
        .to_lowercase()
}

/// Byte offset of the end of the line containing `offset` (the next `\n`,
/// or the end of `text`).
pub fn line_end(text: &str, offset: usize) -> usize {
    text[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(text.len())
}

/// 0-based line number of the byte at `offset`.
pub fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count()
}
