pub mod block;
pub mod entry;

pub use block::{is_entry_start, segment_blocks};
pub use entry::{extract_id, extract_title, parse_entry};
// Re-export domain types from core (canonical definitions live there)
pub use refdup_core::{Entry, normalize_title};

/// Entries parsed from one input text, with block statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub entries: Vec<Entry>,
    /// Number of candidate blocks found in the input.
    pub total_blocks: usize,
    /// Blocks dropped because no title could be extracted.
    pub dropped_blocks: usize,
}

/// Parse raw bibliography text into entries.
///
/// Pipeline:
/// 1. Split the text into blocks at lines that start with `[` and contain `]`
/// 2. Join each block's lines with single spaces
/// 3. Extract id, title and normalized title from each block
/// 4. Drop blocks without a first-period-to-second-period title
pub fn parse_entries(text: &str) -> Vec<Entry> {
    parse_entries_with_report(text).entries
}

/// Like [`parse_entries`], but also reports how many blocks were dropped.
pub fn parse_entries_with_report(text: &str) -> ParseReport {
    let blocks = segment_blocks(text);
    let total_blocks = blocks.len();

    let mut entries = Vec::with_capacity(total_blocks);
    for (index, block) in blocks.iter().enumerate() {
        match parse_entry(block) {
            Some(entry) => entries.push(entry),
            None => {
                tracing::debug!(block = index, text = %block, "dropping block without a title");
            }
        }
    }

    let dropped_blocks = total_blocks - entries.len();
    tracing::debug!(total_blocks, dropped_blocks, "parsed bibliography text");

    ParseReport {
        entries,
        total_blocks,
        dropped_blocks,
    }
}
