/// Whether a line opens a new bibliography entry.
///
/// A line opens an entry when, trimmed, it starts with `[` and contains a
/// `]` somewhere after it.
pub fn is_entry_start(line: &str) -> bool {
    let stripped = line.trim();
    stripped.starts_with('[') && stripped.contains(']')
}

/// Split bibliography text into candidate blocks.
///
/// Lines accumulate into the current block until an entry-start line is
/// seen; the accumulated block is then closed and the entry-start line begins
/// the next one. Lines keep their original whitespace and are joined with a
/// single space. Text before the first entry-start line becomes a block of
/// its own, and text without any entry-start line is exactly one block.
pub fn segment_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if is_entry_start(line) && !current.is_empty() {
            blocks.push(current.join(" "));
            current.clear();
        }
        current.push(line);
    }

    if !current.is_empty() {
        blocks.push(current.join(" "));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_start_detection() {
        assert!(is_entry_start("[1] Smith. Title. 2020."));
        assert!(is_entry_start("   [12]"));
        assert!(is_entry_start("[a]b"));
        assert!(!is_entry_start("[1 Smith. Title."));
        assert!(!is_entry_start("Smith [1]. Title."));
        assert!(!is_entry_start(""));
    }

    #[test]
    fn test_segment_ieee_blocks() {
        let text = "[1] Smith. Deep\nLearning. 2020.\n[2] Jones. Graphs. 2021.";
        let blocks = segment_blocks(text);
        assert_eq!(
            blocks,
            vec![
                "[1] Smith. Deep Learning. 2020.".to_string(),
                "[2] Jones. Graphs. 2021.".to_string(),
            ]
        );
    }

    #[test]
    fn test_segment_preamble_is_its_own_block() {
        let text = "References\n[1] Smith. Deep Learning. 2020.";
        let blocks = segment_blocks(text);
        assert_eq!(blocks, vec!["References", "[1] Smith. Deep Learning. 2020."]);
    }

    #[test]
    fn test_segment_keeps_untrimmed_lines_and_blank_lines() {
        let text = "  [1] A. T. 1.\n\n   cont.\n[2] B. U. 2.";
        let blocks = segment_blocks(text);
        assert_eq!(blocks, vec!["  [1] A. T. 1.     cont.", "[2] B. U. 2."]);
    }

    #[test]
    fn test_segment_without_markers_is_single_block() {
        let blocks = segment_blocks("one\ntwo\nthree");
        assert_eq!(blocks, vec!["one two three"]);
    }

    #[test]
    fn test_segment_empty_text() {
        assert_eq!(segment_blocks(""), vec![String::new()]);
    }
}
