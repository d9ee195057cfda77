use std::io::Write;

use owo_colors::OwoColorize;
use serde::Serialize;

use refdup_core::{DuplicateGroup, Highlight};
use refdup_session::{DetectOutcome, DetectStatus, RESULT_TITLE, Session};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print one line per duplicate group.
pub fn print_rows(w: &mut dyn Write, rows: &[String], color: ColorMode) -> std::io::Result<()> {
    for (i, row) in rows.iter().enumerate() {
        if color.enabled() {
            writeln!(w, "{:>3}. {}", (i + 1).bold(), row.yellow())?;
        } else {
            writeln!(w, "{:>3}. {}", i + 1, row)?;
        }
    }
    Ok(())
}

/// Print the parse counts and, when nothing was found, the acknowledgment.
pub fn print_summary(
    w: &mut dyn Write,
    outcome: &DetectOutcome,
    color: ColorMode,
) -> std::io::Result<()> {
    if let Some(notice) = outcome.status.notice() {
        if color.enabled() {
            writeln!(w, "{} {}", format!("{RESULT_TITLE}:").bold(), notice.green())?;
        } else {
            writeln!(w, "{RESULT_TITLE}: {notice}")?;
        }
    }

    let groups = match outcome.status {
        DetectStatus::Duplicates { groups } => groups,
        _ => 0,
    };
    let summary = format!(
        "Parsed {} entries, {} duplicate groups ({} blocks without a title)",
        outcome.entries_parsed, groups, outcome.dropped_blocks
    );
    if color.enabled() {
        writeln!(w, "{}", summary.dimmed())?;
    } else {
        writeln!(w, "{}", summary)?;
    }
    Ok(())
}

/// Print the input text with the selected group's lines marked.
///
/// Highlighted lines get a `>` gutter and their matched part is
/// emphasized from the match start to the end of the line.
pub fn print_highlight(
    w: &mut dyn Write,
    text: &str,
    row: usize,
    highlight: &Highlight,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w, "Row {} ({} highlighted lines):", row, highlight.lines().len())?;

    let mut line_offset = 0;
    for (line_no, line) in text.split('\n').enumerate() {
        match highlight.line_start(line_no) {
            Some(start) => {
                let split = start - line_offset;
                let (before, matched) = line.split_at(split);
                if color.enabled() {
                    writeln!(w, "{} {}{}", ">".yellow().bold(), before, matched.black().on_yellow())?;
                } else {
                    writeln!(w, "> {}[{}]", before, matched)?;
                }
            }
            None => writeln!(w, "  {}", line)?,
        }
        line_offset += line.len() + 1;
    }

    if let Some(line) = highlight.scroll_line(text) {
        let msg = format!("Scroll target: line {}", line + 1);
        if color.enabled() {
            writeln!(w, "{}", msg.dimmed())?;
        } else {
            writeln!(w, "{}", msg)?;
        }
    }
    Ok(())
}

/// Note that a requested result row does not exist.
pub fn print_missing_row(
    w: &mut dyn Write,
    row: usize,
    rows: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let msg = format!("Result row {} does not exist ({} rows)", row, rows);
    if color.enabled() {
        writeln!(w, "{} {}", "Note:".yellow().bold(), msg)
    } else {
        writeln!(w, "Note: {}", msg)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    outcome: &'a DetectOutcome,
    groups: &'a [DuplicateGroup],
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight: Option<&'a Highlight>,
}

/// Print the detection result as a pretty JSON document.
pub fn print_json(
    w: &mut dyn Write,
    session: &Session,
    outcome: &DetectOutcome,
    highlight: Option<&Highlight>,
) -> anyhow::Result<()> {
    let report = JsonReport {
        outcome,
        groups: &session.last_groups,
        highlight,
    };
    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)?;
    Ok(())
}
