use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use refdup_core::HighlightMode;
use refdup_core::config_file::{self, ConfigFile};
use refdup_session::{Session, on_detect, on_select_row};

mod output;

use output::ColorMode;

/// Duplicate Reference Detector - Find bibliography entries that share a title
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect duplicate titles in a numbered bibliography
    Detect {
        /// Text file with one `[n]`-numbered entry per reference (stdin if omitted)
        file_path: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Highlight the given result row (1-based) in the input text
        #[arg(short, long)]
        select: Option<usize>,

        /// How selected rows are located in the text: literal or pattern
        #[arg(long)]
        highlight_mode: Option<HighlightMode>,
    },

    /// Show config file locations and the effective settings
    Config,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config_file::load_config();

    match cli.command {
        Command::Detect {
            file_path,
            no_color,
            json,
            select,
            highlight_mode,
        } => detect(file_path, no_color, json, select, highlight_mode, &config),
        Command::Config => show_config(&config),
    }
}

fn detect(
    file_path: Option<PathBuf>,
    no_color: bool,
    json: bool,
    select: Option<usize>,
    highlight_mode: Option<HighlightMode>,
    config: &ConfigFile,
) -> anyhow::Result<()> {
    let text = read_input(file_path.as_ref())?;
    let mode = config.resolve_highlight_mode(highlight_mode)?;

    let color = ColorMode(!no_color && !json && config.color().unwrap_or(true));
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    write_detection(&mut out, &mut err, text, mode, json, select, color)
}

/// Run detection over `text` and report it. A `select` row that does not
/// exist is noted on `err` after the normal report; it is not an error.
fn write_detection(
    out: &mut dyn Write,
    err: &mut dyn Write,
    text: String,
    mode: HighlightMode,
    json: bool,
    select: Option<usize>,
    color: ColorMode,
) -> anyhow::Result<()> {
    let (session, outcome) = on_detect(Session::new(text).with_mode(mode));

    let highlight = select
        .and_then(|row| row.checked_sub(1))
        .and_then(|index| on_select_row(&session, index));

    if json {
        output::print_json(out, &session, &outcome, highlight.as_ref())?;
    } else {
        output::print_rows(out, &outcome.rows, color)?;
        output::print_summary(out, &outcome, color)?;

        if let (Some(hl), Some(row)) = (highlight.as_ref(), select) {
            writeln!(out)?;
            output::print_highlight(out, &session.input_text, row, hl, color)?;
        }
    }

    if let (None, Some(row)) = (highlight.as_ref(), select) {
        output::print_missing_row(err, row, outcome.rows.len(), color)?;
    }

    Ok(())
}

/// Read the bibliography from `path`, or from stdin when no path is given.
fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn show_config(config: &ConfigFile) -> anyhow::Result<()> {
    let mut writer = std::io::stdout().lock();
    match config_file::config_path() {
        Some(path) => writeln!(writer, "Platform config: {}", path.display())?,
        None => writeln!(writer, "Platform config: (no config directory)")?,
    }
    writeln!(writer, "Local override:  .refdup.toml")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "highlight.mode = {}",
        config.resolve_highlight_mode(None)?
    )?;
    writeln!(
        writer,
        "display.theme  = {}",
        config.theme().unwrap_or("default")
    )?;
    writeln!(
        writer,
        "display.color  = {}",
        config.color().unwrap_or(true)
    )?;
    Ok(())
}
