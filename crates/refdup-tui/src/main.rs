use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use refdup_core::HighlightMode;
use refdup_core::config_file;

mod action;
mod app;
mod input;
mod model;
mod theme;
mod view;

use app::App;

/// Refdup TUI - paste a numbered bibliography and find entries that share a title.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text file to load into the editor
    file_path: Option<PathBuf>,

    /// Color theme: default or mono
    #[arg(long)]
    theme: Option<String>,

    /// How selected rows are located in the text: literal or pattern
    #[arg(long)]
    highlight_mode: Option<HighlightMode>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file.
    let _log_guard = init_logging();

    let config = config_file::load_config();

    let text = match args.file_path {
        Some(ref path) => {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            std::fs::read_to_string(path)?
        }
        None => String::new(),
    };

    // Resolve settings from CLI flags > env vars > config file > defaults
    let mode = config.resolve_highlight_mode(args.highlight_mode)?;
    let theme_name = args
        .theme
        .clone()
        .or_else(|| config.theme().map(str::to_string))
        .unwrap_or_else(|| "default".to_string());
    let theme = theme::Theme::by_name(&theme_name);

    tracing::info!(mode = %mode, theme = theme.name, "starting refdup-tui");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(text, theme, mode, config);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        if event::poll(tick_rate)? {
            let evt = event::read()?;
            let action = input::map_event(&evt, app.focus);
            if app.update(action) {
                break;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Send logs to `<cache_dir>/refdup/refdup-tui.log`. Logging is skipped when
/// there is no cache directory.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::cache_dir()?.join("refdup");
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, "refdup-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
