// Tab Strip
// TUI application showing a row of configurable tab items

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tab_strip::core::App;
use tab_strip::load_and_validate_config;
use tab_strip::ui::run_app;

/// Log filter; logging stays off when unset
const LOG_FILTER_ENV: &str = "TAB_STRIP_LOG";
/// Log file path, defaults to `tab-strip.log`
const LOG_FILE_ENV: &str = "TAB_STRIP_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "tab-strip.log";

// ┌──────────────────────────────────────────────────────────────────────────────┐
// │                               MAIN ENTRY POINT                               │
// └──────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, theme) = load_and_validate_config(config_path)?;
    let mut app = App::from_config(&config, theme)?;
    let tick_rate = Duration::from_millis(config.application.tick_rate_ms);
    let mouse_enabled = config.application.mouse_enabled;

    tracing::info!(tabs = config.tabs.len(), mouse_enabled, "starting tab strip");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "tab strip exited with an error");
    }
    result
}

/// Write tracing output to a file when `TAB_STRIP_LOG` is set
///
/// The terminal belongs to the UI, so nothing is logged to stdout.
fn init_logging() -> Result<()> {
    let Ok(filter) = std::env::var(LOG_FILTER_ENV) else {
        return Ok(());
    };
    let path = std::env::var(LOG_FILE_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {path}"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}
