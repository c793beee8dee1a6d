//! Terminal front-end for rewind_tictactoe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::from_cli(&cli)?;
    init_logging(&config)?;

    info!(order = %config.display_order(), "Starting rewind_tui");

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let app = App::new(config.display_order());
    let res = run_app(&mut terminal, app);

    restore_terminal();
    if let Err(err) = terminal.show_cursor() {
        error!(error = %err, "Failed to show cursor");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting rewind_tui");
    res
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Anything already switched on is switched back off if a later step fails.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout()))
                .context("Failed to create terminal")
        });
    if terminal.is_err() {
        restore_terminal();
    }
    terminal
}

/// Leaves the alternate screen and raw mode. Safe to call more than once.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        error!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        error!(error = %err, "Failed to leave alternate screen");
    }
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        previous(panic_info);
    }));
}

/// Sends logs to a file so they don't draw over the alternate screen.
fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Draw, wait for one key, dispatch it; until the user quits.
#[instrument(skip_all)]
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
