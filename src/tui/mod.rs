//! Terminal grid front-end.
//!
//! Owns the terminal for the lifetime of a session and feeds key presses
//! to the engine through [`App`].

mod app;
mod input;
mod ui;
mod view;

pub use app::App;
pub use view::TerminalView;

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive grid until the user quits.
#[instrument(skip_all, fields(title = %config.title()))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting terminal grid");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let poll_interval = Duration::from_millis(*config.poll_interval_ms());
    let res = run_app(&mut terminal, &mut app, poll_interval);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(status = %app.engine().status_message(), "Terminal grid closed");

    res
}

/// Draw, wait for one key, hand it to the app.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(poll_interval)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
