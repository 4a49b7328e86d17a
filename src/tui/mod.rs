// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, backend completions)
// - Rendering the UI
//
// All store mutation happens on this loop, so user actions and backend
// answers are applied one at a time.

pub mod app;
pub mod components;
pub mod layout;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::runtime::Executor;
use crate::store::{Completion, Store};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(
    store: Store,
    executor: Executor,
    mut completions: mpsc::Receiver<Completion>,
    log_buffer: LogBuffer,
    config: Config,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(store, &config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, &executor, &mut completions).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources:
/// 1. Keyboard input (turned into store actions)
/// 2. Timer ticks (spinner animation and toast expiry)
/// 3. Backend completions (resolved against the store)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    executor: &Executor,
    completions: &mut mpsc::Receiver<Completion>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(120));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            commands = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => app.handle_key(key_event),
                        _ => Vec::new(),
                    }
                } else {
                    Vec::new()
                }
            } => {
                executor.spawn_all(commands);
            }

            _ = tick_interval.tick() => {
                app.tick_animation();
                app.advance_toasts();
            }

            Some(completion) = completions.recv() => {
                let follow_up = app.apply(completion);
                executor.spawn_all(follow_up);
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}
