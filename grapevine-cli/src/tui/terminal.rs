//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::actions;
use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;
use crate::client::PostsApi;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI against the given API
pub async fn run(api: &dyn PostsApi) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new();
    actions::refresh(&mut app, api).await;

    let result = run_loop(&mut terminal, &mut app, api).await;

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    api: &dyn PostsApi,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // 100ms timeout keeps the UI responsive
        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(100))? {
            match handle_key(app, key) {
                HandleResult::Quit => break,
                HandleResult::Continue => {}
                HandleResult::Refresh => actions::refresh(app, api).await,
                HandleResult::Submit(submission) => actions::submit(app, api, submission).await,
                HandleResult::Delete(id) => actions::delete(app, api, id).await,
            }
        }
    }

    Ok(())
}
