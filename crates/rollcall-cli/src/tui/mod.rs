mod app;
mod ui;

pub use app::BrowseApp;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rollcall_runtime::Instant;
use std::io;
use std::time::Duration;

/// Upper bound on how long the loop blocks waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the terminal when the browser exits, including on error.
struct TerminalGuard {
    restore: fn(),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Raw mode first, then the guard, then the alternate screen: a failure
/// after raw mode is on still restores the terminal.
fn enter(
    raw_mode: impl FnOnce() -> io::Result<()>,
    alternate_screen: impl FnOnce() -> io::Result<()>,
    restore: fn(),
) -> io::Result<TerminalGuard> {
    raw_mode()?;
    let guard = TerminalGuard { restore };
    alternate_screen()?;
    Ok(guard)
}

pub fn run(mut app: BrowseApp) -> Result<()> {
    let _guard = enter(
        enable_raw_mode,
        || execute!(io::stdout(), EnterAlternateScreen),
        restore_terminal,
    )?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Wake up no later than the pending filter commit.
        let timeout = app.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());
    }

    tracing::debug!("browser closed");
    Ok(())
}
