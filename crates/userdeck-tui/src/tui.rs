//! Terminal initialization, restoration, and panic-safe cleanup.
//!
//! Wraps the crossterm + ratatui terminal lifecycle so the rest of the app
//! never has to think about raw mode or alternate screen.

use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand, cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Backend = CrosstermBackend<Stdout>;

/// Terminal wrapper that handles setup, teardown, and panic recovery.
pub struct Tui {
    pub terminal: Terminal<Backend>,
    mouse: bool,
}

impl Tui {
    /// Create a new terminal instance (does NOT enter raw mode yet).
    ///
    /// `mouse` decides whether `enter` captures mouse clicks.
    pub fn new(mouse: bool) -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal, mouse })
    }

    /// Enter TUI mode: alternate screen, raw mode, hidden cursor, and
    /// mouse capture when enabled.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        if self.mouse {
            stdout().execute(EnableMouseCapture)?;
        }
        stdout().execute(cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Exit TUI mode: restore terminal to its original state.
    pub fn exit(&mut self) {
        restore();
    }

    /// Draw a frame using the provided render closure.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.exit();
    }
}

/// Best-effort restoration; partial failures are ignored.
fn restore() {
    let _ = stdout().execute(cursor::Show);
    let _ = stdout().execute(DisableMouseCapture);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Install panic and error hooks that restore the terminal before printing.
///
/// Must be called BEFORE entering the terminal, so panics during init
/// also get clean output.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();

    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        panic_hook(info);
    }));

    Ok(())
}
