#![forbid(unsafe_code)]

//! Terminal session lifecycle.
//!
//! A [`TerminalSession`] owns raw mode and any optional terminal features
//! it enables, and restores everything in reverse order on drop (normal
//! exit or panic unwind). Only one session should exist at a time.

use std::io::{self, Write};
use std::sync::Once;

use crate::event::Event;

static PANIC_HOOK: Once = Once::new();

/// Restore the terminal before the default panic hook prints, so the
/// message is readable instead of landing in the alternate screen.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let mut stdout = io::stdout();
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
            let _ = crossterm::terminal::disable_raw_mode();
            default_hook(info);
        }));
    });
}

/// Options for terminal feature setup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Switch to the alternate screen buffer, preserving scrollback.
    pub alternate_screen: bool,

    /// Hide the cursor for the lifetime of the session.
    pub hide_cursor: bool,
}

impl SessionOptions {
    /// Options for a full-screen application (alt screen, hidden cursor).
    #[must_use]
    pub fn fullscreen() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
        }
    }
}

/// A terminal session that manages raw mode and cleanup.
///
/// # Contract
///
/// - Creating a session enters raw mode; dropping it restores the
///   terminal, including on panic.
/// - Each optional feature has an `_enabled` flag so cleanup only
///   disables what was actually enabled.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    alternate_screen_enabled: bool,
    cursor_hidden: bool,
}

impl TerminalSession {
    /// Enter raw mode and enable the requested features.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or a requested feature cannot be
    /// enabled; anything already enabled is rolled back by drop.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();
        crossterm::terminal::enable_raw_mode()?;
        #[cfg(feature = "tracing")]
        tracing::debug!("terminal raw mode enabled");

        let mut session = Self {
            options,
            alternate_screen_enabled: false,
            cursor_hidden: false,
        };

        let mut stdout = io::stdout();
        if options.alternate_screen {
            crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
            session.alternate_screen_enabled = true;
        }
        if options.hide_cursor {
            crossterm::execute!(stdout, crossterm::cursor::Hide)?;
            session.cursor_hidden = true;
        }

        Ok(session)
    }

    /// Create a minimal session (raw mode only).
    pub fn minimal() -> io::Result<Self> {
        Self::new(SessionOptions::default())
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    /// Poll for an event. `Ok(true)` means an event is ready to read.
    pub fn poll_event(&self, timeout: std::time::Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    /// Read the next event, blocking until one is available.
    ///
    /// Returns `Ok(None)` for events the canonical [`Event`] type does
    /// not model.
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        let event = crossterm::event::read()?;
        Ok(Event::from_crossterm(event))
    }

    /// The options this session was created with.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();
        if self.cursor_hidden {
            let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
            self.cursor_hidden = false;
        }
        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        #[cfg(feature = "tracing")]
        tracing::debug!("terminal session restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_options() {
        let opts = SessionOptions::fullscreen();
        assert!(opts.alternate_screen);
        assert!(opts.hide_cursor);
    }

    #[test]
    fn default_options_are_minimal() {
        let opts = SessionOptions::default();
        assert!(!opts.alternate_screen);
        assert!(!opts.hide_cursor);
    }
}
