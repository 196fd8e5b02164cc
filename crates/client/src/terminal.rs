//! Terminal setup and teardown.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::event::{
    DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen; returns the terminal and
/// whether key release events are available.
///
/// Hold-to-roll needs release events, which terminals only deliver under
/// the kitty keyboard protocol. Where the protocol is unsupported the
/// client falls back to tap-to-roll.
pub fn setup() -> Result<(Tui, bool)> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;

    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, enhanced))
}

/// Restores the terminal to its pre-launch state.
pub fn restore(enhanced: bool) -> Result<()> {
    let mut stdout = io::stdout();
    if enhanced {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    execute!(stdout, DisableFocusChange, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}
