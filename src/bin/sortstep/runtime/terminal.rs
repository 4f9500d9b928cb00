use std::io::{self, Stdout, Write};

use crossterm::cursor::Show;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::terminal::TerminalCapabilities;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode on an alternate screen; mouse capture and bracketed paste only
/// where the terminal handles them.
pub fn init_terminal(caps: &TerminalCapabilities) -> io::Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = enter_screen(&mut stdout, caps) {
        let _ = restore_terminal(caps);
        return Err(err);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn enter_screen(out: &mut impl Write, caps: &TerminalCapabilities) -> io::Result<()> {
    execute!(out, EnterAlternateScreen)?;
    if caps.supports_mouse {
        execute!(out, EnableMouseCapture)?;
    }
    if caps.supports_bracketed_paste {
        execute!(out, EnableBracketedPaste)?;
    }
    Ok(())
}

/// Undoes [`init_terminal`]; every step is attempted and the first error wins.
pub fn restore_terminal(caps: &TerminalCapabilities) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut result = disable_raw_mode();
    if caps.supports_mouse {
        result = result.and(execute!(stdout, DisableMouseCapture));
    }
    if caps.supports_bracketed_paste {
        result = result.and(execute!(stdout, DisableBracketedPaste));
    }
    result.and(execute!(stdout, LeaveAlternateScreen, Show))
}
