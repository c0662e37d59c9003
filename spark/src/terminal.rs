use std::io;

/// Source of the current terminal width, queried once per tick.
pub trait TerminalSize: Send {
    fn columns(&self) -> io::Result<u16>;
}

/// Asks the controlling terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermTerminal;

impl TerminalSize for CrosstermTerminal {
    fn columns(&self) -> io::Result<u16> {
        crossterm::terminal::size().map(|(columns, _rows)| columns)
    }
}

/// Always reports the same width. Useful when output is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub u16);

impl TerminalSize for FixedWidth {
    fn columns(&self) -> io::Result<u16> {
        Ok(self.0)
    }
}

impl<F> TerminalSize for F
where
    F: Fn() -> io::Result<u16> + Send,
{
    fn columns(&self) -> io::Result<u16> {
        self()
    }
}
