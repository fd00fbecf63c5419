use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{self, Clear, ClearType},
};
use om_core::{MonitorError, Result};
use std::io::Write;

/// Where frames are drawn.
pub trait Screen {
    /// `(columns, rows)` right now.
    fn size(&self) -> Result<(u16, u16)>;

    /// Clear everything, then write `lines` top to bottom.
    fn draw(&mut self, lines: &[String]) -> Result<()>;
}

/// The controlling terminal, via stdout.
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl<W: Write> Terminal<W> {
    /// Print a single line without clearing, e.g. before the first frame.
    pub fn notice(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Screen for Terminal<W> {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().map_err(|e| MonitorError::Terminal(format!("cannot read terminal size: {e}")))
    }

    fn draw(&mut self, lines: &[String]) -> Result<()> {
        queue!(self.out, Clear(ClearType::Purge), Clear(ClearType::All), MoveTo(0, 0))?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
