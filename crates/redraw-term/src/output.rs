//! Status-region output control.
//!
//! Sequence construction is delegated to crossterm's `Command` values; this
//! module only decides which commands to issue and writes them to the sink.
//! Keeping the sink generic lets tests capture the emitted bytes instead of
//! touching a real terminal.

use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::cursor::MoveToColumn;
use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;

/// Stateless facade over terminal erase and cursor-movement sequences.
///
/// Every operation is an independent write: nothing is retained between
/// calls, and a failed write surfaces as the sink's `io::Error` unchanged.
pub struct TerminalOutput<W: Write> {
    sink: W,
}

impl TerminalOutput<Stdout> {
    /// Controller targeting the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Erases `count` lines, counted from the cursor's line upward, and
    /// leaves the cursor at column 0 of the topmost erased line.
    ///
    /// The caller is responsible for passing a count consistent with how
    /// many lines were actually printed; no bounds checking happens here.
    /// `count == 0` writes no bytes.
    pub fn clear_lines(&mut self, count: u16) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        for _ in 1..count {
            queue!(self.sink, Clear(ClearType::CurrentLine), MoveUp(1))?;
        }
        queue!(self.sink, Clear(ClearType::CurrentLine), MoveToColumn(0))?;
        self.sink.flush()
    }

    /// Erases the full screen and homes the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.sink, Clear(ClearType::All), MoveTo(0, 0))?;
        self.sink.flush()
    }

    /// Moves the cursor up `count` rows without erasing.
    ///
    /// `count == 0` writes no bytes; a zero-parameter CSI sequence would
    /// still move the cursor one row on most terminals.
    pub fn cursor_up(&mut self, count: u16) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        queue!(self.sink, MoveUp(count))?;
        self.sink.flush()
    }

    /// Erases from the cursor position to the end of the visible screen.
    pub fn clear_from_cursor(&mut self) -> io::Result<()> {
        queue!(self.sink, Clear(ClearType::FromCursorDown))?;
        self.sink.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
