//! Terminal capabilities the renderer depends on: geometry and cursor/screen
//! control. `AnsiTerminal` implements them with crossterm commands over any
//! writer, so the rendering core never touches the OS directly.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    terminal::{Clear, ClearType},
    tty::IsTty,
};
use log::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TerminalGeometry {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalGeometry {
    /// Used when the terminal cannot be queried.
    pub const DEFAULT: TerminalGeometry = TerminalGeometry {
        columns: 80,
        rows: 24,
    };

    /// Returns `queried`, or [`Self::DEFAULT`] when the query failed.
    pub fn resolve(queried: Option<TerminalGeometry>) -> TerminalGeometry {
        queried.unwrap_or_else(|| {
            info!(
                "terminal size unavailable, assuming {}x{}",
                Self::DEFAULT.columns,
                Self::DEFAULT.rows
            );
            Self::DEFAULT
        })
    }

    /// Queries the controlling terminal. Fails when stdout is not a TTY or
    /// the reported size is zero.
    pub fn query_tty() -> Option<TerminalGeometry> {
        if !io::stdout().is_tty() {
            return None;
        }
        match crossterm::terminal::size() {
            Ok((columns, rows)) if columns > 0 && rows > 0 => {
                Some(TerminalGeometry { columns, rows })
            }
            _ => None,
        }
    }
}

/// What the renderer needs from a terminal besides a byte sink.
pub trait TerminalControl: Write {
    fn query_geometry(&self) -> Option<TerminalGeometry>;

    /// Clears the screen and homes the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum GeometrySource {
    Tty,
    Fixed(Option<TerminalGeometry>),
}

/// An ANSI/VT terminal reached through `out`.
pub struct AnsiTerminal<W: Write> {
    out: W,
    geometry: GeometrySource,
}

impl AnsiTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            geometry: GeometrySource::Tty,
        }
    }
}

impl<W: Write> AnsiTerminal<W> {
    /// A terminal whose geometry query always returns `geometry`.
    pub fn with_geometry(out: W, geometry: Option<TerminalGeometry>) -> Self {
        Self {
            out,
            geometry: GeometrySource::Fixed(geometry),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Write for AnsiTerminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> TerminalControl for AnsiTerminal<W> {
    fn query_geometry(&self) -> Option<TerminalGeometry> {
        match self.geometry {
            GeometrySource::Tty => TerminalGeometry::query_tty(),
            GeometrySource::Fixed(geometry) => geometry,
        }
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.queue(Show)?;
        } else {
            self.out.queue(Hide)?;
        }
        Ok(())
    }
}
