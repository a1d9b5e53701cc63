//! Host display handle

use crate::error::Result;
use std::io::Write;

/// ANSI: clear screen, cursor home
const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Display the pages are drawn on
pub trait Viewport {
    /// Reset the display so the next page is read from the top
    fn scroll_to_top(&mut self) -> Result<()>;
}

/// Terminal viewport that clears the screen on reset
///
/// When `enabled` is false (output is not a terminal) resets are skipped.
#[derive(Debug)]
pub struct TerminalViewport<W> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalViewport<W> {
    /// Create a viewport writing escape codes to `out`
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Viewport for TerminalViewport<W> {
    fn scroll_to_top(&mut self) -> Result<()> {
        if self.enabled {
            self.out.write_all(CLEAR_AND_HOME.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn scroll_to_top(&mut self) -> Result<()> {
        (**self).scroll_to_top()
    }
}
