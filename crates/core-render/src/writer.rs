//! Frame writer.
//!
//! Every terminal operation of a frame is queued into one in-memory buffer
//! with crossterm's `queue!`; the caller writes the buffer out in a single
//! call. Row text is copied through verbatim (bytes, not `str`).
//!
//! Invariants:
//! * Commands preserve ordering; nothing reaches the terminal mid-frame.
//! * Positions are absolute, (0,0) origin; caller ensures bounds.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

#[derive(Debug, Default)]
pub struct FrameWriter {
    buf: Vec<u8>,
}

impl FrameWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
        }
    }

    pub fn hide_cursor(&mut self) -> Result<()> {
        queue!(self.buf, Hide)?;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> Result<()> {
        queue!(self.buf, Show)?;
        Ok(())
    }

    pub fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.buf, MoveTo(x, y))?;
        Ok(())
    }

    /// Erase from the cursor to the end of the line.
    pub fn clear_line(&mut self) -> Result<()> {
        queue!(self.buf, Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    /// `None` restores the default foreground.
    pub fn set_fg(&mut self, color: Option<Color>) -> Result<()> {
        queue!(self.buf, SetForegroundColor(color.unwrap_or(Color::Reset)))?;
        Ok(())
    }

    pub fn reverse(&mut self) -> Result<()> {
        queue!(self.buf, SetAttribute(Attribute::Reverse))?;
        Ok(())
    }

    pub fn reset_attributes(&mut self) -> Result<()> {
        queue!(self.buf, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    pub fn print(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn newline(&mut self) {
        self.buf.extend_from_slice(b"\r\n");
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Write the whole frame with one `write_all` and flush.
    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        out.write_all(&self.buf).context("writing frame")?;
        out.flush().context("flushing frame")?;
        Ok(())
    }
}
