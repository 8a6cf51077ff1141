//! Screen compositor.
//!
//! One refresh = scroll the viewport onto the cursor, compose a full frame
//! into a [`FrameWriter`], write it out once. Frame layout, top to bottom:
//! * `viewport.rows` text rows: the rendered slice
//!   `[col_offset, col_offset + cols)` with syntax colors, `~` past the end
//!   of the document, and a welcome banner when the document is empty.
//! * status bar in reverse video.
//! * message line (latest status message while it is fresh).
//!
//! Colors are emitted only when the active color changes. Control bytes are
//! shown in reverse video as `@` + byte (`?` for DEL).

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use core_state::EditorState;
use core_text::Row;

use crate::status::{StatusContext, build_status};
use crate::style::{ColorRun, color_for};
use crate::writer::FrameWriter;

pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn welcome_message() -> String {
    format!("Macho editor -- version {}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone)]
pub struct RenderEngine {
    message_ttl: Duration,
    frames: u64,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_TIMEOUT)
    }
}

impl RenderEngine {
    pub fn new(message_ttl: Duration) -> Self {
        Self {
            message_ttl,
            frames: 0,
        }
    }

    pub fn message_ttl(&self) -> Duration {
        self.message_ttl
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Scroll, compose and write one frame to `out`.
    pub fn refresh<W: Write>(&mut self, state: &mut EditorState, out: &mut W) -> Result<()> {
        let rx = state.scroll();
        let frame = self.compose(state, rx, Instant::now())?;
        let bytes = frame.as_bytes().len();
        frame.flush_to(out)?;
        self.frames += 1;
        tracing::trace!(target: "render", frame = self.frames, bytes, "frame_written");
        Ok(())
    }

    /// Build the frame for an already scrolled state. `rx` is the cursor's
    /// visual column.
    pub fn compose(&self, state: &EditorState, rx: usize, now: Instant) -> Result<FrameWriter> {
        let vp = &state.viewport;
        let mut w = FrameWriter::with_capacity((vp.rows + 2) * (vp.cols + 16));
        w.hide_cursor()?;
        w.move_to(0, 0)?;
        draw_rows(&mut w, state)?;
        draw_status_bar(&mut w, state)?;
        draw_message_bar(&mut w, state, now, self.message_ttl)?;
        let x = rx.saturating_sub(vp.col_offset);
        let y = state.cursor.cy.saturating_sub(vp.row_offset);
        w.move_to(clamp_u16(x), clamp_u16(y))?;
        w.show_cursor()?;
        Ok(w)
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn draw_rows(w: &mut FrameWriter, state: &EditorState) -> Result<()> {
    let vp = &state.viewport;
    let doc = &state.document;
    for y in 0..vp.rows {
        let file_row = y + vp.row_offset;
        match doc.row(file_row) {
            Some(row) => draw_row(w, row, vp.col_offset, vp.cols)?,
            None if doc.is_empty() && y == vp.rows / 3 => draw_welcome(w, vp.cols),
            None => w.print(b"~"),
        }
        w.clear_line()?;
        w.newline();
    }
    Ok(())
}

fn draw_welcome(w: &mut FrameWriter, cols: usize) {
    let msg = welcome_message();
    let len = msg.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        w.print(b"~");
        padding -= 1;
    }
    w.print(&b" ".repeat(padding));
    w.print(&msg.as_bytes()[..len]);
}

fn draw_row(w: &mut FrameWriter, row: &Row, col_offset: usize, cols: usize) -> Result<()> {
    let start = col_offset.min(row.rsize());
    let end = (col_offset + cols).min(row.rsize());
    let text = &row.render()[start..end];
    let hl = &row.highlight()[start..end];
    let mut run = ColorRun::default();
    for (&b, &h) in text.iter().zip(hl) {
        if b.is_ascii_control() {
            let sym = if b == 0x7f { b'?' } else { b'@' + b };
            w.reverse()?;
            w.print(&[sym]);
            w.reset_attributes()?;
            if let Some(color) = run.current() {
                w.set_fg(Some(color))?;
            }
            continue;
        }
        if let Some(change) = run.switch(color_for(h)) {
            w.set_fg(change)?;
        }
        w.print(&[b]);
    }
    w.set_fg(None)?;
    Ok(())
}

fn draw_status_bar(w: &mut FrameWriter, state: &EditorState) -> Result<()> {
    let ctx = StatusContext {
        file_name: state.file_name(),
        num_rows: state.document.num_rows(),
        dirty: state.document.is_dirty(),
        filetype: state.document.profile().map(|p| p.name),
        line: state.cursor.cy,
    };
    w.reverse()?;
    w.print(&build_status(&ctx, state.viewport.cols));
    w.reset_attributes()?;
    w.newline();
    Ok(())
}

fn draw_message_bar(
    w: &mut FrameWriter,
    state: &EditorState,
    now: Instant,
    ttl: Duration,
) -> Result<()> {
    w.clear_line()?;
    if let Some(msg) = state.visible_status(now, ttl) {
        let bytes = msg.as_bytes();
        w.print(&bytes[..bytes.len().min(state.viewport.cols)]);
    }
    Ok(())
}
