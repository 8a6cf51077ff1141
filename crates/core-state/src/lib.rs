//! Editor state: document, cursor, viewport, file name and status message.
//!
//! `EditorState` is an explicit owned value passed by reference into every
//! operation (dispatch, search, render). There is no global state and no
//! interior mutability; the control loop owns the single instance.
//!
//! Cursor invariants (restored by [`EditorState::clamp_cursor`]):
//! * `cy <= document.num_rows()`; `cy == num_rows` is the virtual row past
//!   the end, where typing appends a new row.
//! * `cx <= row_len(cy)` (0 on the virtual row).
//!
//! The visual column `rx` is never stored: [`EditorState::rx`] derives it from
//! `cx` each time it is needed.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use core_syntax::select_profile;
use core_text::Document;

mod viewport;
pub use viewport::{STATUS_ROWS, Viewport};

/// Logical cursor: `cx` indexes row bytes, `cy` indexes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
}

impl Cursor {
    pub fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }
}

/// Status line message paired with the instant it was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    pub fn is_visible(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.set_at) < ttl
    }
}

/// Top-level editor state container.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub document: Document,
    pub file_name: Option<PathBuf>,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub status: Option<StatusMessage>,
}

impl EditorState {
    pub fn new(document: Document, viewport: Viewport) -> Self {
        Self {
            document,
            file_name: None,
            cursor: Cursor::default(),
            viewport,
            status: None,
        }
    }

    /// Set the status message, stamped with the current time.
    pub fn set_status_message<S: Into<String>>(&mut self, text: S) {
        self.set_status_message_at(text, Instant::now());
    }

    pub fn set_status_message_at<S: Into<String>>(&mut self, text: S, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            set_at: now,
        });
    }

    /// Message text if it is still within its display duration.
    pub fn visible_status(&self, now: Instant, ttl: Duration) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| m.is_visible(now, ttl))
            .map(|m| m.text.as_str())
    }

    /// Associate a file name and re-select the language profile from it.
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let profile = path.file_name().and_then(|n| n.to_str()).and_then(select_profile);
        self.document.set_profile(profile);
        self.file_name = Some(path);
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Visual column of the cursor.
    pub fn rx(&self) -> usize {
        self.document
            .row(self.cursor.cy)
            .map_or(0, |row| row.cx_to_rx(self.cursor.cx))
    }

    /// Bring the cursor back inside the document bounds.
    pub fn clamp_cursor(&mut self) {
        let rows = self.document.num_rows();
        if self.cursor.cy > rows {
            self.cursor.cy = rows;
        }
        let len = self.document.row_len(self.cursor.cy);
        if self.cursor.cx > len {
            self.cursor.cx = len;
        }
    }

    /// Scroll the viewport to the cursor and return the cursor's `rx`.
    pub fn scroll(&mut self) -> usize {
        self.clamp_cursor();
        let rx = self.rx();
        self.viewport.scroll_to(self.cursor.cy, rx);
        rx
    }
}
