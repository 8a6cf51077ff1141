//! Incremental search session.
//!
//! A [`SearchSession`] lives for the duration of one `Ctrl-F` prompt and is
//! fed every key. It owns the query, the last matched row, the scan
//! direction, the highlight buffer displaced by the current match overlay,
//! and the cursor/offsets captured when it started (restored on `Esc`).
//!
//! Each key first restores any displaced highlight, then:
//! * `Esc` -> cursor and offsets restored, [`SearchStep::Cancelled`].
//! * `Enter` with a non-empty query -> cursor kept, [`SearchStep::Accepted`].
//! * arrows right/down scan forward from the last match, left/up backward.
//! * anything else (query edits included) restarts from the top, forward.
//!
//! A scan visits each row at most once, wrapping around the document, and
//! matches the query literally against the rendered row text.

use core_events::{KeyCode, KeyEvent};
use core_state::{Cursor, EditorState};
use core_syntax::Highlight;

use crate::prompt::{PromptInput, PromptKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Outcome of feeding one key to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    NoMatch,
    /// Match found; `col` is the byte column the cursor moved to.
    Matched { row: usize, col: usize },
    Cancelled,
    Accepted(String),
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    input: PromptInput,
    last_match: Option<usize>,
    direction: SearchDirection,
    saved_highlight: Option<(usize, Vec<Highlight>)>,
    saved_cursor: Cursor,
    saved_row_offset: usize,
    saved_col_offset: usize,
}

impl SearchSession {
    pub fn new(state: &EditorState) -> Self {
        Self {
            input: PromptInput::new(),
            last_match: None,
            direction: SearchDirection::Forward,
            saved_highlight: None,
            saved_cursor: state.cursor,
            saved_row_offset: state.viewport.row_offset,
            saved_col_offset: state.viewport.col_offset,
        }
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    pub fn feed(&mut self, state: &mut EditorState, key: &KeyEvent) -> SearchStep {
        self.restore_overlay(state);
        match self.input.feed(key) {
            PromptKey::Cancel => {
                state.cursor = self.saved_cursor;
                state.viewport.row_offset = self.saved_row_offset;
                state.viewport.col_offset = self.saved_col_offset;
                self.last_match = None;
                tracing::debug!(target: "actions.search", "search_cancelled");
                SearchStep::Cancelled
            }
            PromptKey::Submit => {
                self.last_match = None;
                let query = self.input.text().to_owned();
                tracing::debug!(target: "actions.search", query_len = query.len(), "search_accepted");
                SearchStep::Accepted(query)
            }
            PromptKey::Edited | PromptKey::Other => {
                match key.code {
                    KeyCode::Right | KeyCode::Down => self.direction = SearchDirection::Forward,
                    KeyCode::Left | KeyCode::Up => self.direction = SearchDirection::Backward,
                    _ => {
                        self.last_match = None;
                        self.direction = SearchDirection::Forward;
                    }
                }
                if self.last_match.is_none() {
                    self.direction = SearchDirection::Forward;
                }
                self.scan(state)
            }
        }
    }

    fn scan(&mut self, state: &mut EditorState) -> SearchStep {
        let needle = self.input.text().as_bytes().to_vec();
        let n = state.document.num_rows();
        if needle.is_empty() || n == 0 {
            self.last_match = None;
            return SearchStep::NoMatch;
        }
        let mut current = self.last_match;
        for _ in 0..n {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(i), SearchDirection::Forward) => (i.min(n - 1) + 1) % n,
                (Some(i), SearchDirection::Backward) => i.min(n - 1).checked_sub(1).unwrap_or(n - 1),
            };
            current = Some(next);
            let Some(row) = state.document.row(next) else {
                continue;
            };
            let Some(offset) = row.find_rendered(&needle) else {
                continue;
            };
            let col = row.rx_to_cx(offset);
            self.last_match = Some(next);
            state.cursor = Cursor::new(col, next);
            // Past-the-end offset makes the next scroll put the match on top.
            state.viewport.row_offset = n;
            self.saved_highlight = state
                .document
                .overlay_highlight(next, offset..offset + needle.len(), Highlight::Match)
                .map(|saved| (next, saved));
            tracing::debug!(target: "actions.search", row = next, col, query_len = needle.len(), "search_match");
            return SearchStep::Matched { row: next, col };
        }
        self.last_match = None;
        tracing::trace!(target: "actions.search", query_len = needle.len(), "search_no_match");
        SearchStep::NoMatch
    }

    /// Put back the highlight displaced by the current match overlay.
    pub fn restore_overlay(&mut self, state: &mut EditorState) {
        if let Some((row, saved)) = self.saved_highlight.take() {
            state.document.restore_highlight(row, saved);
        }
    }
}
