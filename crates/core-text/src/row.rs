use std::ops::Range;

use core_syntax::{Highlight, LanguageProfile, classify};

use crate::coords;

/// Tab stop used for rendering and column mapping.
pub const TAB_STOP: usize = 8;

/// One line of the document.
///
/// Invariant: `render` is `chars` with tabs expanded and `highlight` has one
/// entry per `render` byte. Every mutator below re-projects before returning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
    highlight: Vec<Highlight>,
}

impl Row {
    pub fn new(bytes: &[u8], profile: Option<&LanguageProfile>) -> Self {
        let mut row = Self {
            chars: bytes.to_vec(),
            render: Vec::new(),
            highlight: Vec::new(),
        };
        row.project(profile);
        row
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Length of `chars`.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length of `render`.
    pub fn rsize(&self) -> usize {
        self.render.len()
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    pub fn cx_to_rx(&self, cx: usize) -> usize {
        coords::cx_to_rx(&self.chars, cx)
    }

    pub fn rx_to_cx(&self, rx: usize) -> usize {
        coords::rx_to_cx(&self.chars, rx)
    }

    /// Offset of the first occurrence of `needle` in `render`. An empty
    /// needle never matches.
    pub fn find_rendered(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.render.len() {
            return None;
        }
        self.render.windows(needle.len()).position(|w| w == needle)
    }

    /// Recompute `render` and `highlight` from `chars`.
    pub(crate) fn project(&mut self, profile: Option<&LanguageProfile>) {
        self.render = expand_tabs(&self.chars);
        self.highlight = classify(&self.render, profile);
    }

    pub(crate) fn insert_byte(&mut self, at: usize, c: u8, profile: Option<&LanguageProfile>) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, c);
        self.project(profile);
    }

    /// Returns false when `at` is not a valid byte index.
    pub(crate) fn delete_byte(&mut self, at: usize, profile: Option<&LanguageProfile>) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        self.project(profile);
        true
    }

    pub(crate) fn append(&mut self, bytes: &[u8], profile: Option<&LanguageProfile>) {
        self.chars.extend_from_slice(bytes);
        self.project(profile);
    }

    /// Truncate to `chars[..at]` and return the removed tail.
    pub(crate) fn split_off(&mut self, at: usize, profile: Option<&LanguageProfile>) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.project(profile);
        tail
    }

    /// Paint `hl` over `range` of the highlight buffer and return the
    /// previous buffer for later restoration. `range` is clamped to `rsize`.
    pub(crate) fn paint(&mut self, range: Range<usize>, hl: Highlight) -> Vec<Highlight> {
        let saved = self.highlight.clone();
        let end = range.end.min(self.highlight.len());
        let start = range.start.min(end);
        self.highlight[start..end].fill(hl);
        saved
    }

    /// Put back a buffer returned by [`Row::paint`]. Ignored if the row was
    /// re-projected to a different length in between.
    pub(crate) fn restore_highlight(&mut self, saved: Vec<Highlight>) -> bool {
        if saved.len() != self.highlight.len() {
            return false;
        }
        self.highlight = saved;
        true
    }
}

fn expand_tabs(chars: &[u8]) -> Vec<u8> {
    let tabs = chars.iter().filter(|&&c| c == b'\t').count();
    let mut render = Vec::with_capacity(chars.len() + tabs * (TAB_STOP - 1));
    for &c in chars {
        if c == b'\t' {
            render.push(b' ');
            while render.len() % TAB_STOP != 0 {
                render.push(b' ');
            }
        } else {
            render.push(c);
        }
    }
    render
}
