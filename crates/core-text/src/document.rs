use std::ops::Range;

use core_syntax::{Highlight, LanguageProfile};

use crate::row::Row;

/// Ordered rows plus the dirty counter and active language profile.
///
/// Index arguments outside the current bounds are not errors: inserts clamp
/// or are ignored and deletes become no-ops, each reported through the
/// boolean / `Option` return. Every call that changes row content bumps the
/// dirty counter exactly once.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    dirty: u64,
    profile: Option<&'static LanguageProfile>,
}

impl Document {
    pub fn new(profile: Option<&'static LanguageProfile>) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            profile,
        }
    }

    /// Build a clean document from already split lines (file order).
    pub fn from_lines<I, L>(lines: I, profile: Option<&'static LanguageProfile>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut doc = Self::new(profile);
        for line in lines {
            let at = doc.num_rows();
            doc.insert_row(at, line.as_ref());
        }
        doc.mark_clean();
        doc
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Byte length of row `idx`, 0 for the virtual row past the end.
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::size)
    }

    /// Number of mutations since load or the last successful save.
    pub fn dirty(&self) -> u64 {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn profile(&self) -> Option<&'static LanguageProfile> {
        self.profile
    }

    /// Switch profile and re-project every row.
    pub fn set_profile(&mut self, profile: Option<&'static LanguageProfile>) {
        self.profile = profile;
        for row in &mut self.rows {
            row.project(profile);
        }
        tracing::debug!(
            target: "text.rows",
            profile = profile.map(|p| p.name),
            rows = self.rows.len(),
            "reprojected_all"
        );
    }

    fn touch(&mut self) {
        self.dirty = self.dirty.wrapping_add(1);
    }

    /// Insert a new row before `at`; `at == num_rows` appends.
    pub fn insert_row(&mut self, at: usize, bytes: &[u8]) -> bool {
        if at > self.rows.len() {
            tracing::trace!(target: "text.rows", at, len = self.rows.len(), "insert_row_out_of_range");
            return false;
        }
        self.rows.insert(at, Row::new(bytes, self.profile));
        self.touch();
        true
    }

    pub fn delete_row(&mut self, at: usize) -> bool {
        if at >= self.rows.len() {
            return false;
        }
        self.rows.remove(at);
        self.touch();
        true
    }

    /// Insert byte `c` into row `row` at column `at` (clamped to the row end).
    pub fn insert_char(&mut self, row: usize, at: usize, c: u8) -> bool {
        let profile = self.profile;
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        r.insert_byte(at, c, profile);
        self.touch();
        true
    }

    /// Remove the byte at column `at` of row `row`.
    pub fn delete_char(&mut self, row: usize, at: usize) -> bool {
        let profile = self.profile;
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        if !r.delete_byte(at, profile) {
            return false;
        }
        self.touch();
        true
    }

    pub fn append_bytes(&mut self, row: usize, bytes: &[u8]) -> bool {
        let profile = self.profile;
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        r.append(bytes, profile);
        self.touch();
        true
    }

    /// Move `chars[at..]` of row `row` into a new row inserted after it.
    pub fn split_row(&mut self, row: usize, at: usize) -> bool {
        let profile = self.profile;
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        let tail = r.split_off(at, profile);
        self.rows.insert(row + 1, Row::new(&tail, profile));
        self.touch();
        true
    }

    /// Append row `row` to row `row - 1` and remove it. Returns the previous
    /// row's length before the join, which is where the cursor belongs.
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.rows.len() {
            return None;
        }
        let profile = self.profile;
        let removed = self.rows.remove(row);
        let prev = &mut self.rows[row - 1];
        let prev_len = prev.size();
        prev.append(removed.chars(), profile);
        self.touch();
        Some(prev_len)
    }

    /// Overlay `hl` on `range` of row `row`'s highlight buffer, returning the
    /// original buffer. Display-only: the dirty counter is untouched.
    pub fn overlay_highlight(
        &mut self,
        row: usize,
        range: Range<usize>,
        hl: Highlight,
    ) -> Option<Vec<Highlight>> {
        self.rows.get_mut(row).map(|r| r.paint(range, hl))
    }

    /// Undo an [`Document::overlay_highlight`].
    pub fn restore_highlight(&mut self, row: usize, saved: Vec<Highlight>) -> bool {
        self.rows
            .get_mut(row)
            .is_some_and(|r| r.restore_highlight(saved))
    }

    /// Serialize every row followed by `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.rows.iter().map(|r| r.size() + 1).sum();
        let mut out = Vec::with_capacity(len);
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_syntax::select_profile;
    use pretty_assertions::assert_eq;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().map(|l| l.as_bytes()), None)
    }

    fn contents(d: &Document) -> Vec<String> {
        d.rows()
            .iter()
            .map(|r| String::from_utf8_lossy(r.chars()).into_owned())
            .collect()
    }

    #[test]
    fn fresh_document_is_clean() {
        let d = doc(&["a", "b"]);
        assert_eq!(d.num_rows(), 2);
        assert_eq!(d.dirty(), 0);
        assert!(!d.is_dirty());
    }

    #[test]
    fn every_mutation_bumps_dirty() {
        let mut d = doc(&["abc", "def"]);
        assert!(d.insert_char(0, 1, b'x'));
        assert_eq!(d.dirty(), 1);
        assert!(d.delete_char(0, 0));
        assert_eq!(d.dirty(), 2);
        assert!(d.split_row(1, 1));
        assert_eq!(d.dirty(), 3);
        assert_eq!(d.join_with_previous(2), Some(1));
        assert_eq!(d.dirty(), 4);
        assert!(d.append_bytes(0, b"!"));
        assert!(d.insert_row(2, b"tail"));
        assert!(d.delete_row(2));
        assert_eq!(d.dirty(), 7);
        assert_eq!(contents(&d), vec!["xbc!", "def"]);
        d.mark_clean();
        assert_eq!(d.dirty(), 0);
    }

    #[test]
    fn out_of_range_calls_are_no_ops() {
        let mut d = doc(&["abc"]);
        assert!(!d.insert_row(5, b"x"));
        assert!(!d.delete_row(1));
        assert!(!d.insert_char(1, 0, b'x'));
        assert!(!d.delete_char(0, 3));
        assert!(!d.delete_char(4, 0));
        assert!(!d.append_bytes(1, b"x"));
        assert!(!d.split_row(1, 0));
        assert_eq!(d.join_with_previous(0), None);
        assert_eq!(d.join_with_previous(1), None);
        assert_eq!(d.dirty(), 0);
        assert_eq!(contents(&d), vec!["abc"]);
    }

    #[test]
    fn insert_char_clamps_column() {
        let mut d = doc(&["ab"]);
        assert!(d.insert_char(0, 10, b'c'));
        assert_eq!(contents(&d), vec!["abc"]);
    }

    #[test]
    fn split_then_join_restores_row() {
        let mut d = doc(&["one", "hello world", "three"]);
        assert!(d.split_row(1, 5));
        assert_eq!(contents(&d), vec!["one", "hello", " world", "three"]);
        assert_eq!(d.join_with_previous(2), Some(5));
        assert_eq!(contents(&d), vec!["one", "hello world", "three"]);
    }

    #[test]
    fn split_at_column_zero_leaves_empty_row_above() {
        let mut d = doc(&["abc"]);
        assert!(d.split_row(0, 0));
        assert_eq!(contents(&d), vec!["", "abc"]);
    }

    #[test]
    fn set_profile_reprojects_every_row() {
        let mut d = doc(&["int a;", "return 1;"]);
        assert!(d.rows().iter().all(|r| r.highlight().iter().all(|h| *h == Highlight::Normal)));
        d.set_profile(select_profile("main.c"));
        assert_eq!(d.row(0).unwrap().highlight()[0], Highlight::KeywordSecondary);
        assert_eq!(d.row(1).unwrap().highlight()[0], Highlight::KeywordPrimary);
        assert_eq!(d.dirty(), 0, "re-projection is not an edit");
    }

    #[test]
    fn overlay_round_trip_leaves_dirty_alone() {
        let mut d = doc(&["find me"]);
        let saved = d.overlay_highlight(0, 5..7, Highlight::Match).unwrap();
        assert_eq!(d.row(0).unwrap().highlight()[5], Highlight::Match);
        assert!(d.restore_highlight(0, saved));
        assert_eq!(d.row(0).unwrap().highlight()[5], Highlight::Normal);
        assert_eq!(d.dirty(), 0);
        assert!(d.overlay_highlight(3, 0..1, Highlight::Match).is_none());
    }

    #[test]
    fn to_bytes_terminates_every_row() {
        let d = doc(&["a", "", "b"]);
        assert_eq!(d.to_bytes(), b"a\n\nb\n");
        assert_eq!(Document::new(None).to_bytes(), b"");
    }
}
