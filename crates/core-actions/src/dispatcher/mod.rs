//! Dispatcher applying keys to mutable editor state.
//!
//! Sub-modules:
//! * `motion` - cursor movement semantics
//! * `edit`   - text mutation (insert/backspace/delete/newline)
//!
//! The dispatcher owns the input mode. In [`InputMode::Editing`] keys are
//! translated into [`Action`]s; in the prompt modes raw keys go to the save-as
//! [`PromptInput`] or the active [`SearchSession`].

use core_events::{KeyCode, KeyEvent};
use core_state::EditorState;

use crate::io_ops::{self, IoError};
use crate::prompt::{PromptInput, PromptKey};
use crate::search::{SearchSession, SearchStep};
use crate::{Action, translate_key};

mod edit;
mod motion;

/// Result of dispatching a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputMode {
    Editing,
    SaveAs(PromptInput),
    Search(SearchSession),
}

#[derive(Debug)]
pub struct Dispatcher {
    mode: InputMode,
    quit_times: u8,
    quit_remaining: u8,
}

impl Dispatcher {
    /// `quit_times` is the number of extra `Ctrl-Q` presses demanded while
    /// the document has unsaved changes.
    pub fn new(quit_times: u8) -> Self {
        Self {
            mode: InputMode::Editing,
            quit_times,
            quit_remaining: quit_times,
        }
    }

    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    pub fn handle_key(&mut self, state: &mut EditorState, key: &KeyEvent) -> DispatchResult {
        let mode = std::mem::replace(&mut self.mode, InputMode::Editing);
        match mode {
            InputMode::Editing => self.handle_editing(state, key),
            InputMode::SaveAs(input) => {
                self.handle_save_as(state, input, key);
                DispatchResult::dirty()
            }
            InputMode::Search(session) => {
                self.handle_search(state, session, key);
                DispatchResult::dirty()
            }
        }
    }

    fn handle_editing(&mut self, state: &mut EditorState, key: &KeyEvent) -> DispatchResult {
        let action = translate_key(key);
        tracing::trace!(
            target: "actions.dispatch",
            kind = if matches!(key.code, KeyCode::Char(_)) { "char" } else { "named" },
            mods = key.mods.bits(),
            action = action.as_ref().map_or("none", Action::label),
            "key"
        );
        if !matches!(action, Some(Action::Quit)) {
            self.quit_remaining = self.quit_times;
        }
        match action {
            None => DispatchResult::clean(),
            Some(Action::Quit) => self.handle_quit(state),
            Some(Action::Save) => {
                self.start_save(state);
                DispatchResult::dirty()
            }
            Some(Action::Find) => {
                self.start_search(state);
                DispatchResult::dirty()
            }
            Some(Action::Motion(kind)) => motion::handle_motion(kind, state),
            Some(Action::Edit(kind)) => edit::handle_edit(kind, state),
        }
    }

    fn handle_quit(&mut self, state: &mut EditorState) -> DispatchResult {
        if state.document.is_dirty() && self.quit_remaining > 0 {
            state.set_status_message(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                self.quit_remaining
            ));
            self.quit_remaining -= 1;
            return DispatchResult::dirty();
        }
        tracing::info!(target: "actions.dispatch", dirty = state.document.dirty(), "quit");
        DispatchResult::quit()
    }

    fn start_save(&mut self, state: &mut EditorState) {
        if state.file_name.is_some() {
            write_out(state);
            return;
        }
        let input = PromptInput::new();
        state.set_status_message(save_as_prompt(&input));
        self.mode = InputMode::SaveAs(input);
    }

    fn handle_save_as(&mut self, state: &mut EditorState, mut input: PromptInput, key: &KeyEvent) {
        match input.feed(key) {
            PromptKey::Cancel => state.set_status_message("Save aborted"),
            PromptKey::Submit => {
                state.set_status_message("");
                state.set_file_name(input.into_text());
                write_out(state);
            }
            PromptKey::Edited | PromptKey::Other => {
                state.set_status_message(save_as_prompt(&input));
                self.mode = InputMode::SaveAs(input);
            }
        }
    }

    fn start_search(&mut self, state: &mut EditorState) {
        let session = SearchSession::new(state);
        state.set_status_message(search_prompt(&session));
        self.mode = InputMode::Search(session);
    }

    fn handle_search(&mut self, state: &mut EditorState, mut session: SearchSession, key: &KeyEvent) {
        match session.feed(state, key) {
            SearchStep::Cancelled | SearchStep::Accepted(_) => state.set_status_message(""),
            SearchStep::NoMatch | SearchStep::Matched { .. } => {
                state.set_status_message(search_prompt(&session));
                self.mode = InputMode::Search(session);
            }
        }
    }
}

fn save_as_prompt(input: &PromptInput) -> String {
    format!("Save as: {} (ESC to cancel)", input.text())
}

fn search_prompt(session: &SearchSession) -> String {
    format!("Search: {} (Use ESC/Arrows/Enter)", session.query())
}

fn write_out(state: &mut EditorState) {
    match io_ops::save(state) {
        Ok(n) => state.set_status_message(format!("{n} bytes written to disk")),
        Err(IoError::NoFileName) => state.set_status_message("Save aborted"),
        Err(e) => state.set_status_message(format!("Can't save! I/O error: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::Viewport;
    use core_text::Document;

    fn state(lines: &[&str]) -> EditorState {
        let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes()), None);
        EditorState::new(doc, Viewport::new(10, 80))
    }

    fn message(st: &EditorState) -> &str {
        st.status.as_ref().map_or("", |m| m.text.as_str())
    }

    #[test]
    fn quit_on_clean_document_is_immediate() {
        let mut st = state(&["a"]);
        let mut d = Dispatcher::new(3);
        assert!(d.handle_key(&mut st, &KeyEvent::ctrl('q')).quit);
    }

    #[test]
    fn quit_with_unsaved_changes_needs_confirmation() {
        let mut st = state(&["a"]);
        let mut d = Dispatcher::new(2);
        d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Char('x')));
        assert!(!d.handle_key(&mut st, &KeyEvent::ctrl('q')).quit);
        assert_eq!(
            message(&st),
            "WARNING!!! File has unsaved changes. Press Ctrl-Q 2 more times to quit."
        );
        assert!(!d.handle_key(&mut st, &KeyEvent::ctrl('q')).quit);
        assert!(message(&st).contains("Ctrl-Q 1 more"));
        assert!(d.handle_key(&mut st, &KeyEvent::ctrl('q')).quit);
    }

    #[test]
    fn other_keys_rearm_quit_counter() {
        let mut st = state(&["a"]);
        let mut d = Dispatcher::new(1);
        d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Char('x')));
        assert!(!d.handle_key(&mut st, &KeyEvent::ctrl('q')).quit);
        d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Esc));
        assert!(!d.handle_key(&mut st, &KeyEvent::ctrl('q')).quit);
        assert!(d.handle_key(&mut st, &KeyEvent::ctrl('q')).quit);
    }

    #[test]
    fn save_without_name_opens_prompt_and_escape_aborts() {
        let mut st = state(&["a"]);
        let mut d = Dispatcher::new(3);
        d.handle_key(&mut st, &KeyEvent::ctrl('s'));
        assert!(matches!(d.mode(), InputMode::SaveAs(_)));
        assert_eq!(message(&st), "Save as:  (ESC to cancel)");
        d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Char('f')));
        assert_eq!(message(&st), "Save as: f (ESC to cancel)");
        d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Esc));
        assert!(matches!(d.mode(), InputMode::Editing));
        assert_eq!(message(&st), "Save aborted");
        assert!(st.file_name.is_none());
    }

    #[test]
    fn search_prompt_tracks_query_and_escape_restores() {
        let mut st = state(&["one", "two", "three"]);
        st.cursor.cx = 1;
        let mut d = Dispatcher::new(3);
        d.handle_key(&mut st, &KeyEvent::ctrl('f'));
        assert_eq!(message(&st), "Search:  (Use ESC/Arrows/Enter)");
        d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Char('t')));
        assert_eq!(message(&st), "Search: t (Use ESC/Arrows/Enter)");
        assert_eq!(st.cursor.cy, 1);
        d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Esc));
        assert!(matches!(d.mode(), InputMode::Editing));
        assert_eq!((st.cursor.cx, st.cursor.cy), (1, 0));
    }

    #[test]
    fn ignored_keys_do_not_request_render() {
        let mut st = state(&["a"]);
        let mut d = Dispatcher::new(3);
        assert!(!d.handle_key(&mut st, &KeyEvent::ctrl('l')).dirty);
        assert!(!d.handle_key(&mut st, &KeyEvent::plain(KeyCode::Esc)).dirty);
    }
}
