#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, Dispatcher};
use core_events::{KeyCode, KeyEvent};
use core_state::{EditorState, Viewport};
use core_text::Document;

pub fn state_with(lines: &[&str]) -> EditorState {
    let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes()), None);
    EditorState::new(doc, Viewport::new(20, 80))
}

pub fn contents(state: &EditorState) -> Vec<String> {
    state
        .document
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r.chars()).into_owned())
        .collect()
}

pub fn message(state: &EditorState) -> &str {
    state.status.as_ref().map_or("", |m| m.text.as_str())
}

pub fn press(d: &mut Dispatcher, state: &mut EditorState, code: KeyCode) -> DispatchResult {
    d.handle_key(state, &KeyEvent::plain(code))
}

pub fn type_str(d: &mut Dispatcher, state: &mut EditorState, text: &str) {
    for c in text.chars() {
        d.handle_key(state, &KeyEvent::plain(KeyCode::Char(c)));
    }
}
