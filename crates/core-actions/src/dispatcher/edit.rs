//! Text edit action handling (insert/backspace/delete/newline).
//!
//! Edits at the virtual row past the end first materialize an empty row.
//! Backspace at column 0 joins the row onto the previous one.

use super::{DispatchResult, motion};
use crate::{EditKind, MotionKind};
use core_state::EditorState;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    state.clamp_cursor();
    let before = state.cursor;
    match kind {
        EditKind::InsertByte(b) => insert_byte(state, b),
        EditKind::InsertChar(c) => {
            let mut buf = [0u8; 4];
            for &b in c.encode_utf8(&mut buf).as_bytes() {
                insert_byte(state, b);
            }
        }
        EditKind::InsertNewline => insert_newline(state),
        EditKind::Backspace => delete_before_cursor(state),
        EditKind::DeleteForward => {
            motion::handle_motion(MotionKind::Right, state);
            delete_before_cursor(state);
        }
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = kind.label(),
        line = before.cy,
        byte = before.cx,
        to_line = state.cursor.cy,
        to_byte = state.cursor.cx,
        dirty = state.document.dirty(),
        "edit"
    );
    DispatchResult::dirty()
}

fn insert_byte(state: &mut EditorState, b: u8) {
    let cy = state.cursor.cy;
    if cy == state.document.num_rows() {
        state.document.insert_row(cy, b"");
    }
    if state.document.insert_char(cy, state.cursor.cx, b) {
        state.cursor.cx += 1;
    }
}

fn insert_newline(state: &mut EditorState) {
    let cursor = state.cursor;
    let done = if cursor.cx == 0 {
        state.document.insert_row(cursor.cy, b"")
    } else {
        state.document.split_row(cursor.cy, cursor.cx)
    };
    if done {
        state.cursor.cy += 1;
        state.cursor.cx = 0;
    }
}

fn delete_before_cursor(state: &mut EditorState) {
    let cursor = state.cursor;
    if cursor.cy >= state.document.num_rows() || (cursor.cx == 0 && cursor.cy == 0) {
        return;
    }
    if cursor.cx > 0 {
        if state.document.delete_char(cursor.cy, cursor.cx - 1) {
            state.cursor.cx -= 1;
        }
    } else if let Some(prev_len) = state.document.join_with_previous(cursor.cy) {
        state.cursor.cy -= 1;
        state.cursor.cx = prev_len;
    }
}
