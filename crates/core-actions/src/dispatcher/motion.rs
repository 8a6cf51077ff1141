//! Cursor movement semantics.
//!
//! Horizontal moves wrap across row boundaries. After every motion `cx` is
//! snapped to the length of the row it lands on.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    match kind {
        MotionKind::PageUp => {
            state.cursor.cy = state.viewport.row_offset;
            for _ in 0..state.viewport.rows {
                step(MotionKind::Up, state);
            }
        }
        MotionKind::PageDown => {
            let bottom = (state.viewport.row_offset + state.viewport.rows).saturating_sub(1);
            state.cursor.cy = bottom.min(state.document.num_rows());
            for _ in 0..state.viewport.rows {
                step(MotionKind::Down, state);
            }
        }
        other => step(other, state),
    }
    state.clamp_cursor();
    tracing::trace!(target: "actions.dispatch", motion = ?kind, line = state.cursor.cy, byte = state.cursor.cx, "motion");
    DispatchResult::dirty()
}

fn step(kind: MotionKind, state: &mut EditorState) {
    let rows = state.document.num_rows();
    let cur = &mut state.cursor;
    match kind {
        MotionKind::Left => {
            if cur.cx > 0 {
                cur.cx -= 1;
            } else if cur.cy > 0 {
                cur.cy -= 1;
                cur.cx = state.document.row_len(cur.cy);
            }
        }
        MotionKind::Right => {
            if cur.cy < rows {
                if cur.cx < state.document.row_len(cur.cy) {
                    cur.cx += 1;
                } else {
                    cur.cy += 1;
                    cur.cx = 0;
                }
            }
        }
        MotionKind::Up => cur.cy = cur.cy.saturating_sub(1),
        MotionKind::Down => {
            if cur.cy < rows {
                cur.cy += 1;
            }
        }
        MotionKind::LineStart => cur.cx = 0,
        MotionKind::LineEnd => cur.cx = state.document.row_len(cur.cy),
        MotionKind::PageUp | MotionKind::PageDown => {}
    }
    let len = state.document.row_len(cur.cy);
    if cur.cx > len {
        cur.cx = len;
    }
}
