//! Key -> `Action` translation for the editing mode.
//!
//! Bindings:
//! * `Ctrl-Q` quit, `Ctrl-S` save, `Ctrl-F` find.
//! * `Ctrl-H` is a backspace; `Ctrl-L` and `Esc` are swallowed.
//! * Any other `Ctrl` + letter inserts the matching control byte.
//! * Arrows, `Home`/`End`, `PageUp`/`PageDown` map to motions.

use crate::{Action, EditKind, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.is_ctrl('q') {
        return Some(Action::Quit);
    }
    if key.is_ctrl('s') {
        return Some(Action::Save);
    }
    if key.is_ctrl('f') {
        return Some(Action::Find);
    }
    if key.is_ctrl('h') {
        return Some(Action::Edit(EditKind::Backspace));
    }
    if key.is_ctrl('l') {
        return None;
    }
    let action = match key.code {
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Delete => Action::Edit(EditKind::DeleteForward),
        KeyCode::Tab => Action::Edit(EditKind::InsertByte(b'\t')),
        KeyCode::Esc => return None,
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Home => Action::Motion(MotionKind::LineStart),
        KeyCode::End => Action::Motion(MotionKind::LineEnd),
        KeyCode::PageUp => Action::Motion(MotionKind::PageUp),
        KeyCode::PageDown => Action::Motion(MotionKind::PageDown),
        KeyCode::Char(c) if key.mods.contains(KeyModifiers::CTRL) => {
            return control_byte(c).map(|b| Action::Edit(EditKind::InsertByte(b)));
        }
        KeyCode::Char(_) => {
            let c = key.printable()?;
            if c.is_ascii() {
                Action::Edit(EditKind::InsertByte(c as u8))
            } else {
                Action::Edit(EditKind::InsertChar(c))
            }
        }
    };
    Some(action)
}

fn control_byte(c: char) -> Option<u8> {
    c.is_ascii_alphabetic()
        .then(|| c.to_ascii_lowercase() as u8 & 0x1f)
}
