//! Blocking input reader translating crossterm events into `core-events`.
//!
//! One call to [`read_event`] blocks until a key press or resize arrives and
//! returns it decoded. Key releases, mouse, focus and paste events are
//! skipped. `Ctrl-H` arrives from most terminals as the backspace control
//! byte and is reported as [`KeyCode::Backspace`].

use anyhow::{Context, Result};
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKey, KeyEvent as CKeyEvent, KeyEventKind,
    KeyModifiers as CMods,
};

/// Block until the next event the editor cares about.
pub fn read_event() -> Result<InputEvent> {
    loop {
        let raw = event::read().context("reading terminal input")?;
        if let Some(ev) = translate_event(raw) {
            return Ok(ev);
        }
    }
}

pub fn translate_event(ev: CEvent) -> Option<InputEvent> {
    match ev {
        CEvent::Key(k) => translate_key(k).map(InputEvent::Key),
        CEvent::Resize(cols, rows) => {
            tracing::debug!(target: "input", cols, rows, "resize");
            Some(InputEvent::Resize(cols, rows))
        }
        _ => None,
    }
}

pub fn translate_key(k: CKeyEvent) -> Option<KeyEvent> {
    if k.kind == KeyEventKind::Release {
        return None;
    }
    let mods = map_mods(k.modifiers);
    let code = match k.code {
        CKey::Char(c) => KeyCode::Char(c),
        CKey::Enter => KeyCode::Enter,
        CKey::Esc => KeyCode::Esc,
        CKey::Backspace => KeyCode::Backspace,
        CKey::Tab => KeyCode::Tab,
        CKey::Up => KeyCode::Up,
        CKey::Down => KeyCode::Down,
        CKey::Left => KeyCode::Left,
        CKey::Right => KeyCode::Right,
        CKey::Delete => KeyCode::Delete,
        CKey::Home => KeyCode::Home,
        CKey::End => KeyCode::End,
        CKey::PageUp => KeyCode::PageUp,
        CKey::PageDown => KeyCode::PageDown,
        _ => {
            tracing::trace!(target: "input", "unmapped_key");
            return None;
        }
    };
    let key = build_key_event(code, mods);
    tracing::trace!(
        target: "input",
        kind = if matches!(key.code, KeyCode::Char(_)) { "char" } else { "named" },
        mods = key.mods.bits(),
        "key"
    );
    Some(key)
}

pub(crate) fn build_key_event(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
    match code {
        KeyCode::Char(c) if mods.contains(KeyModifiers::CTRL) && c.eq_ignore_ascii_case(&'h') => {
            KeyEvent::plain(KeyCode::Backspace)
        }
        _ => KeyEvent::new(code, mods),
    }
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
