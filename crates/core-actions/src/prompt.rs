//! Single-line status prompt input.
//!
//! Shared by the save-as prompt and incremental search. Editing rules:
//! `Backspace`/`Delete`/`Ctrl-H` drop the last character, printable ASCII is
//! appended, `Esc` cancels, `Enter` submits a non-empty buffer. Every other
//! key leaves the buffer as is and is reported as [`PromptKey::Other`] so the
//! owner can react to it (search uses the arrows).

use core_events::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Edited,
    Other,
    Cancel,
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptInput {
    text: String,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn feed(&mut self, key: &KeyEvent) -> PromptKey {
        if key.is_ctrl('h') || matches!(key.code, KeyCode::Backspace | KeyCode::Delete) {
            self.text.pop();
            return PromptKey::Edited;
        }
        match key.code {
            KeyCode::Esc => PromptKey::Cancel,
            KeyCode::Enter if !self.text.is_empty() => PromptKey::Submit,
            _ => match key.printable() {
                Some(c) if c.is_ascii() => {
                    self.text.push(c);
                    PromptKey::Edited
                }
                _ => PromptKey::Other,
            },
        }
    }
}
