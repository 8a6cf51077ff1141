//! Editing actions: key translation, dispatch, prompts, search and file I/O.
//!
//! Keys flow through [`translate_key`] into an [`Action`] while the editor is
//! in its plain editing mode. Prompts (save-as, incremental search) consume
//! raw keys directly; [`Dispatcher`] owns that mode switch.

pub mod dispatcher;
pub mod io_ops;
mod key_translator;
pub mod prompt;
pub mod search;

pub use dispatcher::{DispatchResult, Dispatcher, InputMode};
pub use io_ops::{IoError, open_file, save};
pub use key_translator::translate_key;
pub use prompt::{PromptInput, PromptKey};
pub use search::{SearchSession, SearchStep};

/// Cursor motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

/// Text mutations at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Insert one byte (printable ASCII, tab, or a control byte).
    InsertByte(u8),
    /// Insert a non-ASCII character as its UTF-8 bytes.
    InsertChar(char),
    InsertNewline,
    Backspace,
    DeleteForward,
}

impl EditKind {
    /// Operation name without the inserted payload, for logging.
    pub fn label(&self) -> &'static str {
        match self {
            EditKind::InsertByte(_) => "insert_byte",
            EditKind::InsertChar(_) => "insert_char",
            EditKind::InsertNewline => "insert_newline",
            EditKind::Backspace => "backspace",
            EditKind::DeleteForward => "delete_forward",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    Find,
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Motion(_) => "motion",
            Action::Edit(kind) => kind.label(),
            Action::Save => "save",
            Action::Find => "find",
            Action::Quit => "quit",
        }
    }
}
