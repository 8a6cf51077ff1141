//! File IO helpers.
//!
//! Synchronous and byte-oriented. Load splits on `\n` and strips trailing
//! `\r`s; save writes every row followed by `\n`. Failures come back as
//! [`IoError`] values so the dispatcher can surface them on the status line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use core_state::EditorState;
use core_syntax::select_profile;
use core_text::{Document, lines::split_lines};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("no file name")]
    NoFileName,
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load `path` into a clean document, with the profile chosen from its name.
pub fn open_file(path: &Path) -> Result<Document, IoError> {
    let bytes = std::fs::read(path).map_err(|source| {
        tracing::error!(target: "io", path = %path.display(), error = %source, "file_open_error");
        IoError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let profile = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(select_profile);
    let doc = Document::from_lines(split_lines(&bytes), profile);
    tracing::info!(
        target: "io",
        path = %path.display(),
        rows = doc.num_rows(),
        bytes = bytes.len(),
        "file_opened"
    );
    Ok(doc)
}

/// Write the document to its file name. Returns the byte count written and
/// resets the dirty counter; on failure the document is left untouched.
pub fn save(state: &mut EditorState) -> Result<usize, IoError> {
    let Some(path) = state.file_name.clone() else {
        return Err(IoError::NoFileName);
    };
    let buf = state.document.to_bytes();
    write_all(&path, &buf).map_err(|source| {
        tracing::error!(target: "io", path = %path.display(), error = %source, "file_write_error");
        IoError::Write {
            path: path.clone(),
            source,
        }
    })?;
    state.document.mark_clean();
    tracing::info!(target: "io", path = %path.display(), bytes = buf.len(), "file_saved");
    Ok(buf.len())
}

fn write_all(path: &Path, buf: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    file.set_len(buf.len() as u64)?;
    file.write_all(buf)?;
    file.flush()
}
