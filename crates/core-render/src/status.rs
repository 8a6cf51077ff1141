//! Status bar composition.
//!
//! Two stages, as for every bar we draw:
//! 1. `compose_status` turns a [`StatusContext`] into ordered [`StatusSegment`]s.
//! 2. `format_status` lays those segments out into exactly `width` bytes.
//!
//! Left side: `<name> - <rows> lines <(modified)>`, the base file name cut
//! to 20 bytes (`[No Name]` when unnamed). Right side: `<filetype> | <line>/<rows>`,
//! drawn only when it fits flush against the right edge.

use std::borrow::Cow;
use std::path::Path;

/// Maximum bytes of the file name shown on the status bar.
pub const NAME_MAX: usize = 20;

/// What we need to render a status bar.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub num_rows: usize,
    pub dirty: bool,
    /// Active language profile name.
    pub filetype: Option<&'a str>,
    /// 0-based cursor row.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName(Cow<'a, str>),
    LineCount(usize),
    Modified(bool),
    FileType(&'a str),
    Position { line_1: usize, total: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name = match ctx.file_name {
        Some(p) => truncate_name(
            p.file_name()
                .map_or_else(|| p.to_string_lossy(), |n| n.to_string_lossy()),
        ),
        None => Cow::Borrowed("[No Name]"),
    };
    vec![
        StatusSegment::FileName(name),
        StatusSegment::LineCount(ctx.num_rows),
        StatusSegment::Modified(ctx.dirty),
        StatusSegment::FileType(ctx.filetype.unwrap_or("no ft")),
        StatusSegment::Position {
            line_1: ctx.line + 1,
            total: ctx.num_rows,
        },
    ]
}

fn truncate_name(name: Cow<'_, str>) -> Cow<'_, str> {
    if name.len() <= NAME_MAX {
        return name;
    }
    let mut end = NAME_MAX;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(name[..end].to_owned())
}

/// Left and right halves before layout.
pub fn split_status(segments: &[StatusSegment<'_>]) -> (String, String) {
    use std::fmt::Write as _;
    let mut left = String::with_capacity(48);
    let mut right = String::with_capacity(24);
    for seg in segments {
        match seg {
            StatusSegment::FileName(name) => left.push_str(name),
            StatusSegment::LineCount(n) => {
                let _ = write!(left, " - {n} lines ");
            }
            StatusSegment::Modified(true) => left.push_str("(modified)"),
            StatusSegment::Modified(false) => {}
            StatusSegment::FileType(ft) => right.push_str(ft),
            StatusSegment::Position { line_1, total } => {
                let _ = write!(right, " | {line_1}/{total}");
            }
        }
    }
    (left, right)
}

/// Lay the segments out into exactly `width` bytes.
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> Vec<u8> {
    let (left, right) = split_status(segments);
    let mut out = Vec::with_capacity(width);
    let left = left.as_bytes();
    out.extend_from_slice(&left[..left.len().min(width)]);
    while out.len() < width {
        if width - out.len() == right.len() {
            out.extend_from_slice(right.as_bytes());
            break;
        }
        out.push(b' ');
    }
    out
}

pub fn build_status(ctx: &StatusContext<'_>, width: usize) -> Vec<u8> {
    format_status(&compose_status(ctx), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(name: Option<&'a str>, dirty: bool) -> StatusContext<'a> {
        StatusContext {
            file_name: name.map(Path::new),
            num_rows: 3,
            dirty,
            filetype: None,
            line: 0,
        }
    }

    fn s(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn unnamed_clean_buffer() {
        let out = s(build_status(&ctx(None, false), 40));
        assert_eq!(out.len(), 40);
        assert!(out.starts_with("[No Name] - 3 lines "));
        assert!(out.ends_with("no ft | 1/3"));
    }

    #[test]
    fn dirty_named_buffer_with_filetype() {
        let mut c = ctx(Some("main.rs"), true);
        c.filetype = Some("rust");
        c.line = 1;
        let out = s(build_status(&c, 50));
        assert!(out.starts_with("main.rs - 3 lines (modified)"));
        assert!(out.ends_with("rust | 2/3"));
    }

    #[test]
    fn directories_are_not_shown() {
        let out = s(build_status(&ctx(Some("/tmp/project/src/lib.rs"), false), 40));
        assert!(out.starts_with("lib.rs - 3 lines"));
    }

    #[test]
    fn long_names_are_cut_to_twenty_bytes() {
        let out = s(build_status(&ctx(Some("a_really_long_file_name.txt"), false), 60));
        assert!(out.starts_with("a_really_long_file_n - 3 lines"));
    }

    #[test]
    fn name_cut_respects_char_boundaries() {
        let segs = compose_status(&ctx(Some("ééééééééééé.txt"), false));
        let StatusSegment::FileName(name) = &segs[0] else {
            panic!("file name first");
        };
        assert_eq!(name.len(), 20);
    }

    #[test]
    fn right_segment_dropped_when_it_does_not_fit() {
        let out = s(build_status(&ctx(None, false), 25));
        assert_eq!(out, "[No Name] - 3 lines      ");
        let out = s(build_status(&ctx(None, false), 10));
        assert_eq!(out, "[No Name] ");
    }

    #[test]
    fn right_segment_fits_exactly() {
        // left is 20 bytes, right is 11.
        let out = s(build_status(&ctx(None, false), 31));
        assert_eq!(out, "[No Name] - 3 lines no ft | 1/3");
    }
}
