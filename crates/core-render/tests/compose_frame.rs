use std::time::{Duration, Instant};

use core_render::RenderEngine;
use core_state::{Cursor, EditorState, Viewport};
use core_text::Document;
use crossterm::{
    queue,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use pretty_assertions::assert_eq;

fn fg(color: Color) -> Vec<u8> {
    let mut v = Vec::new();
    queue!(v, SetForegroundColor(color)).unwrap();
    v
}

fn attr(a: Attribute) -> Vec<u8> {
    let mut v = Vec::new();
    queue!(v, SetAttribute(a)).unwrap();
    v
}

fn clear_eol() -> Vec<u8> {
    let mut v = Vec::new();
    queue!(v, Clear(ClearType::UntilNewLine)).unwrap();
    v
}

fn state(lines: &[&str], rows: usize, cols: usize) -> EditorState {
    let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes()), None);
    EditorState::new(doc, Viewport::new(rows, cols))
}

fn compose_at(st: &mut EditorState, now: Instant) -> Vec<u8> {
    let rx = st.scroll();
    RenderEngine::new(Duration::from_secs(5))
        .compose(st, rx, now)
        .unwrap()
        .into_bytes()
}

fn compose(st: &mut EditorState) -> Vec<u8> {
    compose_at(st, Instant::now())
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn colors_change_only_at_category_boundaries() {
    let mut st = state(&["int x; // if"], 2, 40);
    st.set_file_name("demo.c");
    let frame = compose(&mut st);

    let mut expected = Vec::new();
    expected.extend(fg(Color::DarkGreen));
    expected.extend(b"int");
    expected.extend(fg(Color::Reset));
    expected.extend(b" x; ");
    expected.extend(fg(Color::DarkCyan));
    expected.extend(b"// if");
    expected.extend(fg(Color::Reset));
    expected.extend(clear_eol());
    expected.extend(b"\r\n");
    assert!(
        contains(&frame, &expected),
        "frame: {:?}",
        String::from_utf8_lossy(&frame)
    );
}

#[test]
fn control_bytes_drawn_inverted() {
    let mut st = state(&["a\x01b\x7f"], 2, 40);
    let frame = compose(&mut st);

    let mut expected = Vec::new();
    expected.extend(b"a");
    expected.extend(attr(Attribute::Reverse));
    expected.extend(b"A");
    expected.extend(attr(Attribute::Reset));
    expected.extend(b"b");
    expected.extend(attr(Attribute::Reverse));
    expected.extend(b"?");
    expected.extend(attr(Attribute::Reset));
    expected.extend(fg(Color::Reset));
    assert!(contains(&frame, &expected));
}

#[test]
fn control_byte_inside_colored_run_restores_color() {
    let mut st = state(&["\"a\x02b\""], 2, 40);
    st.set_file_name("s.c");
    let frame = compose(&mut st);

    let mut expected = Vec::new();
    expected.extend(attr(Attribute::Reset));
    expected.extend(fg(Color::DarkMagenta));
    expected.extend(b"b\"");
    assert!(contains(&frame, &expected));
}

#[test]
fn rows_are_sliced_by_column_offset() {
    let mut st = state(&["abcdefgh", "xy"], 2, 3);
    st.cursor = Cursor::new(4, 0);
    let frame = compose(&mut st);
    assert_eq!(st.viewport.col_offset, 2);
    let mut first = b"cde".to_vec();
    first.extend(fg(Color::Reset));
    first.extend(clear_eol());
    assert!(contains(&frame, &first));
    // "xy" is fully scrolled out: nothing but the color reset.
    let mut second = b"\r\n".to_vec();
    second.extend(fg(Color::Reset));
    second.extend(clear_eol());
    assert!(contains(&frame, &second));
}

#[test]
fn status_bar_is_reverse_video_and_exact_width() {
    let mut st = state(&["a", "b"], 2, 30);
    st.set_file_name("f.rs");
    let frame = compose(&mut st);
    let mut expected = attr(Attribute::Reverse);
    expected.extend(b"f.rs - 2 lines      rust | 1/2");
    expected.extend(attr(Attribute::Reset));
    expected.extend(b"\r\n");
    assert!(
        contains(&frame, &expected),
        "frame: {:?}",
        String::from_utf8_lossy(&frame)
    );
}

#[test]
fn message_expires_after_ttl() {
    let mut st = state(&["a"], 2, 40);
    let t0 = Instant::now();
    st.set_status_message_at("HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find", t0);
    let fresh = compose_at(&mut st, t0 + Duration::from_secs(1));
    assert!(contains(&fresh, b"HELP: Ctrl-S = save | Ctrl-Q = quit | Ct"));
    assert!(!contains(&fresh, b"Ctrl-F = find"), "cut to screen width");
    let stale = compose_at(&mut st, t0 + Duration::from_secs(6));
    assert!(!contains(&stale, b"HELP"));
}

#[test]
fn scrolled_frame_places_cursor_row_last() {
    let lines: Vec<String> = (0..30).map(|i| format!("L{i:02}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut st = state(&refs, 5, 20);
    st.cursor = Cursor::new(0, 5 + 5);
    let frame = compose(&mut st);
    assert_eq!(st.viewport.row_offset, 6);
    assert!(contains(&frame, b"L06"));
    assert!(contains(&frame, b"L10"));
    assert!(!contains(&frame, b"L05"));
    assert!(!contains(&frame, b"L11"));
    assert!(frame.ends_with(b"\x1b[5;1H\x1b[?25h"));
}

#[test]
fn refresh_writes_one_frame() {
    let mut st = state(&["hello"], 3, 20);
    let mut engine = RenderEngine::default();
    let mut out = Vec::new();
    engine.refresh(&mut st, &mut out).unwrap();
    assert_eq!(engine.frames(), 1);
    assert!(contains(&out, b"hello"));
    assert_eq!(out.windows(2).filter(|w| *w == b"\r\n").count(), 4);
}
