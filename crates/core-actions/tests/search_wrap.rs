mod common;
use common::*;

use core_actions::{Dispatcher, InputMode, SearchSession, SearchStep};
use core_events::{KeyCode, KeyEvent};
use core_state::Cursor;
use core_syntax::{Highlight, select_profile};

#[test]
fn forward_search_from_last_row_wraps_to_first() {
    let mut st = state_with(&["needle here", "hay", "stack"]);
    let mut s = SearchSession::new(&st);
    s.feed(&mut st, &KeyEvent::plain(KeyCode::Char('n')));
    assert_eq!(s.last_match(), Some(0));
    // Only row 0 matches: stepping forward cycles once and lands on it again.
    let step = s.feed(&mut st, &KeyEvent::plain(KeyCode::Down));
    assert_eq!(step, SearchStep::Matched { row: 0, col: 0 });
    assert_eq!(st.cursor, Cursor::new(0, 0));
}

#[test]
fn forward_step_from_row_two_visits_row_zero() {
    let mut st = state_with(&["ab", "ab", "ab"]);
    let mut s = SearchSession::new(&st);
    s.feed(&mut st, &KeyEvent::plain(KeyCode::Char('a')));
    s.feed(&mut st, &KeyEvent::plain(KeyCode::Right));
    s.feed(&mut st, &KeyEvent::plain(KeyCode::Right));
    assert_eq!(s.last_match(), Some(2));
    assert_eq!(
        s.feed(&mut st, &KeyEvent::plain(KeyCode::Right)),
        SearchStep::Matched { row: 0, col: 0 }
    );
}

#[test]
fn overlay_moves_with_the_match_and_is_restored() {
    let mut st = state_with(&["int a = 1;", "int b = 2;"]);
    st.set_file_name("x.c");
    let original: Vec<Vec<Highlight>> = st
        .document
        .rows()
        .iter()
        .map(|r| r.highlight().to_vec())
        .collect();
    let mut s = SearchSession::new(&st);
    for c in "int".chars() {
        s.feed(&mut st, &KeyEvent::plain(KeyCode::Char(c)));
    }
    assert_eq!(st.document.row(0).unwrap().highlight()[..3], [Highlight::Match; 3]);
    s.feed(&mut st, &KeyEvent::plain(KeyCode::Down));
    assert_eq!(st.document.row(0).unwrap().highlight(), original[0].as_slice());
    assert_eq!(st.document.row(1).unwrap().highlight()[..3], [Highlight::Match; 3]);
    s.feed(&mut st, &KeyEvent::plain(KeyCode::Esc));
    assert_eq!(st.document.row(1).unwrap().highlight(), original[1].as_slice());
    assert_eq!(st.document.dirty(), 0);
}

#[test]
fn accept_keeps_cursor_and_restores_highlight() {
    let mut st = state_with(&["alpha", "beta"]);
    st.set_file_name("notes.py");
    assert_eq!(
        st.document.profile().map(|p| p.name),
        select_profile("notes.py").map(|p| p.name)
    );
    let mut d = Dispatcher::new(3);
    d.handle_key(&mut st, &KeyEvent::ctrl('f'));
    type_str(&mut d, &mut st, "eta");
    assert_eq!(st.cursor, Cursor::new(1, 1));
    press(&mut d, &mut st, KeyCode::Enter);
    assert!(matches!(d.mode(), InputMode::Editing));
    assert_eq!(st.cursor, Cursor::new(1, 1));
    assert!(
        st.document.row(1).unwrap().highlight().iter().all(|h| *h != Highlight::Match)
    );
    assert_eq!(message(&st), "");
}

#[test]
fn cancel_restores_cursor_and_offsets() {
    let lines: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut st = state_with(&refs);
    st.cursor = Cursor::new(2, 5);
    st.scroll();
    let mut d = Dispatcher::new(3);
    d.handle_key(&mut st, &KeyEvent::ctrl('f'));
    type_str(&mut d, &mut st, "row 77");
    assert_eq!(st.cursor.cy, 77);
    st.scroll();
    assert_eq!(st.viewport.row_offset, 77, "match is placed at the top");
    press(&mut d, &mut st, KeyCode::Esc);
    assert_eq!(st.cursor, Cursor::new(2, 5));
    assert_eq!(st.viewport.row_offset, 0);
}

#[test]
fn enter_on_empty_query_keeps_prompt_open() {
    let mut st = state_with(&["abc"]);
    let mut d = Dispatcher::new(3);
    d.handle_key(&mut st, &KeyEvent::ctrl('f'));
    press(&mut d, &mut st, KeyCode::Enter);
    assert!(matches!(d.mode(), InputMode::Search(_)));
}
