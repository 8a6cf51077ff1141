//! Logical (byte index) to visual (rendered cell) column mapping.
//!
//! Tabs advance to the next multiple of [`TAB_STOP`]; every other byte is one
//! cell wide. For any row of tabs and printable bytes the two functions are
//! exact inverses: `rx_to_cx(chars, cx_to_rx(chars, cx)) == cx`.

use crate::row::TAB_STOP;

/// Visual column of logical column `cx`. `cx` past the end is clamped.
pub fn cx_to_rx(chars: &[u8], cx: usize) -> usize {
    chars[..cx.min(chars.len())]
        .iter()
        .fold(0, |rx, &c| advance(rx, c))
}

/// First logical column whose cumulative width exceeds `rx`, or the row
/// length when `rx` lies at or beyond the rendered width.
pub fn rx_to_cx(chars: &[u8], rx: usize) -> usize {
    let mut cur_rx = 0;
    for (cx, &c) in chars.iter().enumerate() {
        cur_rx = advance(cur_rx, c);
        if cur_rx > rx {
            return cx;
        }
    }
    chars.len()
}

#[inline]
fn advance(rx: usize, c: u8) -> usize {
    if c == b'\t' {
        rx + TAB_STOP - (rx % TAB_STOP)
    } else {
        rx + 1
    }
}
