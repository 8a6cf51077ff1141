//! Viewport: the visible rectangle of the document.
//!
//! * `row_offset` is the first document row drawn, `col_offset` the first
//!   rendered column.
//! * `rows`/`cols` are the text area extents; the bottom [`STATUS_ROWS`]
//!   terminal rows belong to the status bar and message line.
//! * [`Viewport::scroll_to`] runs once per refresh, before compositing, and
//!   moves the offsets the minimum distance that keeps the cursor visible.

/// Terminal rows reserved below the text area (status bar + message line).
pub const STATUS_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    /// Text area for a terminal of `width` x `height` cells.
    pub fn for_terminal(width: u16, height: u16) -> Self {
        let mut vp = Self::default();
        vp.resize(width, height);
        vp
    }

    /// Adopt a new terminal size; offsets are corrected on the next scroll.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.rows = height.saturating_sub(STATUS_ROWS) as usize;
        self.cols = width as usize;
    }

    /// Adjust offsets so (`cy`, `rx`) lies inside the visible rectangle.
    pub fn scroll_to(&mut self, cy: usize, rx: usize) {
        let (prev_row, prev_col) = (self.row_offset, self.col_offset);
        self.row_offset = Self::follow(self.row_offset, self.rows, cy);
        self.col_offset = Self::follow(self.col_offset, self.cols, rx);
        if (prev_row, prev_col) != (self.row_offset, self.col_offset) {
            tracing::trace!(
                target: "state.viewport",
                row_offset = self.row_offset,
                col_offset = self.col_offset,
                "scrolled"
            );
        }
    }

    fn follow(offset: usize, extent: usize, pos: usize) -> usize {
        let extent = extent.max(1);
        if pos < offset {
            pos
        } else if pos >= offset + extent {
            pos + 1 - extent
        } else {
            offset
        }
    }
}
