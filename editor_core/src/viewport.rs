//! The visible window onto the document.

/// Scroll offsets and size of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First document row shown.
    pub row_offset: usize,
    /// First rendered column shown.
    pub col_offset: usize,
    /// Number of text rows (the bars are not included).
    pub rows: usize,
    /// Number of text columns.
    pub cols: usize,
}

impl Viewport {
    /// Creates a viewport scrolled to the top-left corner.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    /// Changes the size of the text area; offsets are kept.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Moves the offsets just enough to make (`cy`, `rx`) visible.
    pub fn scroll(&mut self, cy: usize, rx: usize) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);

        if cy < self.row_offset {
            self.row_offset = cy;
        }
        if cy >= self.row_offset + rows {
            self.row_offset = cy + 1 - rows;
        }
        if rx < self.col_offset {
            self.col_offset = rx;
        }
        if rx >= self.col_offset + cols {
            self.col_offset = rx + 1 - cols;
        }
    }

    /// Makes row `cy` the first visible row.
    pub fn scroll_to_top(&mut self, cy: usize) {
        self.row_offset = cy;
    }
}
