//! Cursor position and mode-dependent clamping.

use crate::document::Document;
use crate::mode::Mode;

/// Cursor position in raw document coordinates.
///
/// `cy` may equal the number of rows (the line just past the end of the
/// document); `cx` is a byte column into that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Byte column.
    pub cx: usize,
    /// Row index.
    pub cy: usize,
}

impl Cursor {
    /// Creates a cursor at column `cx` of row `cy`.
    pub fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }

    /// Pulls the cursor back inside the document for the given mode.
    pub fn clamp(&mut self, doc: &Document, mode: Mode) {
        self.cy = self.cy.min(doc.len());
        self.cx = clamp_column(self.cx, doc.row_len(self.cy), mode);
    }
}

/// Largest valid column on a row of `len` bytes.
///
/// Normal mode sits on a character, so the limit is the last byte (or 0 on
/// an empty row). Insert mode may also sit just past the end.
pub fn max_column(len: usize, mode: Mode) -> usize {
    match mode {
        Mode::Normal => len.saturating_sub(1),
        Mode::Insert | Mode::Command => len,
    }
}

/// Clamps `cx` to a row of `len` bytes.
pub fn clamp_column(cx: usize, len: usize, mode: Mode) -> usize {
    cx.min(max_column(len, mode))
}
