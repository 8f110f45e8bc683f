//! A single line of the document.

use crate::render;
use crate::syntax::HighlightClass;

/// One line of text with its derived display form and classification.
///
/// Rows are owned by [`Document`](crate::Document) and only mutated through
/// it, so the rendered bytes and highlight array never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    raw: Vec<u8>,
    rendered: Vec<u8>,
    pub(crate) highlight: Vec<HighlightClass>,
    pub(crate) comment_open: bool,
}

impl Row {
    /// Creates a row and derives its rendered form.
    ///
    /// The highlight array starts out as all [`HighlightClass::Normal`];
    /// the document runs the highlighter right after creation.
    pub(crate) fn new(index: usize, raw: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            index,
            raw,
            rendered: Vec::new(),
            highlight: Vec::new(),
            comment_open: false,
        };
        row.update(tab_stop);
        row
    }

    /// Position of this row in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Raw bytes as stored in the file.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Bytes as displayed, with tabs expanded.
    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    /// Per-byte classification of [`Row::rendered`].
    pub fn highlight(&self) -> &[HighlightClass] {
        &self.highlight
    }

    /// Whether a block comment is still open at the end of this row.
    pub fn comment_open(&self) -> bool {
        self.comment_open
    }

    /// Length of the raw content in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Rendered column of raw column `cx`.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        render::cx_to_rx(&self.raw, cx, tab_stop)
    }

    /// Raw column of rendered column `rx`.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        render::rx_to_cx(&self.raw, rx, tab_stop)
    }

    /// Re-derives the rendered form from the raw bytes.
    pub(crate) fn update(&mut self, tab_stop: usize) {
        self.rendered = render::render(&self.raw, tab_stop);
        self.highlight.clear();
        self.highlight
            .resize(self.rendered.len(), HighlightClass::Normal);
    }

    /// Inserts a byte; an index past the end appends.
    pub(crate) fn insert_byte(&mut self, at: usize, byte: u8, tab_stop: usize) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.update(tab_stop);
    }

    /// Removes the byte at `at`. Returns false if `at` is out of range.
    pub(crate) fn delete_byte(&mut self, at: usize, tab_stop: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.update(tab_stop);
        true
    }

    pub(crate) fn append(&mut self, bytes: &[u8], tab_stop: usize) {
        self.raw.extend_from_slice(bytes);
        self.update(tab_stop);
    }

    /// Cuts the row at `at` and returns the trailing part.
    pub(crate) fn split_off(&mut self, at: usize, tab_stop: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update(tab_stop);
        tail
    }
}
