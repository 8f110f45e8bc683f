//! Document: the ordered collection of rows being edited.

use crate::error::{EditorError, Result};
use crate::render::DEFAULT_TAB_STOP;
use crate::row::Row;
use crate::syntax::{SyntaxDefinition, SyntaxHighlighter};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// An ordered, index-stable sequence of rows plus file metadata.
///
/// Rows are addressed by index only. Every mutation re-renders and
/// re-highlights the affected rows before returning, and bumps the dirty
/// counter.
#[derive(Debug, Clone)]
pub struct Document {
    /// The lines of text.
    rows: Vec<Row>,
    /// Edits since the last load or save.
    dirty: usize,
    /// Backing file, if any.
    filename: Option<PathBuf>,
    /// Active language and the highlighting pass.
    highlighter: SyntaxHighlighter,
    /// Columns between tab stops.
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    /// Creates an empty, unnamed document.
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            filename: None,
            highlighter: SyntaxHighlighter::default(),
            tab_stop: tab_stop.max(1),
        }
    }

    /// Creates an unmodified document from lines (without line endings).
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut doc = Self::new(tab_stop);
        doc.rows = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| Row::new(idx, line.into(), doc.tab_stop))
            .collect();
        doc.highlighter.highlight_all(&mut doc.rows);
        doc
    }

    /// Loads a document from a file.
    ///
    /// A file that does not exist yet yields an empty document carrying the
    /// filename, so the first save creates it.
    pub fn open<P: AsRef<Path>>(path: P, tab_stop: usize) -> Result<Self> {
        let path = path.as_ref();
        let lines = match read_lines(path) {
            Ok(lines) => lines,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(EditorError::io(path, e)),
        };

        let mut doc = Self::from_lines(lines, tab_stop);
        doc.set_filename(path);
        log::debug!("Opened {} ({} rows)", path.display(), doc.len());
        Ok(doc)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the document has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in document order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row `idx`, or `None` past the end.
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub(crate) fn row_mut(&mut self, idx: usize) -> Option<&mut Row> {
        self.rows.get_mut(idx)
    }

    /// Length of row `idx`, or 0 past the end of the document.
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::len)
    }

    /// Number of edits since the last load or save.
    pub fn dirty(&self) -> usize {
        self.dirty
    }

    /// Whether there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// File the document is loaded from and saved to.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Sets the filename and re-selects the syntax from it.
    pub fn set_filename<P: Into<PathBuf>>(&mut self, path: P) {
        let path = path.into();
        let syntax = SyntaxDefinition::for_filename(&path.to_string_lossy());
        self.filename = Some(path);
        self.set_syntax(syntax);
    }

    /// Active language, selected from the filename.
    pub fn syntax(&self) -> Option<&'static SyntaxDefinition> {
        self.highlighter.syntax()
    }

    /// Switches the active language and re-highlights every row.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxDefinition>) {
        log::debug!(
            "Syntax set to {}",
            syntax.map_or("none", |s| s.file_type)
        );
        self.highlighter.set_syntax(syntax);
        self.highlighter.highlight_all(&mut self.rows);
    }

    /// Columns between tab stops used for rendering.
    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    // ==================== Row Operations ====================

    /// Inserts a new row at `at`. Out-of-range indices are ignored.
    pub fn insert_row(&mut self, at: usize, bytes: impl Into<Vec<u8>>) {
        if at > self.rows.len() {
            return;
        }

        self.rows.insert(at, Row::new(at, bytes.into(), self.tab_stop));
        self.renumber_from(at + 1);
        // The row after the new one now inherits its comment state.
        self.highlighter.highlight_rows(&mut self.rows, [at, at + 1]);
        self.dirty += 1;
    }

    /// Removes the row at `at`. Out-of-range indices are ignored.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }

        self.rows.remove(at);
        self.renumber_from(at);
        self.highlighter.highlight_rows(&mut self.rows, [at]);
        self.dirty += 1;
    }

    /// Inserts a byte into row `row` at column `at` (appends if `at` is past
    /// the end).
    pub fn insert_char(&mut self, row: usize, at: usize, ch: u8) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        target.insert_byte(at, ch, tab_stop);
        self.highlighter.highlight_rows(&mut self.rows, [row]);
        self.dirty += 1;
    }

    /// Deletes the byte at column `at` of row `row`, if there is one.
    pub fn delete_char(&mut self, row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        if target.delete_byte(at, tab_stop) {
            self.highlighter.highlight_rows(&mut self.rows, [row]);
            self.dirty += 1;
        }
    }

    /// Appends bytes to the end of row `row`.
    pub fn append_to_row(&mut self, row: usize, bytes: &[u8]) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        target.append(bytes, tab_stop);
        self.highlighter.highlight_rows(&mut self.rows, [row]);
        self.dirty += 1;
    }

    /// Splits row `row` at column `at`; the tail becomes a new row below.
    pub fn split_row(&mut self, row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        let tail = target.split_off(at, tab_stop);
        self.highlighter.highlight_rows(&mut self.rows, [row]);
        self.dirty += 1;
        self.insert_row(row + 1, tail);
    }

    /// Joins row `row + 1` onto the end of row `row`.
    pub fn join_rows(&mut self, row: usize) {
        if row + 1 >= self.rows.len() {
            return;
        }
        let next = self.rows[row + 1].raw().to_vec();
        self.append_to_row(row, &next);
        self.delete_row(row + 1);
    }

    fn renumber_from(&mut self, start: usize) {
        for (idx, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.set_index(idx);
        }
    }

    // ==================== File I/O ====================

    /// Serializes the rows, each terminated by a newline.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut buf = Vec::with_capacity(total);
        for row in &self.rows {
            buf.extend_from_slice(row.raw());
            buf.push(b'\n');
        }
        buf
    }

    /// Writes the document to its file. Returns the number of bytes written.
    pub fn save(&mut self) -> Result<usize> {
        let path = self.filename.clone().ok_or(EditorError::NoFileName)?;
        self.write_to(&path)
    }

    /// Writes the document to `path` and adopts it as the filename.
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let written = self.write_to(path)?;
        self.set_filename(path);
        Ok(written)
    }

    fn write_to(&mut self, path: &Path) -> Result<usize> {
        let buf = self.to_bytes();

        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .open(path)?;
            file.set_len(buf.len() as u64)?;
            file.write_all(&buf)?;
            file.flush()
        };
        write().map_err(|e| EditorError::io(path, e))?;

        self.dirty = 0;
        log::debug!("Wrote {} bytes to {}", buf.len(), path.display());
        Ok(buf.len())
    }
}

/// Reads a file as lines with `\n` / `\r\n` endings stripped.
fn read_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let reader = BufReader::new(fs::File::open(path)?);
    reader
        .split(b'\n')
        .map(|line| {
            line.map(|mut line| {
                while matches!(line.last(), Some(b'\r' | b'\n')) {
                    line.pop();
                }
                line
            })
        })
        .collect()
}
