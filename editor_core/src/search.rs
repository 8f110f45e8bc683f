//! Incremental literal search with wrap-around.
//!
//! The engine remembers the row of the last match and steps from it in the
//! current direction, visiting every row at most once. The row of the current
//! match is painted with [`HighlightClass::SearchMatch`]; its previous
//! classification is kept aside and written back before the next overlay is
//! applied, so at most one overlay is ever live.

use crate::document::Document;
use crate::syntax::HighlightClass;

/// Direction in which the next match is searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    /// Towards the end of the document.
    #[default]
    Forward,
    /// Towards the start of the document.
    Backward,
}

/// A match found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Row containing the match.
    pub row: usize,
    /// Raw column of the first matched byte.
    pub cx: usize,
    /// Rendered column of the first matched byte.
    pub rx: usize,
    /// Length of the match in rendered bytes.
    pub len: usize,
}

/// Highlight of a row as it was before a match overlay was painted on it.
#[derive(Debug, Clone)]
struct SavedHighlight {
    row: usize,
    highlight: Vec<HighlightClass>,
}

/// Search state carried between steps of one search session.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved: Option<SavedHighlight>,
}

impl SearchEngine {
    /// Creates an engine with no previous match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row of the most recent match, if any.
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    /// Direction of the next step.
    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Changes the direction of the next step.
    pub fn set_direction(&mut self, direction: SearchDirection) {
        self.direction = direction;
    }

    /// Forgets the last match so the next step starts again from the top.
    pub fn reset(&mut self) {
        self.last_match = None;
        self.direction = SearchDirection::Forward;
    }

    /// Starts the next step just after (or before) `row`.
    pub fn resume_from(&mut self, row: usize, direction: SearchDirection) {
        self.last_match = Some(row);
        self.direction = direction;
    }

    /// Finds the next row for which `matcher` reports a hit.
    ///
    /// `matcher` receives a row's rendered bytes and returns the rendered
    /// start column and length of the match. Scanning begins one row past the
    /// last match in the current direction and wraps around the document
    /// edges; every row is tried at most once. Without a previous match the
    /// scan always runs forward from the first row.
    pub fn find_next_by<F>(&mut self, doc: &Document, mut matcher: F) -> Option<SearchMatch>
    where
        F: FnMut(&[u8]) -> Option<(usize, usize)>,
    {
        let n_rows = doc.len();
        if n_rows == 0 {
            return None;
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }

        let mut current = self.last_match.map(|row| row.min(n_rows - 1));
        for _ in 0..n_rows {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(row), SearchDirection::Forward) => (row + 1) % n_rows,
                (Some(row), SearchDirection::Backward) => (row + n_rows - 1) % n_rows,
            };
            current = Some(next);

            let Some(row) = doc.row(next) else {
                continue;
            };
            if let Some((rx, len)) = matcher(row.rendered()) {
                self.last_match = Some(next);
                return Some(SearchMatch {
                    row: next,
                    cx: row.rx_to_cx(rx, doc.tab_stop()),
                    rx,
                    len,
                });
            }
        }

        None
    }

    /// Finds the next row whose rendered text contains `query` literally.
    pub fn find_next(&mut self, doc: &Document, query: &str) -> Option<SearchMatch> {
        let needle = query.as_bytes();
        if needle.is_empty() {
            return None;
        }
        self.find_next_by(doc, |text| {
            text.windows(needle.len())
                .position(|window| window == needle)
                .map(|start| (start, needle.len()))
        })
    }

    /// Paints the match span, restoring any previous overlay first.
    pub fn highlight_match(&mut self, doc: &mut Document, found: &SearchMatch) {
        self.clear_highlight(doc);

        let Some(row) = doc.row_mut(found.row) else {
            return;
        };
        self.saved = Some(SavedHighlight {
            row: found.row,
            highlight: row.highlight.clone(),
        });
        let end = (found.rx + found.len).min(row.highlight.len());
        if let Some(span) = row.highlight.get_mut(found.rx..end) {
            span.fill(HighlightClass::SearchMatch);
        }
    }

    /// Writes the saved classification back onto the highlighted row.
    pub fn clear_highlight(&mut self, doc: &mut Document) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        match doc.row_mut(saved.row) {
            Some(row) if row.highlight.len() == saved.highlight.len() => {
                row.highlight = saved.highlight;
            }
            _ => log::warn!("Dropping stale search highlight for row {}", saved.row),
        }
    }
}
