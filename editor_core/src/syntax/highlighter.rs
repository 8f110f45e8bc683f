//! Row-based syntax highlighter.
//!
//! Each row is classified in a single forward pass over its rendered bytes.
//! The only state carried between rows is whether a block comment is still
//! open at the end of the previous row, so an edit can change the
//! classification of every following row. Those follow-up rows are
//! processed through an explicit work-list.

use super::language::SyntaxDefinition;
use super::theme::HighlightClass;
use crate::row::Row;
use std::collections::VecDeque;

/// Returns true for bytes that delimit keywords and numbers.
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\0' || b",.()+-/*=~%<>[];".contains(&byte)
}

/// Classifies rows according to the active [`SyntaxDefinition`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxHighlighter {
    syntax: Option<&'static SyntaxDefinition>,
}

impl SyntaxHighlighter {
    pub fn new(syntax: Option<&'static SyntaxDefinition>) -> Self {
        Self { syntax }
    }

    /// Returns the active language, if any.
    pub fn syntax(&self) -> Option<&'static SyntaxDefinition> {
        self.syntax
    }

    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxDefinition>) {
        self.syntax = syntax;
    }

    /// Classifies one rendered row.
    ///
    /// `in_comment` is the block-comment state inherited from the previous
    /// row. Returns the classes and whether a block comment is still open at
    /// the end of the row.
    pub fn classify(&self, text: &[u8], in_comment: bool) -> (Vec<HighlightClass>, bool) {
        let mut hl = vec![HighlightClass::Normal; text.len()];
        let Some(syntax) = self.syntax else {
            return (hl, false);
        };

        let mut prev_sep = true;
        let mut in_string: Option<u8> = None;
        let mut in_comment = in_comment;

        let mut i = 0;
        while i < text.len() {
            let c = text[i];
            let prev_hl = if i > 0 { hl[i - 1] } else { HighlightClass::Normal };
            let rest = &text[i..];

            if let Some(marker) = syntax.line_comment {
                if in_string.is_none() && !in_comment && rest.starts_with(marker.as_bytes()) {
                    hl[i..].fill(HighlightClass::Comment);
                    break;
                }
            }

            if let Some((start, end)) = syntax.block_comment {
                if in_string.is_none() {
                    if in_comment {
                        hl[i] = HighlightClass::BlockComment;
                        if rest.starts_with(end.as_bytes()) {
                            hl[i..i + end.len()].fill(HighlightClass::BlockComment);
                            i += end.len();
                            in_comment = false;
                            prev_sep = true;
                        } else {
                            i += 1;
                        }
                        continue;
                    } else if rest.starts_with(start.as_bytes()) {
                        hl[i..i + start.len()].fill(HighlightClass::BlockComment);
                        i += start.len();
                        in_comment = true;
                        continue;
                    }
                }
            }

            if syntax.highlights_strings() {
                if let Some(quote) = in_string {
                    hl[i] = HighlightClass::String;
                    prev_sep = true;
                    // An escape swallows the next byte, even a quote.
                    if c == b'\\' && i + 1 < text.len() {
                        hl[i + 1] = HighlightClass::String;
                        i += 2;
                        continue;
                    }
                    if c == quote {
                        in_string = None;
                    }
                    i += 1;
                    continue;
                } else if c == b'"' || c == b'\'' {
                    in_string = Some(c);
                    hl[i] = HighlightClass::String;
                    i += 1;
                    continue;
                }
            }

            if syntax.highlights_numbers() {
                let continues_number = prev_hl == HighlightClass::Number;
                if (c.is_ascii_digit() && (prev_sep || continues_number))
                    || (c == b'.' && continues_number)
                {
                    hl[i] = HighlightClass::Number;
                    i += 1;
                    prev_sep = false;
                    continue;
                }
            }

            if prev_sep {
                if let Some((len, class)) = match_keyword(syntax, text, i) {
                    hl[i..i + len].fill(class);
                    i += len;
                    prev_sep = false;
                    continue;
                }
            }

            prev_sep = is_separator(c);
            i += 1;
        }

        (hl, in_comment)
    }

    /// Re-classifies a single row. Returns true if its block-comment state
    /// changed, meaning the next row must be re-classified too.
    pub fn highlight_row(&self, row: &mut Row, in_comment: bool) -> bool {
        let (hl, open) = self.classify(row.rendered(), in_comment);
        row.highlight = hl;
        let changed = row.comment_open != open;
        row.comment_open = open;
        changed
    }

    /// Re-classifies the given rows, then every row whose inherited
    /// block-comment state changed as a consequence, until nothing changes.
    pub fn highlight_rows<I>(&self, rows: &mut [Row], dirty: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let mut pending: Vec<usize> = dirty.into_iter().filter(|&idx| idx < rows.len()).collect();
        pending.sort_unstable();
        pending.dedup();
        let mut queue: VecDeque<usize> = pending.into();

        while let Some(idx) = queue.pop_front() {
            let in_comment = idx > 0 && rows[idx - 1].comment_open;
            let changed = self.highlight_row(&mut rows[idx], in_comment);
            let next = idx + 1;
            if changed && next < rows.len() && !queue.contains(&next) {
                queue.push_back(next);
            }
        }
    }

    /// Re-classifies the whole document from the first row.
    pub fn highlight_all(&self, rows: &mut [Row]) {
        let mut in_comment = false;
        for row in rows.iter_mut() {
            self.highlight_row(row, in_comment);
            in_comment = row.comment_open;
        }
    }
}

/// Matches the first keyword (in table order) at `at`.
///
/// The byte after the keyword must be a separator; the end of the row
/// counts as one.
fn match_keyword(
    syntax: &SyntaxDefinition,
    text: &[u8],
    at: usize,
) -> Option<(usize, HighlightClass)> {
    let rest = &text[at..];
    syntax.keywords.iter().find_map(|keyword| {
        let (word, class) = match keyword.strip_suffix('|') {
            Some(word) => (word, HighlightClass::Keyword2),
            None => (*keyword, HighlightClass::Keyword1),
        };
        let word = word.as_bytes();
        let next = rest.get(word.len()).copied().unwrap_or(b'\0');
        (rest.starts_with(word) && is_separator(next)).then_some((word.len(), class))
    })
}
