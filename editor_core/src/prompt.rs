//! Single-line input prompt shown in the message bar.

use crate::cursor::Cursor;
use crate::key::{self, Key};
use crate::search::SearchDirection;
use crate::viewport::Viewport;

/// What the prompt input is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// `:` ex command line.
    Command,
    /// `/` incremental search.
    Search,
}

impl PromptKind {
    /// Character shown before the input in the message bar.
    pub fn prefix(self) -> &'static str {
        match self {
            PromptKind::Command => ":",
            PromptKind::Search => "/",
        }
    }
}

/// Outcome of feeding one key to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    /// The input may have changed.
    Edited,
    /// An arrow key asked for the next match in a direction.
    Step(SearchDirection),
    /// Enter on a non-empty line.
    Submit,
    /// Escape.
    Cancel,
    /// Enter on an empty line; the prompt stays open.
    Empty,
}

/// An open prompt and the state needed to leave it.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// What the input is for.
    pub kind: PromptKind,
    /// Text typed so far, without the prefix.
    input: String,
    /// Cursor when the prompt opened.
    pub(crate) saved_cursor: Cursor,
    /// Row and column scroll offsets when the prompt opened.
    pub(crate) saved_offsets: (usize, usize),
}

impl Prompt {
    /// Opens an empty prompt, remembering where the cursor and view were.
    pub fn new(kind: PromptKind, cursor: Cursor, viewport: &Viewport) -> Self {
        Self {
            kind,
            input: String::new(),
            saved_cursor: cursor,
            saved_offsets: (viewport.row_offset, viewport.col_offset),
        }
    }

    /// Starts the prompt with pre-filled input.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// The typed text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text shown in the message bar while the prompt is open.
    pub fn display(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.input)
    }

    /// Applies one key to the input line.
    pub fn handle_key(&mut self, key: Key) -> PromptEvent {
        match key {
            Key::Byte(key::ESCAPE) => PromptEvent::Cancel,
            Key::Byte(key::ENTER) if self.input.is_empty() => PromptEvent::Empty,
            Key::Byte(key::ENTER) => PromptEvent::Submit,
            Key::Byte(key::BACKSPACE) | Key::Delete => {
                self.input.pop();
                PromptEvent::Edited
            }
            Key::Byte(b) if b == key::ctrl(b'h') => {
                self.input.pop();
                PromptEvent::Edited
            }
            Key::ArrowRight | Key::ArrowDown => PromptEvent::Step(SearchDirection::Forward),
            Key::ArrowLeft | Key::ArrowUp => PromptEvent::Step(SearchDirection::Backward),
            Key::Byte(b) if b.is_ascii() && !b.is_ascii_control() => {
                self.input.push(char::from(b));
                PromptEvent::Edited
            }
            _ => PromptEvent::Edited,
        }
    }
}
