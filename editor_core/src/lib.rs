//! Editor Core - Pure text editor logic.
//!
//! This crate contains the document model, rendering and highlighting
//! pipeline, search, and the modal editor state machine, without any
//! dependency on a terminal backend.

pub mod command;
pub mod config;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod error;
pub mod key;
pub mod mode;
pub mod prompt;
pub mod render;
pub mod row;
pub mod search;
pub mod status;
pub mod syntax;
pub mod viewport;

pub use command::Command;
pub use config::Config;
pub use cursor::Cursor;
pub use document::Document;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use key::Key;
pub use mode::Mode;
pub use prompt::{Prompt, PromptKind};
pub use row::Row;
pub use search::{SearchDirection, SearchEngine, SearchMatch};
pub use status::{MessageKind, StatusMessage};
pub use syntax::{HighlightClass, SyntaxDefinition, SyntaxHighlighter};
pub use viewport::Viewport;
