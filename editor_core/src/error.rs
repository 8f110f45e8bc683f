//! Error types for editor operations.
//!
//! Every variant is recoverable: the editor reports it on the status line and
//! keeps running with its state unchanged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File that was being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The document has never been given a filename.
    #[error("no file name")]
    NoFileName,

    /// Quitting was refused because the document has unsaved changes.
    #[error("no write since last change (add ! to override)")]
    UnsavedChanges,

    /// The command line did not match any known command.
    #[error("not an editor command: {0}")]
    UnknownCommand(String),

    /// A command was given without its required argument.
    #[error("argument required: {0}")]
    MissingArgument(&'static str),

    /// A search query occurs nowhere in the document.
    #[error("pattern not found: {0}")]
    PatternNotFound(String),
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type used throughout the editor core.
pub type Result<T> = std::result::Result<T, EditorError>;
