//! Syntax highlighting module.
//!
//! Provides row-based highlighting driven by static language tables.

mod highlighter;
mod language;
mod theme;

pub use highlighter::{is_separator, SyntaxHighlighter};
pub use language::{SyntaxDefinition, SyntaxFlags, SYNTAX_DATABASE};
pub use theme::HighlightClass;
