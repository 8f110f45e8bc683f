//! Editor UI - Terminal rendering and input handling.
//!
//! This crate draws the editor state as ANSI escape sequences and feeds
//! crossterm key events into the editor core.

pub mod app;
pub mod compositor;
pub mod input;
pub mod terminal;

pub use app::{run, EditorApp};
pub use compositor::draw_frame;
pub use terminal::TerminalGuard;
