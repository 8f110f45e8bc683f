//! Editing modes.

use std::fmt;

/// The modal state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Movement and commands.
    #[default]
    Normal,
    /// Typed bytes are inserted into the document.
    Insert,
    /// A prompt (ex command or search) owns the keyboard.
    Command,
}

impl Mode {
    /// Indicator shown in the message bar when the mode is entered.
    pub fn indicator(self) -> Option<&'static str> {
        match self {
            Mode::Insert => Some("-- INSERT --"),
            Mode::Normal | Mode::Command => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        };
        f.write_str(name)
    }
}
