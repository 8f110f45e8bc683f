//! Logical keys, independent of the terminal backend.

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A plain byte: printable characters, control codes, Enter, Escape.
    Byte(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

pub const ENTER: u8 = b'\r';
pub const ESCAPE: u8 = 0x1b;
pub const BACKSPACE: u8 = 127;
pub const TAB: u8 = b'\t';

/// Returns the control code produced by Ctrl + `c`.
pub const fn ctrl(c: u8) -> u8 {
    c & 0x1f
}

impl Key {
    /// Shorthand for `Key::Byte(ctrl(c))`.
    pub const fn ctrl(c: u8) -> Self {
        Key::Byte(ctrl(c))
    }

    /// Whether the key is a byte that would be inserted as text.
    pub fn is_text(self) -> bool {
        matches!(self, Key::Byte(b) if b == TAB || (b.is_ascii() && !b.is_ascii_control()))
    }
}
