//! Highlight classes and their terminal colors.

/// Syntax category assigned to one rendered character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightClass {
    /// Plain text.
    #[default]
    Normal,
    /// Single-line comment, up to the end of the row.
    Comment,
    /// Text inside a block comment, markers included.
    BlockComment,
    /// Primary keyword (control flow, declarations and types).
    Keyword1,
    /// Secondary keyword (`|`-suffixed entries).
    Keyword2,
    /// Quoted string, quotes and escapes included.
    String,
    /// Numeric literal.
    Number,
    /// Span of the current search match.
    SearchMatch,
}

impl HighlightClass {
    /// Returns the ANSI SGR foreground color code for this class.
    pub fn color(self) -> u8 {
        match self {
            Self::Comment | Self::BlockComment => 36, // Cyan
            Self::Keyword1 => 33,                     // Yellow
            Self::Keyword2 => 32,                     // Green
            Self::String => 35,                       // Magenta
            Self::Number => 31,                       // Red
            Self::SearchMatch => 34,                  // Blue
            Self::Normal => 37,                       // White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(HighlightClass::Comment.color(), HighlightClass::BlockComment.color());
        assert_eq!(HighlightClass::Keyword1.color(), 33);
        assert_eq!(HighlightClass::SearchMatch.color(), 34);
        assert_eq!(HighlightClass::default(), HighlightClass::Normal);
    }
}
