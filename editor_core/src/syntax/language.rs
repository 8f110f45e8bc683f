//! Language definitions and filetype detection.
//!
//! Each definition is a static table describing how the highlighter should
//! treat comments, strings, numbers and keywords for one file type.

bitflags::bitflags! {
    /// Optional highlighting features of a language.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SyntaxFlags: u8 {
        const HIGHLIGHT_NUMBERS = 1 << 0;
        const HIGHLIGHT_STRINGS = 1 << 1;
    }
}

/// Static description of a language for the highlighter.
#[derive(Debug, PartialEq, Eq)]
pub struct SyntaxDefinition {
    /// Name shown in the status bar.
    pub file_type: &'static str,
    /// Patterns matched against the filename. A leading `.` marks an
    /// extension; anything else is matched as a substring.
    pub file_match: &'static [&'static str],
    /// Keywords in match order. A trailing `|` marks a secondary keyword.
    pub keywords: &'static [&'static str],
    pub line_comment: Option<&'static str>,
    pub block_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

const C_EXTENSIONS: &[&str] = &[".c", ".h", ".cpp", ".hpp", ".cc"];

const C_KEYWORDS: &[&str] = &[
    // C
    "auto", "break", "case", "continue", "default", "do", "else", "enum",
    "extern", "for", "goto", "if", "register", "return", "sizeof", "static",
    "struct", "switch", "typedef", "union", "volatile", "while", "NULL",
    // Types
    "int", "long", "double", "float", "char", "unsigned", "signed",
    "void", "short", "const", "bool",
    // C++
    "alignas|", "alignof|", "and|", "and_eq|", "asm|", "bitand|", "bitor|",
    "class|", "compl|", "constexpr|", "const_cast|", "deltype|", "delete|",
    "dynamic_cast|", "explicit|", "export|", "false|", "friend|", "inline|",
    "mutable|", "namespace|", "new|", "noexcept|", "not|", "not_eq|",
    "nullptr|", "operator|", "or|", "or_eq|", "private|", "protected|",
    "public|", "reinterpret_cast|", "static_assert|", "static_cast|",
    "template|", "this|", "thread_local|", "throw|", "true|", "try|",
    "typeid|", "typename|", "virtual|", "xor|", "xor_eq|",
];

const RUST_EXTENSIONS: &[&str] = &[".rs"];

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct",
    "super", "trait", "true", "type", "unsafe", "use", "where", "while",
    "async", "await", "dyn",
    // Types
    "i8|", "i16|", "i32|", "i64|", "i128|", "isize|", "u8|", "u16|", "u32|",
    "u64|", "u128|", "usize|", "f32|", "f64|", "bool|", "char|", "str|",
    "String|", "Vec|", "Option|", "Result|", "Box|",
];

/// Built-in language table, searched in order.
pub static SYNTAX_DATABASE: &[SyntaxDefinition] = &[
    SyntaxDefinition {
        file_type: "c",
        file_match: C_EXTENSIONS,
        keywords: C_KEYWORDS,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
    },
    SyntaxDefinition {
        file_type: "rust",
        file_match: RUST_EXTENSIONS,
        keywords: RUST_KEYWORDS,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
    },
];

impl SyntaxDefinition {
    /// Finds the definition whose patterns match `filename`.
    pub fn for_filename(filename: &str) -> Option<&'static SyntaxDefinition> {
        let extension = filename.rfind('.').map(|dot| &filename[dot..]);

        SYNTAX_DATABASE.iter().find(|syntax| {
            syntax.file_match.iter().any(|pattern| {
                if pattern.starts_with('.') {
                    extension == Some(*pattern)
                } else {
                    filename.contains(pattern)
                }
            })
        })
    }

    /// Looks a definition up by its file type name.
    pub fn by_name(file_type: &str) -> Option<&'static SyntaxDefinition> {
        SYNTAX_DATABASE
            .iter()
            .find(|syntax| syntax.file_type == file_type)
    }

    pub fn highlights_numbers(&self) -> bool {
        self.flags.contains(SyntaxFlags::HIGHLIGHT_NUMBERS)
    }

    pub fn highlights_strings(&self) -> bool {
        self.flags.contains(SyntaxFlags::HIGHLIGHT_STRINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_filename_extension() {
        assert_eq!(SyntaxDefinition::for_filename("main.c").unwrap().file_type, "c");
        assert_eq!(SyntaxDefinition::for_filename("src/x.hpp").unwrap().file_type, "c");
        assert_eq!(SyntaxDefinition::for_filename("lib.rs").unwrap().file_type, "rust");
        assert!(SyntaxDefinition::for_filename("README.md").is_none());
        assert!(SyntaxDefinition::for_filename("Makefile").is_none());
    }

    #[test]
    fn test_extension_uses_last_dot() {
        // ".c" must match the whole extension, not a prefix of ".cfg".
        assert!(SyntaxDefinition::for_filename("setup.cfg").is_none());
        assert_eq!(
            SyntaxDefinition::for_filename("archive.tar.c").unwrap().file_type,
            "c"
        );
    }

    #[test]
    fn test_flags() {
        let c = SyntaxDefinition::by_name("c").unwrap();
        assert!(c.highlights_numbers());
        assert!(c.highlights_strings());
        assert_eq!(c.block_comment, Some(("/*", "*/")));
    }
}
