//! Ex command-line parsing.

use crate::error::EditorError;
use std::str::FromStr;

/// A parsed `:` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:w [file]`
    Write(Option<String>),
    /// `:sav[eas] file`
    SaveAs(String),
    /// `:q` and `:q!`
    Quit { force: bool },
    /// `:wq [file]`, `:x [file]`
    WriteQuit(Option<String>),
}

/// Whether `name` is an accepted abbreviation of `full`, at least `min`
/// bytes long.
fn abbreviates(name: &str, full: &str, min: usize) -> bool {
    name.len() >= min && full.starts_with(name)
}

impl FromStr for Command {
    type Err = EditorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim()).filter(|arg| !arg.is_empty())),
            None => (line, None),
        };
        let arg = arg.map(str::to_owned);

        let command = match name {
            "wq" | "x" | "xit" => Command::WriteQuit(arg),
            "q!" | "quit!" => Command::Quit { force: true },
            _ if abbreviates(name, "write", 1) => Command::Write(arg),
            _ if abbreviates(name, "quit", 1) => Command::Quit { force: false },
            _ if abbreviates(name, "saveas", 3) => {
                Command::SaveAs(arg.ok_or(EditorError::MissingArgument("file name"))?)
            }
            _ => return Err(EditorError::UnknownCommand(line.to_owned())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, EditorError> {
        line.parse()
    }

    #[test]
    fn test_write_and_quit() {
        assert_eq!(parse("w").unwrap(), Command::Write(None));
        assert_eq!(parse("write").unwrap(), Command::Write(None));
        assert_eq!(parse("w  out.txt ").unwrap(), Command::Write(Some("out.txt".into())));
        assert_eq!(parse("q").unwrap(), Command::Quit { force: false });
        assert_eq!(parse("quit").unwrap(), Command::Quit { force: false });
        assert_eq!(parse("q!").unwrap(), Command::Quit { force: true });
        assert_eq!(parse("wq").unwrap(), Command::WriteQuit(None));
        assert_eq!(parse(" x ").unwrap(), Command::WriteQuit(None));
    }

    #[test]
    fn test_save_as() {
        assert_eq!(parse("sav a.c").unwrap(), Command::SaveAs("a.c".into()));
        assert_eq!(parse("saveas b.rs").unwrap(), Command::SaveAs("b.rs".into()));
        assert!(matches!(parse("saveas"), Err(EditorError::MissingArgument(_))));
    }

    #[test]
    fn test_unknown() {
        match parse("frobnicate now") {
            Err(EditorError::UnknownCommand(line)) => assert_eq!(line, "frobnicate now"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse("sa x").is_err());
        assert!(parse("wqa").is_err());
    }
}
