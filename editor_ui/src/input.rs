//! Translation of terminal key events into editor keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use minivim_core::key::{self, Key};

/// Maps a crossterm key event to an editor key.
///
/// Returns `None` for releases and for keys the editor has no use for,
/// including non-ASCII characters.
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    let key = match event.code {
        KeyCode::Char(c) if !c.is_ascii() => return None,
        KeyCode::Char(c) if ctrl => Key::Byte(key::ctrl(c.to_ascii_lowercase() as u8)),
        KeyCode::Char(c) => Key::Byte(c as u8),
        KeyCode::Enter => Key::Byte(key::ENTER),
        KeyCode::Esc => Key::Byte(key::ESCAPE),
        KeyCode::Backspace => Key::Byte(key::BACKSPACE),
        KeyCode::Tab => Key::Byte(key::TAB),
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
        map_key(&KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_characters() {
        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), Some(Key::Byte(b'a')));
        assert_eq!(press(KeyCode::Char('A'), KeyModifiers::SHIFT), Some(Key::Byte(b'A')));
        assert_eq!(press(KeyCode::Char('é'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(press(KeyCode::Char('q'), KeyModifiers::CONTROL), Some(Key::ctrl(b'q')));
        assert_eq!(press(KeyCode::Char('S'), KeyModifiers::CONTROL), Some(Key::ctrl(b's')));
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Byte(b'\r')));
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Some(Key::Byte(0x1b)));
        assert_eq!(press(KeyCode::Backspace, KeyModifiers::NONE), Some(Key::Byte(127)));
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), Some(Key::Byte(b'\t')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(press(KeyCode::Up, KeyModifiers::NONE), Some(Key::ArrowUp));
        assert_eq!(press(KeyCode::PageDown, KeyModifiers::NONE), Some(Key::PageDown));
        assert_eq!(press(KeyCode::Delete, KeyModifiers::NONE), Some(Key::Delete));
        assert_eq!(press(KeyCode::F(1), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(&event), None);
    }
}
