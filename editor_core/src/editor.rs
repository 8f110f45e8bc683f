//! Main editor state and modal key handling.

use crate::command::Command;
use crate::config::Config;
use crate::cursor::{max_column, Cursor};
use crate::document::Document;
use crate::error::{EditorError, Result};
use crate::key::{self, Key};
use crate::mode::Mode;
use crate::prompt::{Prompt, PromptEvent, PromptKind};
use crate::search::{SearchDirection, SearchEngine};
use crate::status::StatusMessage;
use crate::viewport::Viewport;
use std::path::Path;
use std::time::Instant;

/// Rows taken by the status bar and the message bar.
pub const BAR_ROWS: usize = 2;

/// The editor: one document plus cursor, viewport and modal state.
///
/// All input goes through [`Editor::process_key`]. Frontends call
/// [`Editor::scroll`] before drawing and read the state back through the
/// accessors.
pub struct Editor {
    /// The text buffer.
    doc: Document,
    /// Cursor in raw document coordinates.
    cursor: Cursor,
    /// Rendered column of the cursor, derived on every scroll.
    rx: usize,
    /// Visible window onto the document.
    viewport: Viewport,
    /// Current editing mode.
    mode: Mode,
    /// The open `:` or `/` prompt.
    prompt: Option<Prompt>,
    /// Search state and the live match overlay.
    search: SearchEngine,
    /// Whether the current search session has a match.
    search_found: bool,
    /// Last accepted search, repeated by `n` and `N`.
    last_query: Option<String>,
    /// Message shown in the message bar.
    status: Option<StatusMessage>,
    /// Runtime settings.
    config: Config,
    /// Ctrl-Q presses still needed before a dirty document is abandoned.
    quit_times: u8,
    /// Set once the editor has been asked to exit.
    should_quit: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Editor {
    /// Creates an editor with an empty, unnamed document.
    pub fn new(config: Config) -> Self {
        Self::with_document(Document::new(config.tab_stop), config)
    }

    /// Creates an editor around an already loaded document.
    pub fn with_document(doc: Document, config: Config) -> Self {
        Self {
            doc,
            cursor: Cursor::default(),
            rx: 0,
            viewport: Viewport::default(),
            mode: Mode::Normal,
            prompt: None,
            search: SearchEngine::new(),
            search_found: false,
            last_query: None,
            status: None,
            quit_times: config.quit_confirmations,
            config,
            should_quit: false,
        }
    }

    /// Opens `path` (or starts a new file with that name).
    pub fn open<P: AsRef<Path>>(path: P, config: Config) -> Result<Self> {
        let doc = Document::open(path, config.tab_stop)?;
        Ok(Self::with_document(doc, config))
    }

    /// The text buffer.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Cursor in raw document coordinates.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Rendered column of the cursor as of the last [`Editor::scroll`].
    pub fn rx(&self) -> usize {
        self.rx
    }

    /// Visible window onto the document.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current editing mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The open prompt, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Runtime settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the frontend should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ==================== Status Line ====================

    /// Shows an informational message.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    /// Shows an error message.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }

    /// Removes the current message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The status message, if it has not expired at `now`.
    pub fn status_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.status
            .as_ref()
            .filter(|message| message.is_visible_at(now, self.config.message_timeout))
    }

    fn report(&mut self, err: EditorError) {
        log::warn!("{}", err);
        self.set_error(err.to_string());
    }

    // ==================== Viewport ====================

    /// Adapts to a new terminal size; two rows are kept for the bars.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.viewport.resize(rows.saturating_sub(BAR_ROWS), cols);
        log::debug!("Resized to {}x{}", cols, rows);
    }

    /// Recomputes `rx` and moves the viewport so the cursor is visible.
    pub fn scroll(&mut self) {
        let tab_stop = self.doc.tab_stop();
        self.rx = self
            .doc
            .row(self.cursor.cy)
            .map_or(0, |row| row.cx_to_rx(self.cursor.cx, tab_stop));
        self.viewport.scroll(self.cursor.cy, self.rx);
    }

    // ==================== Key Dispatch ====================

    /// Handles one key in the current mode.
    pub fn process_key(&mut self, key: Key) {
        let is_quit = key == Key::ctrl(b'q');

        match self.mode {
            Mode::Normal => self.process_normal(key),
            Mode::Insert => self.process_insert(key),
            Mode::Command => self.process_prompt(key),
        }

        if !is_quit {
            self.quit_times = self.config.quit_confirmations;
        }
    }

    fn process_normal(&mut self, key: Key) {
        match key {
            Key::Byte(b'h' | b'j' | b'k' | b'l')
            | Key::ArrowUp
            | Key::ArrowDown
            | Key::ArrowLeft
            | Key::ArrowRight => self.move_cursor(key),
            Key::Byte(b'i') => self.set_mode(Mode::Insert),
            Key::Byte(b'a') => {
                self.set_mode(Mode::Insert);
                self.move_cursor(Key::ArrowRight);
            }
            Key::Byte(b'I') => {
                self.cursor.cx = 0;
                self.set_mode(Mode::Insert);
            }
            Key::Byte(b'A') => {
                self.set_mode(Mode::Insert);
                self.cursor.cx = self.doc.row_len(self.cursor.cy);
            }
            Key::Byte(b'o') => {
                self.set_mode(Mode::Insert);
                self.open_line((self.cursor.cy + 1).min(self.doc.len()));
            }
            Key::Byte(b'O') => {
                self.set_mode(Mode::Insert);
                self.open_line(self.cursor.cy.min(self.doc.len()));
            }
            Key::Byte(b'x') => {
                self.doc.delete_char(self.cursor.cy, self.cursor.cx);
                self.clamp();
            }
            Key::Byte(b'^') | Key::Home => self.cursor.cx = 0,
            Key::Byte(b'$') | Key::End => {
                self.cursor.cx = max_column(self.doc.row_len(self.cursor.cy), Mode::Normal);
            }
            Key::PageUp | Key::PageDown => self.page(key),
            Key::Byte(b':') => self.open_prompt(PromptKind::Command),
            Key::Byte(b'/') => self.open_prompt(PromptKind::Search),
            Key::Byte(b'n') => self.repeat_search(SearchDirection::Forward),
            Key::Byte(b'N') => self.repeat_search(SearchDirection::Backward),
            _ => self.process_common(key),
        }
    }

    fn process_insert(&mut self, key: Key) {
        match key {
            Key::Byte(key::ENTER) => self.insert_newline(),
            Key::Byte(key::ESCAPE) => {
                self.set_mode(Mode::Normal);
                self.clear_status();
                self.move_cursor(Key::ArrowLeft);
            }
            Key::Byte(key::BACKSPACE) => self.delete_backward(),
            Key::Byte(b) if b == key::ctrl(b'h') => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_cursor(key)
            }
            Key::Home => self.cursor.cx = 0,
            Key::End => self.cursor.cx = self.doc.row_len(self.cursor.cy),
            Key::PageUp | Key::PageDown => self.page(key),
            _ if key.is_text() => {
                if let Key::Byte(b) = key {
                    self.insert_char(b);
                }
            }
            _ => self.process_common(key),
        }
    }

    /// Control keys shared by Normal and Insert mode.
    fn process_common(&mut self, key: Key) {
        let Key::Byte(b) = key else {
            return;
        };
        match b {
            b if b == key::ctrl(b'q') => self.request_quit(),
            b if b == key::ctrl(b's') => self.save(),
            b if b == key::ctrl(b'f') => self.open_prompt(PromptKind::Search),
            _ => {}
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("Mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        if let Some(indicator) = mode.indicator() {
            self.set_status(indicator);
        }
    }

    fn clamp(&mut self) {
        self.cursor.clamp(&self.doc, self.mode);
    }

    // ==================== Cursor Movement ====================

    fn move_cursor(&mut self, key: Key) {
        match key {
            Key::ArrowUp | Key::Byte(b'k') => {
                self.cursor.cy = self.cursor.cy.saturating_sub(1);
            }
            Key::ArrowDown | Key::Byte(b'j') => {
                if self.cursor.cy < self.doc.len() {
                    self.cursor.cy += 1;
                }
            }
            Key::ArrowLeft | Key::Byte(b'h') => {
                self.cursor.cx = self.cursor.cx.saturating_sub(1);
            }
            Key::ArrowRight | Key::Byte(b'l') => {
                let limit = max_column(self.doc.row_len(self.cursor.cy), self.mode);
                if self.cursor.cy < self.doc.len() && self.cursor.cx < limit {
                    self.cursor.cx += 1;
                }
            }
            _ => {}
        }
        self.clamp();
    }

    /// Jumps to the viewport edge, then moves one screen further.
    fn page(&mut self, key: Key) {
        let rows = self.viewport.rows;
        let step = if key == Key::PageUp {
            self.cursor.cy = self.viewport.row_offset;
            Key::ArrowUp
        } else {
            self.cursor.cy = (self.viewport.row_offset + rows)
                .saturating_sub(1)
                .min(self.doc.len());
            Key::ArrowDown
        };
        for _ in 0..rows {
            self.move_cursor(step);
        }
        self.clamp();
    }

    // ==================== Text Editing ====================

    fn insert_char(&mut self, byte: u8) {
        if self.cursor.cy == self.doc.len() {
            self.doc.insert_row(self.doc.len(), Vec::new());
        }
        self.doc.insert_char(self.cursor.cy, self.cursor.cx, byte);
        self.cursor.cx += 1;
    }

    fn insert_newline(&mut self) {
        if self.cursor.cx == 0 {
            self.doc.insert_row(self.cursor.cy, Vec::new());
        } else {
            self.doc.split_row(self.cursor.cy, self.cursor.cx);
        }
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    /// Inserts an empty row at `at` and puts the cursor on it.
    fn open_line(&mut self, at: usize) {
        self.doc.insert_row(at, Vec::new());
        self.cursor = Cursor::new(0, at);
    }

    /// Deletes the byte before the cursor, joining rows at column 0.
    fn delete_backward(&mut self) {
        let Cursor { cx, cy } = self.cursor;
        if cy == self.doc.len() || (cx == 0 && cy == 0) {
            return;
        }

        if cx > 0 {
            self.doc.delete_char(cy, cx - 1);
            self.cursor.cx -= 1;
        } else {
            self.cursor.cx = self.doc.row_len(cy - 1);
            self.doc.join_rows(cy - 1);
            self.cursor.cy -= 1;
        }
    }

    /// Deletes the byte under the cursor, joining the next row at row end.
    fn delete_forward(&mut self) {
        let Cursor { cx, cy } = self.cursor;
        if cy >= self.doc.len() {
            return;
        }
        if cx < self.doc.row_len(cy) {
            self.doc.delete_char(cy, cx);
        } else {
            self.doc.join_rows(cy);
        }
    }

    // ==================== Files ====================

    fn save(&mut self) {
        if self.doc.filename().is_none() {
            self.prompt = Some(
                Prompt::new(PromptKind::Command, self.cursor, &self.viewport)
                    .with_input("saveas "),
            );
            self.set_mode(Mode::Command);
            return;
        }
        self.write(None);
    }

    /// Writes the document, optionally under a new name. Returns true on
    /// success.
    fn write(&mut self, path: Option<&str>) -> bool {
        let result = match path {
            Some(path) => self.doc.save_as(path),
            None => self.doc.save(),
        };
        match result {
            Ok(bytes) => {
                let name = self
                    .doc
                    .filename()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.set_status(format!("\"{}\" {} bytes written", name, bytes));
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    fn request_quit(&mut self) {
        if self.doc.is_dirty() && self.quit_times > 0 {
            self.set_error(format!(
                "File has unsaved changes. Press Ctrl-Q {} more time(s) to quit.",
                self.quit_times
            ));
            self.quit_times -= 1;
            return;
        }
        self.quit();
    }

    fn quit(&mut self) {
        log::info!("Quitting");
        self.should_quit = true;
    }

    fn execute(&mut self, line: &str) {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => return self.report(err),
        };
        log::debug!("Executing {:?}", command);

        match command {
            Command::Write(path) => {
                self.write(path.as_deref());
            }
            Command::SaveAs(path) => {
                self.write(Some(&path));
            }
            Command::Quit { force } => {
                if force || !self.doc.is_dirty() {
                    self.quit();
                } else {
                    self.report(EditorError::UnsavedChanges);
                }
            }
            Command::WriteQuit(path) => {
                if self.write(path.as_deref()) {
                    self.quit();
                }
            }
        }
    }

    // ==================== Prompt ====================

    fn open_prompt(&mut self, kind: PromptKind) {
        if kind == PromptKind::Search {
            self.search.reset();
            self.search_found = false;
        }
        self.prompt = Some(Prompt::new(kind, self.cursor, &self.viewport));
        self.set_mode(Mode::Command);
    }

    /// Leaves the prompt; both prompt kinds return to Normal mode.
    fn close_prompt(&mut self) -> Option<Prompt> {
        let prompt = self.prompt.take()?;
        self.set_mode(Mode::Normal);
        self.clamp();
        Some(prompt)
    }

    fn process_prompt(&mut self, key: Key) {
        let Some(prompt) = self.prompt.as_mut() else {
            self.set_mode(Mode::Normal);
            return;
        };
        let kind = prompt.kind;
        let event = prompt.handle_key(key);

        match (kind, event) {
            (_, PromptEvent::Empty) => {}
            (PromptKind::Command, PromptEvent::Edited | PromptEvent::Step(_)) => {}
            (PromptKind::Command, PromptEvent::Cancel) => {
                self.close_prompt();
            }
            (PromptKind::Command, PromptEvent::Submit) => {
                if let Some(prompt) = self.close_prompt() {
                    self.execute(prompt.input());
                }
            }
            (PromptKind::Search, PromptEvent::Edited) => {
                self.search.reset();
                self.search_step();
            }
            (PromptKind::Search, PromptEvent::Step(direction)) => {
                self.search.set_direction(direction);
                self.search_step();
            }
            (PromptKind::Search, PromptEvent::Submit) => {
                self.search.clear_highlight(&mut self.doc);
                if let Some(prompt) = self.close_prompt() {
                    let query = prompt.input().to_owned();
                    if !self.search_found {
                        self.report(EditorError::PatternNotFound(query.clone()));
                    }
                    self.last_query = Some(query);
                }
            }
            (PromptKind::Search, PromptEvent::Cancel) => {
                self.search.clear_highlight(&mut self.doc);
                if let Some(prompt) = self.close_prompt() {
                    let (row_offset, col_offset) = prompt.saved_offsets;
                    self.cursor = prompt.saved_cursor;
                    self.viewport.row_offset = row_offset;
                    self.viewport.col_offset = col_offset;
                    self.clamp();
                }
            }
        }
    }

    // ==================== Search ====================

    /// Runs one search step for the query in the open prompt.
    fn search_step(&mut self) {
        let Some(query) = self.prompt.as_ref().map(|p| p.input().to_owned()) else {
            return;
        };

        self.search.clear_highlight(&mut self.doc);
        match self.search.find_next(&self.doc, &query) {
            Some(found) => {
                self.cursor = Cursor::new(found.cx, found.row);
                self.viewport.scroll_to_top(found.row);
                self.search.highlight_match(&mut self.doc, &found);
                self.search_found = true;
            }
            None => self.search_found = false,
        }
    }

    /// Repeats the last accepted search from the cursor row.
    fn repeat_search(&mut self, direction: SearchDirection) {
        let Some(query) = self.last_query.clone() else {
            self.set_error("no previous search");
            return;
        };

        self.search.resume_from(self.cursor.cy, direction);
        match self.search.find_next(&self.doc, &query) {
            Some(found) => {
                self.cursor = Cursor::new(found.cx, found.row);
                self.clamp();
            }
            None => self.report(EditorError::PatternNotFound(query)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::HighlightClass;

    fn setup(lines: &[&str]) -> Editor {
        let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes().to_vec()), 4);
        let mut editor = Editor::with_document(doc, Config::default());
        editor.resize(12, 40);
        editor
    }

    fn keys(editor: &mut Editor, input: &str) {
        for b in input.bytes() {
            editor.process_key(Key::Byte(b));
        }
    }

    fn lines(editor: &Editor) -> Vec<String> {
        editor
            .document()
            .rows()
            .iter()
            .map(|r| String::from_utf8_lossy(r.raw()).into_owned())
            .collect()
    }

    fn status_text(editor: &Editor) -> Option<String> {
        editor.status_at(Instant::now()).map(|m| m.text.clone())
    }

    #[test]
    fn test_starts_in_normal_mode() {
        let editor = Editor::default();
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.cursor(), Cursor::default());
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_insert_typing_and_escape() {
        let mut editor = setup(&[]);
        keys(&mut editor, "ihello");
        assert_eq!(editor.mode(), Mode::Insert);
        assert_eq!(status_text(&editor).as_deref(), Some("-- INSERT --"));
        assert_eq!(lines(&editor), ["hello"]);
        assert_eq!(editor.cursor(), Cursor::new(5, 0));

        editor.process_key(Key::Byte(key::ESCAPE));
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.cursor(), Cursor::new(4, 0));
        assert!(status_text(&editor).is_none());
        assert!(editor.document().is_dirty());
    }

    #[test]
    fn test_enter_splits_line() {
        let mut editor = setup(&["hello world"]);
        keys(&mut editor, "lllll");
        keys(&mut editor, "i\r");
        assert_eq!(lines(&editor), ["hello", " world"]);
        assert_eq!(editor.cursor(), Cursor::new(0, 1));

        // Enter at column 0 pushes the row down.
        keys(&mut editor, "\r");
        assert_eq!(lines(&editor), ["hello", "", " world"]);
        assert_eq!(editor.cursor(), Cursor::new(0, 2));
    }

    #[test]
    fn test_backspace_merges_lines() {
        let mut editor = setup(&["ab", "cd"]);
        keys(&mut editor, "ji");
        assert_eq!(editor.cursor(), Cursor::new(0, 1));
        editor.process_key(Key::Byte(key::BACKSPACE));
        assert_eq!(lines(&editor), ["abcd"]);
        assert_eq!(editor.cursor(), Cursor::new(2, 0));

        editor.process_key(Key::Byte(key::BACKSPACE));
        assert_eq!(lines(&editor), ["acd"]);
        assert_eq!(editor.cursor(), Cursor::new(1, 0));

        // Nothing before the start of the document.
        editor.process_key(Key::Byte(key::BACKSPACE));
        editor.process_key(Key::ctrl(b'h'));
        assert_eq!(lines(&editor), ["cd"]);
        assert_eq!(editor.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_emptying_a_line_then_merging() {
        let mut editor = setup(&["ab", "c"]);
        keys(&mut editor, "jA");
        editor.process_key(Key::Byte(key::BACKSPACE));
        assert_eq!(lines(&editor), ["ab", ""]);
        editor.process_key(Key::Byte(key::BACKSPACE));
        assert_eq!(lines(&editor), ["ab"]);
        assert_eq!(editor.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn test_delete_key_joins_next_row() {
        let mut editor = setup(&["ab", "cd"]);
        keys(&mut editor, "A");
        editor.process_key(Key::Delete);
        assert_eq!(lines(&editor), ["abcd"]);
        editor.process_key(Key::Home);
        editor.process_key(Key::Delete);
        assert_eq!(lines(&editor), ["bcd"]);
    }

    #[test]
    fn test_normal_mode_clamp() {
        let mut editor = setup(&["abc", "", "longer line"]);
        keys(&mut editor, "llllll");
        assert_eq!(editor.cursor(), Cursor::new(2, 0));
        keys(&mut editor, "j");
        assert_eq!(editor.cursor(), Cursor::new(0, 1));
        keys(&mut editor, "j$");
        assert_eq!(editor.cursor(), Cursor::new(10, 2));
        keys(&mut editor, "k");
        assert_eq!(editor.cursor(), Cursor::new(0, 1));
        keys(&mut editor, "k$");
        assert_eq!(editor.cursor(), Cursor::new(2, 0));
        keys(&mut editor, "^");
        assert_eq!(editor.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_append_moves_past_last_character() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, "$a!");
        assert_eq!(lines(&editor), ["abc!"]);
        editor.process_key(Key::Byte(key::ESCAPE));
        keys(&mut editor, "I>");
        assert_eq!(lines(&editor), [">abc!"]);
    }

    #[test]
    fn test_open_line_below_and_above() {
        let mut editor = setup(&["one", "three"]);
        keys(&mut editor, "otwo");
        assert_eq!(lines(&editor), ["one", "two", "three"]);
        editor.process_key(Key::Byte(key::ESCAPE));
        keys(&mut editor, "gg");
        keys(&mut editor, "kOzero");
        assert_eq!(lines(&editor), ["zero", "one", "two", "three"]);
        assert_eq!(editor.cursor(), Cursor::new(4, 0));
    }

    #[test]
    fn test_x_deletes_under_cursor() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, "$x");
        assert_eq!(lines(&editor), ["ab"]);
        assert_eq!(editor.cursor(), Cursor::new(1, 0));
        keys(&mut editor, "xxx");
        assert_eq!(lines(&editor), [""]);
        assert_eq!(editor.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_movement_stays_in_bounds() {
        let mut editor = setup(&["a", "b"]);
        keys(&mut editor, "hhkk");
        assert_eq!(editor.cursor(), Cursor::new(0, 0));
        keys(&mut editor, "jjjj");
        assert_eq!(editor.cursor(), Cursor::new(0, 2));
        keys(&mut editor, "ll");
        assert_eq!(editor.cursor(), Cursor::new(0, 2));
    }

    #[test]
    fn test_page_down_and_up() {
        let text: Vec<String> = (0..50).map(|i| format!("line {}", i)).collect();
        let refs: Vec<&str> = text.iter().map(String::as_str).collect();
        let mut editor = setup(&refs);
        assert_eq!(editor.viewport().rows, 10);

        editor.process_key(Key::PageDown);
        assert_eq!(editor.cursor().cy, 19);
        editor.scroll();
        assert_eq!(editor.viewport().row_offset, 10);

        editor.process_key(Key::PageUp);
        assert_eq!(editor.cursor().cy, 0);
    }

    #[test]
    fn test_scroll_uses_rendered_column() {
        let mut editor = setup(&["\t\tx"]);
        keys(&mut editor, "$");
        editor.scroll();
        assert_eq!(editor.cursor().cx, 2);
        assert_eq!(editor.rx(), 8);
    }

    #[test]
    fn test_search_prompt_moves_and_highlights() {
        let mut editor = setup(&["alpha", "beta", "alphabet"]);
        keys(&mut editor, "/bet");
        assert_eq!(editor.mode(), Mode::Command);
        assert_eq!(editor.prompt().unwrap().display(), "/bet");
        assert_eq!(editor.cursor(), Cursor::new(0, 1));
        assert_eq!(editor.viewport().row_offset, 1);
        assert_eq!(&editor.document().row(1).unwrap().highlight()[0..3], &[HighlightClass::SearchMatch; 3]);

        editor.process_key(Key::ArrowDown);
        assert_eq!(editor.cursor(), Cursor::new(5, 2));
        assert_eq!(editor.document().row(1).unwrap().highlight()[0], HighlightClass::Normal);

        editor.process_key(Key::Byte(key::ENTER));
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.cursor(), Cursor::new(5, 2));
        assert!(editor
            .document()
            .rows()
            .iter()
            .all(|r| r.highlight().iter().all(|&c| c == HighlightClass::Normal)));

        keys(&mut editor, "n");
        assert_eq!(editor.cursor(), Cursor::new(0, 1));
        keys(&mut editor, "N");
        assert_eq!(editor.cursor(), Cursor::new(5, 2));
    }

    #[test]
    fn test_search_escape_restores_position() {
        let mut editor = setup(&["one", "two", "three"]);
        keys(&mut editor, "jl");
        editor.scroll();
        let before = (editor.cursor(), *editor.viewport());

        keys(&mut editor, "/thr");
        assert_eq!(editor.cursor().cy, 2);
        editor.process_key(Key::Byte(key::ESCAPE));
        assert_eq!((editor.cursor(), *editor.viewport()), before);
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.document().row(2).unwrap().highlight(), &[HighlightClass::Normal; 5]);
    }

    #[test]
    fn test_search_not_found() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, "/zz\r");
        assert_eq!(editor.cursor(), Cursor::new(0, 0));
        let message = editor.status_at(Instant::now()).unwrap();
        assert!(message.is_error());
        assert_eq!(message.text, "pattern not found: zz");
    }

    #[test]
    fn test_search_from_insert_returns_to_normal() {
        let mut editor = setup(&["abc", "xyz"]);
        keys(&mut editor, "i");
        editor.process_key(Key::ctrl(b'f'));
        keys(&mut editor, "yz\r");
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn test_search_escape_from_insert_clamps_for_normal() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, "A");
        assert_eq!(editor.cursor(), Cursor::new(3, 0));
        editor.process_key(Key::ctrl(b'f'));
        keys(&mut editor, "b");
        editor.process_key(Key::Byte(key::ESCAPE));
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn test_search_escape_keeps_new_size() {
        let mut editor = setup(&["abc", "bcd"]);
        keys(&mut editor, "/b");
        editor.resize(24, 80);
        editor.process_key(Key::Byte(key::ESCAPE));
        assert_eq!((editor.viewport().rows, editor.viewport().cols), (22, 80));
        assert_eq!(editor.cursor(), Cursor::new(0, 0));
        assert_eq!(editor.viewport().row_offset, 0);
    }

    #[test]
    fn test_empty_prompt_enter_is_ignored() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, ":\r");
        assert_eq!(editor.mode(), Mode::Command);
        editor.process_key(Key::Byte(key::ESCAPE));
        assert_eq!(editor.mode(), Mode::Normal);
        assert!(editor.prompt().is_none());
    }

    #[test]
    fn test_quit_commands() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, ":q\r");
        assert!(editor.should_quit());

        let mut editor = setup(&["abc"]);
        keys(&mut editor, "x:q\r");
        assert!(!editor.should_quit());
        assert_eq!(editor.mode(), Mode::Normal);
        assert!(editor.status_at(Instant::now()).unwrap().is_error());
        keys(&mut editor, ":q!\r");
        assert!(editor.should_quit());
    }

    #[test]
    fn test_unknown_command() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, ":bogus\r");
        assert_eq!(status_text(&editor).as_deref(), Some("not an editor command: bogus"));
        assert!(!editor.should_quit());
    }

    #[test]
    fn test_ctrl_q_needs_confirmation_when_dirty() {
        let mut editor = setup(&["abc"]);
        keys(&mut editor, "x");
        editor.process_key(Key::ctrl(b'q'));
        assert!(!editor.should_quit());
        editor.process_key(Key::ctrl(b'q'));
        assert!(editor.should_quit());

        // Any other key resets the confirmation.
        let mut editor = setup(&["abc"]);
        keys(&mut editor, "x");
        editor.process_key(Key::ctrl(b'q'));
        keys(&mut editor, "l");
        editor.process_key(Key::ctrl(b'q'));
        assert!(!editor.should_quit());
    }

    #[test]
    fn test_write_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        let mut editor = setup(&["int x;"]);

        // Without a file name Ctrl-S asks for one.
        editor.process_key(Key::ctrl(b's'));
        assert_eq!(editor.prompt().unwrap().display(), ":saveas ");
        keys(&mut editor, &format!("{}\r", path.display()));
        assert_eq!(std::fs::read(&path).unwrap(), b"int x;\n".to_vec());
        assert_eq!(editor.document().syntax().unwrap().file_type, "c");
        assert!(!editor.document().is_dirty());

        keys(&mut editor, "x:wq\r");
        assert!(editor.should_quit());
        assert_eq!(std::fs::read(&path).unwrap(), b"nt x;\n".to_vec());
    }

    #[test]
    fn test_failed_write_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let mut editor = setup(&["abc"]);
        keys(&mut editor, "x");
        keys(&mut editor, &format!(":wq {}\r", path.display()));
        assert!(!editor.should_quit());
        assert!(editor.document().is_dirty());
        assert!(editor.status_at(Instant::now()).unwrap().is_error());
    }

    #[test]
    fn test_resize_reserves_bars() {
        let mut editor = Editor::default();
        editor.resize(24, 80);
        assert_eq!(editor.viewport().rows, 22);
        assert_eq!(editor.viewport().cols, 80);
    }
}
