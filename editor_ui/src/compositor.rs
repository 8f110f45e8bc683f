//! Screen compositor.
//!
//! Turns the editor state into one frame of ANSI output. The frame is built
//! in memory and written to the terminal in a single call, so drawing never
//! flickers and the whole module stays free of I/O.

use minivim_core::{Editor, HighlightClass, Mode, Row};
use std::time::Instant;

/// Version shown in the welcome banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest filename prefix shown in the status bar.
const STATUS_NAME_WIDTH: usize = 20;

const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
const HOME: &[u8] = b"\x1b[H";
const CLEAR_LINE: &[u8] = b"\x1b[K";
const INVERSE: &[u8] = b"\x1b[7m";
const RESET: &[u8] = b"\x1b[m";
const DEFAULT_FG: &[u8] = b"\x1b[39m";
const ERROR_BG: &[u8] = b"\x1b[41m";
const TILDE: &[u8] = b"\x1b[34m~\x1b[39m";

/// Appends a complete frame for `editor` to `out`.
///
/// Call [`Editor::scroll`] first so the viewport contains the cursor.
pub fn draw_frame(editor: &Editor, now: Instant, out: &mut Vec<u8>) {
    out.extend_from_slice(HIDE_CURSOR);
    out.extend_from_slice(HOME);

    draw_rows(editor, out);
    draw_status_bar(editor, out);
    draw_message_bar(editor, now, out);

    let viewport = editor.viewport();
    let row = editor.cursor().cy.saturating_sub(viewport.row_offset) + 1;
    let col = editor.rx().saturating_sub(viewport.col_offset) + 1;
    out.extend_from_slice(format!("\x1b[{};{}H", row, col).as_bytes());

    out.extend_from_slice(SHOW_CURSOR);
}

fn draw_rows(editor: &Editor, out: &mut Vec<u8>) {
    let doc = editor.document();
    let viewport = editor.viewport();

    for y in 0..viewport.rows {
        let file_row = y + viewport.row_offset;
        match doc.row(file_row) {
            Some(row) => draw_row(editor, row, out),
            None if doc.is_empty() && y == viewport.rows / 3 => {
                draw_banner(viewport.cols, out);
            }
            None => out.extend_from_slice(TILDE),
        }
        out.extend_from_slice(CLEAR_LINE);
        out.extend_from_slice(b"\r\n");
    }
}

fn draw_banner(cols: usize, out: &mut Vec<u8>) {
    let banner = format!("minivim -- version {}", VERSION);
    let len = banner.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        out.extend_from_slice(TILDE);
        padding -= 1;
    }
    out.resize(out.len() + padding, b' ');
    out.extend_from_slice(&banner.as_bytes()[..len]);
}

/// Re-emits the active color after a reset.
fn restore_color(color: Option<u8>, out: &mut Vec<u8>) {
    if let Some(color) = color {
        out.extend_from_slice(format!("\x1b[{}m", color).as_bytes());
    }
}

/// Byte drawn for `c`: control bytes become `@`-based letters, or `?`.
fn visible_byte(c: u8) -> u8 {
    match c {
        0..=26 => b'@' + c,
        _ if c.is_ascii_control() => b'?',
        _ => c,
    }
}

fn draw_row(editor: &Editor, row: &Row, out: &mut Vec<u8>) {
    let viewport = editor.viewport();
    let rendered = row.rendered();
    let highlight = row.highlight();

    let start = viewport.col_offset.min(rendered.len());
    let end = (viewport.col_offset + viewport.cols).min(rendered.len());
    let cursor_col = (editor.mode() == Mode::Normal
        && editor.config().cursor_highlight
        && editor.cursor().cy == row.index())
    .then_some(editor.rx());

    // SGR color currently in effect; None is the default foreground.
    let mut current: Option<u8> = None;

    for i in start..end {
        let c = rendered[i];
        if cursor_col == Some(i) {
            out.extend_from_slice(RESET);
            out.extend_from_slice(INVERSE);
            out.push(visible_byte(c));
            out.extend_from_slice(RESET);
            restore_color(current, out);
        } else if c.is_ascii_control() {
            out.extend_from_slice(INVERSE);
            out.push(visible_byte(c));
            out.extend_from_slice(RESET);
            restore_color(current, out);
        } else if highlight[i] == HighlightClass::Normal {
            if current.take().is_some() {
                out.extend_from_slice(DEFAULT_FG);
            }
            out.push(c);
        } else {
            let color = highlight[i].color();
            if current != Some(color) {
                current = Some(color);
                out.extend_from_slice(format!("\x1b[{}m", color).as_bytes());
            }
            out.push(c);
        }
    }

    if cursor_col.is_some() && row.is_empty() {
        out.extend_from_slice(RESET);
        out.extend_from_slice(INVERSE);
        out.push(b' ');
        out.extend_from_slice(RESET);
    }
    out.extend_from_slice(DEFAULT_FG);
}

/// Left and right halves of the status bar.
fn status_text(editor: &Editor) -> (String, String) {
    let doc = editor.document();
    let name: String = match doc.filename() {
        Some(path) => path
            .display()
            .to_string()
            .chars()
            .take(STATUS_NAME_WIDTH)
            .collect(),
        None => "[No Name]".to_owned(),
    };
    let left = format!("{} {}", name, if doc.is_dirty() { "[+]" } else { "" });
    let right = format!(
        "{} | {}/{}",
        doc.syntax().map_or("no ft", |s| s.file_type),
        editor.cursor().cy + 1,
        doc.len()
    );
    (left, right)
}

fn draw_status_bar(editor: &Editor, out: &mut Vec<u8>) {
    let cols = editor.viewport().cols;
    let (left, right) = status_text(editor);
    let left = truncate(left.as_bytes(), cols);

    out.extend_from_slice(INVERSE);
    out.extend_from_slice(left);
    if left.len() + right.len() <= cols {
        out.resize(out.len() + cols - left.len() - right.len(), b' ');
        out.extend_from_slice(right.as_bytes());
    } else {
        out.resize(out.len() + cols - left.len(), b' ');
    }
    out.extend_from_slice(RESET);
    out.extend_from_slice(b"\r\n");
}

fn draw_message_bar(editor: &Editor, now: Instant, out: &mut Vec<u8>) {
    let cols = editor.viewport().cols;
    out.extend_from_slice(CLEAR_LINE);

    if let Some(prompt) = editor.prompt() {
        out.extend_from_slice(truncate(prompt.display().as_bytes(), cols));
    } else if let Some(message) = editor.status_at(now) {
        let text = truncate(message.text.as_bytes(), cols);
        if message.is_error() {
            out.extend_from_slice(ERROR_BG);
            out.extend_from_slice(text);
            out.extend_from_slice(RESET);
        } else {
            out.extend_from_slice(text);
        }
    }
}

fn truncate(bytes: &[u8], max: usize) -> &[u8] {
    &bytes[..bytes.len().min(max)]
}
