//! Application loop: draw, wait for input, dispatch.

use crate::compositor;
use crate::input;
use crate::terminal::{self, TerminalGuard};
use crossterm::event::{self, Event};
use minivim_core::Editor;
use std::io;
use std::time::Instant;

/// The running editor together with its frame buffer.
pub struct EditorApp {
    pub editor: Editor,
    frame: Vec<u8>,
}

impl EditorApp {
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            frame: Vec::new(),
        }
    }

    /// Builds the next frame into the internal buffer and returns it.
    pub fn render(&mut self, now: Instant) -> &[u8] {
        self.editor.scroll();
        self.frame.clear();
        compositor::draw_frame(&self.editor, now, &mut self.frame);
        &self.frame
    }

    /// Applies one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                if let Some(key) = input::map_key(&key_event) {
                    self.editor.process_key(key);
                } else {
                    log::trace!("Unmapped key: {:?}", key_event);
                }
            }
            Event::Resize(cols, rows) => {
                self.editor.resize(usize::from(rows), usize::from(cols));
            }
            _ => {}
        }
    }
}

/// Runs the editor until it asks to quit.
pub fn run(mut app: EditorApp) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let (rows, cols) = terminal::size()?;
    app.editor.resize(rows, cols);

    let mut stdout = io::stdout();
    let poll_interval = app.editor.config().poll_interval;

    while !app.editor.should_quit() {
        terminal::write_frame(&mut stdout, app.render(Instant::now()))?;

        if event::poll(poll_interval)? {
            app.handle_event(event::read()?);
        }
    }

    log::info!("Editor loop finished");
    Ok(())
}
