//! minivim - A small modal terminal text editor.
//!
//! Usage: minivim [FILE]
//!
//! Logging is off unless `MINIVIM_LOG` names a file to write it to; the
//! level is taken from `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use minivim_core::{Config, Editor};
use minivim_ui::{run, EditorApp};
use std::env;
use std::fs::File;

/// Environment variable naming the log file.
const LOG_VAR: &str = "MINIVIM_LOG";

fn init_logging() -> Result<()> {
    let Some(path) = env::var_os(LOG_VAR) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {:?}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    log::info!("Starting minivim {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let editor = match env::args().nth(1) {
        Some(path) => {
            log::info!("Opening file: {}", path);
            Editor::open(&path, config).with_context(|| format!("failed to open {}", path))?
        }
        None => Editor::new(config),
    };

    run(EditorApp::new(editor)).context("terminal I/O failed")?;

    log::info!("minivim exited");
    Ok(())
}
