//! Editor configuration.
//!
//! Built-in defaults, optionally overridden from the environment.

use crate::render::DEFAULT_TAB_STOP;
use std::env;
use std::time::Duration;

/// Environment variable overriding [`Config::tab_stop`].
pub const TAB_STOP_VAR: &str = "MINIVIM_TAB_STOP";
/// Environment variable overriding [`Config::cursor_highlight`] (`0` or `1`).
pub const CURSOR_HL_VAR: &str = "MINIVIM_CURSOR_HL";

/// Runtime settings for the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Columns between tab stops.
    pub tab_stop: usize,
    /// Draw the Normal-mode cursor as an inverse-video cell.
    pub cursor_highlight: bool,
    /// How long a status message stays visible.
    pub message_timeout: Duration,
    /// How long to wait for a key before redrawing.
    pub poll_interval: Duration,
    /// Extra Ctrl-Q presses needed to quit with unsaved changes.
    pub quit_confirmations: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            cursor_highlight: true,
            message_timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(100),
            quit_confirmations: 1,
        }
    }
}

impl Config {
    /// Returns the defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(
            env::var(TAB_STOP_VAR).ok().as_deref(),
            env::var(CURSOR_HL_VAR).ok().as_deref(),
        );
        config
    }

    /// Applies raw override values. Invalid values are logged and ignored.
    fn apply_overrides(&mut self, tab_stop: Option<&str>, cursor_hl: Option<&str>) {
        if let Some(value) = tab_stop {
            match value.trim().parse::<usize>() {
                Ok(n) if (1..=16).contains(&n) => self.tab_stop = n,
                _ => log::warn!("Ignoring invalid {}={:?}", TAB_STOP_VAR, value),
            }
        }

        if let Some(value) = cursor_hl {
            match value.trim() {
                "0" => self.cursor_highlight = false,
                "1" => self.cursor_highlight = true,
                _ => log::warn!("Ignoring invalid {}={:?}", CURSOR_HL_VAR, value),
            }
        }
    }
}
