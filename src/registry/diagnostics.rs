//! Output channel for `notify` and `debug` messages

use log::Level;
use std::sync::{Arc, Mutex};

/// Receives diagnostic text from the registry
pub trait DiagnosticSink: Send {
    fn emit(&self, level: Level, text: &str);
}

/// Log target of messages written by [`LogSink`]
pub const DIAGNOSTICS_TARGET: &str = "feedview::diagnostics";

/// Forwards messages to the `log` facade
///
/// `notify` arrives at `Info`, so the log filter must be at least `info`
/// (see [`crate::constants::app::DEFAULT_LOG_FILTER`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, level: Level, text: &str) {
        log::log!(target: DIAGNOSTICS_TARGET, level, "{}", text);
    }
}

/// Keeps messages in memory, clones share the same buffer
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted text, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.records().into_iter().map(|(_, text)| text).collect()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, level: Level, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level, text.to_string()));
    }
}
