//! Log sink trait and implementations.

use log::Level;
use std::sync::{Arc, Mutex};

/// Trait for receiving the normalizer's log lines.
///
/// The host decides where lines end up. Logging must never affect the
/// outcome of a normalization pass.
pub trait LogSink: Send + Sync {
    /// Record a single line at `level`.
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Forwards to the `log` facade under the `traderfx` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "traderfx", level, "{}", message);
    }
}

/// No-op implementation for contexts that don't want output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpLogSink;

impl LogSink for NoOpLogSink {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Mock sink for testing - collects logged lines.
#[derive(Clone, Default)]
pub struct MockLogSink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MockLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected lines with their level.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    /// Returns the messages logged at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages_at(Level::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages_at(Level::Error)
    }

    /// Clears collected lines.
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }
}

impl LogSink for MockLogSink {
    fn log(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}
