//! Recording reporter for tests.

use std::sync::Mutex;

use crate::application::ports::Reporter;

/// A [`Reporter`] that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    notices: Mutex<Vec<String>>,
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages passed to [`Reporter::notify`], oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().expect("lock poisoned").clone()
    }

    /// Lines passed to [`Reporter::print`], oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("lock poisoned").clone()
    }

    /// Returns `true` if any notice equals `message`.
    pub fn was_notified(&self, message: &str) -> bool {
        self.notices
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|n| n == message)
    }
}

impl Reporter for RecordingReporter {
    fn notify(&self, message: &str) {
        self.notices
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
    }

    fn print(&self, line: &str) {
        self.lines.lock().expect("lock poisoned").push(line.to_string());
    }
}
