//! Progress notice reporting.
//!
//! Core flows emit human-readable notices through an injectable sink,
//! keeping the workflow decoupled from the console and letting tests
//! capture the stream.

use std::io::{self, IsTerminal};

/// Capability for receiving progress notices from the core flows.
pub trait StatusSink {
    fn status(&mut self, message: &str);
}

/// Writes notices to stderr when stderr is a terminal.
///
/// Machine consumers read the JSON envelope on stdout; the notice stream
/// is for humans watching a run.
#[derive(Debug, Default)]
pub struct TtyStatus;

impl StatusSink for TtyStatus {
    fn status(&mut self, message: &str) {
        if io::stderr().is_terminal() {
            eprintln!("{}", message);
        }
    }
}

/// Captures notices in memory for inspection.
#[derive(Debug, Default)]
pub struct BufferStatus {
    messages: Vec<String>,
}

impl BufferStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl StatusSink for BufferStatus {
    fn status(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
