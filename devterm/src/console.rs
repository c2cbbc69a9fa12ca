//! The in-terminal console log.
//!
//! An append-only sequence of timestamped, leveled entries, rendered in the
//! console panel. This is observability *inside* the terminal; process-level
//! logging is `devterm_log`. Every append also emits the matching `tracing`
//! event so both sinks stay in step.

use chrono::{DateTime, Local};

/// Severity of a console entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// Routine user-visible notices
    Info,
    /// Lifecycle and system transitions
    Sys,
    /// Recoverable failures surfaced to the user
    Error,
}

impl ConsoleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleLevel::Info => "info",
            ConsoleLevel::Sys => "sys",
            ConsoleLevel::Error => "error",
        }
    }
}

/// One immutable console record.
#[derive(Debug, Clone)]
pub struct ConsoleEntry {
    timestamp: DateTime<Local>,
    level: ConsoleLevel,
    message: String,
}

impl ConsoleEntry {
    pub fn level(&self) -> ConsoleLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wall-clock time of the append, formatted for display.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Append-only console log.
///
/// `log` always succeeds, never blocks, and keeps entries in call order.
/// Entries are never mutated or removed.
#[derive(Debug, Default)]
pub struct Console {
    entries: Vec<ConsoleEntry>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, level: ConsoleLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            ConsoleLevel::Info => tracing::info!(target: "devterm::console", "{message}"),
            ConsoleLevel::Sys => tracing::info!(target: "devterm::console", sys = true, "{message}"),
            ConsoleLevel::Error => tracing::error!(target: "devterm::console", "{message}"),
        }
        self.entries.push(ConsoleEntry {
            timestamp: Local::now(),
            level,
            message,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(ConsoleLevel::Info, message);
    }

    pub fn sys(&mut self, message: impl Into<String>) {
        self.log(ConsoleLevel::Sys, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(ConsoleLevel::Error, message);
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_call_order() {
        let mut console = Console::new();
        console.info("first");
        console.sys("second");
        console.error("third");

        let messages: Vec<_> = console.entries().iter().map(ConsoleEntry::message).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn levels_are_recorded() {
        let mut console = Console::new();
        console.error("boom");
        assert_eq!(console.entries()[0].level(), ConsoleLevel::Error);
        assert_eq!(console.entries()[0].level().as_str(), "error");
    }

    #[test]
    fn display_time_is_wall_clock_shaped() {
        let mut console = Console::new();
        console.info("tick");
        let time = console.entries()[0].display_time();
        // HH:MM:SS
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
    }
}
