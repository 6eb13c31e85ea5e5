//! The in-memory turn log.
//!
//! Every narration line the session produces is recorded here with the
//! in-world time it happened at. The log is for display only and is never
//! part of a save file. Only the newest [`LOG_CAPACITY`] entries are kept.

use std::collections::VecDeque;
use std::fmt;

use crate::clock::Clock;

/// What sort of line a log entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Ordinary narration.
    Story,
    /// Prompts, help and suggestions.
    Hint,
    /// Things that happened to the player: patrols, quests, endings.
    Event,
    /// Blow-by-blow fight narration.
    Combat,
    /// Save, load and quit notices.
    System,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Story => write!(f, "story"),
            Self::Hint => write!(f, "hint"),
            Self::Event => write!(f, "event"),
            Self::Combat => write!(f, "combat"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Entries kept before the oldest are dropped.
pub const LOG_CAPACITY: usize = 500;

/// One stamped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// "Day N HH:00" at the time of writing.
    pub time: String,
    /// The narration line.
    pub text: String,
    /// What sort of line it is.
    pub kind: LogKind,
}

/// Chronological list of log entries, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TurnLog {
    entries: VecDeque<LogEntry>,
}

impl TurnLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line at the given time, dropping the oldest entry when full.
    pub fn push(&mut self, clock: &Clock, kind: LogKind, text: impl Into<String>) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            time: clock.to_string(),
            text: text.into(),
            kind,
        });
    }

    /// The newest `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(n)
    }

    /// Number of entries kept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
