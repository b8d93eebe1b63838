//! Append-only log of the calculations completed in this session.
//!
//! Kept in memory only; it is gone when the process exits.

use super::format::format_number;
use chrono::{DateTime, Local};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// `"{left} {op} {right}"`.
    pub expression: String,
    pub result: f64,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn result_text(&self) -> String {
        format_number(self.result)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result_text())
    }
}

#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn append(&mut self, expression: impl Into<String>, result: f64) {
        self.entries.push(HistoryEntry {
            expression: expression.into(),
            result,
            recorded_at: Local::now(),
        });
    }

    /// All entries, oldest first.
    pub fn snapshot(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
