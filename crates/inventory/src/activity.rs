//! Caller-owned audit trail of stock movements.

use chrono::Utc;

/// Append-only list of human-readable, timestamped audit entries.
///
/// The store appends to one of these during `add` when the caller passes
/// it in; ownership, inspection and retention stay with the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message`, prefixed with the current UTC timestamp.
    pub fn record(&mut self, message: &str) {
        self.entries
            .push(format!("{}: {message}", Utc::now().to_rfc3339()));
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
