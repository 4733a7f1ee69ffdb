//! Workflow status codes and the append-only result log.
//!
//! The result log is the sole channel for end-user-visible outcome
//! reporting: every stage appends `{Status, Message}` entries in
//! chronological order and the CLI prints the whole log at the end,
//! regardless of where the workflow stopped.

/// Symbolic status codes, HTTP-flavoured. Raw process exit codes are also
/// valid statuses and are recorded as-is.
pub mod code {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const SEE_OTHER: i32 = 303;
    pub const UNAUTHORIZED: i32 = 401;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_SERVER_ERROR: i32 = 500;
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub status: i32,
    pub message: String,
}

impl ResultEntry {
    pub fn new(status: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Ordered, append-only sequence of result entries.
///
/// Insertion order is chronological; entries are never reordered or
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLog {
    entries: Vec<ResultEntry>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, status: i32, message: impl Into<String>) {
        self.entries.push(ResultEntry::new(status, message));
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ResultEntry> {
        self.entries.last()
    }
}

impl IntoIterator for ResultLog {
    type Item = ResultEntry;
    type IntoIter = std::vec::IntoIter<ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultLog {
    type Item = &'a ResultEntry;
    type IntoIter = std::slice::Iter<'a, ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_insertion_order() {
        let mut log = ResultLog::new();
        log.push(code::SUCCESS, "first");
        log.push(code::ERROR, "second");
        log.push(code::SUCCESS, "third");

        let messages: Vec<&str> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn log_keeps_duplicates() {
        let mut log = ResultLog::new();
        log.push(code::SUCCESS, "same");
        log.push(code::SUCCESS, "same");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn raw_exit_codes_are_valid_statuses() {
        let entry = ResultEntry::new(137, "Problem with project initialization");
        assert_eq!(entry.status, 137);
    }
}
