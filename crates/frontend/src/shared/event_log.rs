use chrono::{DateTime, Local};
use contracts::shared::Severity;
use leptos::prelude::*;

/// Maximum number of records kept for display.
pub const LOG_CAPACITY: usize = 50;

/// A single operational message. Immutable once appended; leaves the
/// buffer only through capacity trimming or an explicit clear.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub severity: Severity,
}

/// Bounded, newest-first log of operation outcomes.
///
/// Owned by the UI session: components append results of host calls here,
/// nothing is persisted. Every record is also mirrored to the console so
/// the host devtools keep the full tagged history.
#[derive(Clone, Copy)]
pub struct EventLog {
    records: RwSignal<Vec<LogRecord>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(Vec::new()),
        }
    }

    /// Reactive view of the records, newest first.
    pub fn records(&self) -> RwSignal<Vec<LogRecord>> {
        self.records
    }

    /// Prepend a record stamped with the current time and trim the buffer
    /// to capacity. Synchronous and infallible.
    pub fn append(&self, message: impl Into<String>, severity: Severity) {
        let record = LogRecord {
            timestamp: Local::now(),
            message: message.into(),
            severity,
        };
        mirror_to_console(&record);
        self.records.update(|records| {
            records.insert(0, record);
            records.truncate(LOG_CAPACITY);
        });
    }

    /// Empty the buffer unconditionally.
    pub fn clear(&self) {
        self.records.update(|records| records.clear());
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

fn mirror_to_console(record: &LogRecord) {
    let tag = record.severity.as_str().to_uppercase();
    match record.severity {
        Severity::Error => log::error!("[{}] {}", tag, record.message),
        Severity::Warning => log::warn!("[{}] {}", tag, record.message),
        Severity::Info | Severity::Success => log::info!("[{}] {}", tag, record.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_newest_first() {
        let log = EventLog::new();
        log.append("first", Severity::Info);
        log.append("second", Severity::Success);

        let records = log.records().get_untracked();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "second");
        assert_eq!(records[1].message, "first");
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let log = EventLog::new();
        for i in 0..60 {
            log.append(format!("message {i}"), Severity::Info);
            assert!(log.records().with_untracked(|r| r.len()) <= LOG_CAPACITY);
        }

        let records = log.records().get_untracked();
        assert_eq!(records.len(), LOG_CAPACITY);
        // the ten oldest were evicted; insertion order, newest first
        assert_eq!(records[0].message, "message 59");
        assert_eq!(records[LOG_CAPACITY - 1].message, "message 10");
    }

    #[test]
    fn test_length_is_min_of_appends_and_capacity() {
        let log = EventLog::new();
        assert_eq!(log.records().with_untracked(|r| r.len()), 0);
        for i in 0..7 {
            log.append(format!("message {i}"), Severity::Warning);
        }
        assert_eq!(log.records().with_untracked(|r| r.len()), 7);
        assert_eq!(log.records().get_untracked()[0].message, "message 6");
    }

    #[test]
    fn test_clear_resets_to_fresh_buffer() {
        let log = EventLog::new();
        for i in 0..5 {
            log.append(format!("message {i}"), Severity::Error);
        }
        log.clear();
        assert!(log.records().with_untracked(|r| r.is_empty()));

        log.append("after clear", Severity::Info);
        let records = log.records().get_untracked();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "after clear");
    }
}
