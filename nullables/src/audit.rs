//! Nullable audit sink — captures records in memory for assertions.

use std::sync::Mutex;

use stakereg_registry::{AuditSink, ClaimRecord};

/// An in-memory audit sink for testing. Thread-safe.
pub struct NullAuditSink {
    records: Mutex<Vec<ClaimRecord>>,
}

impl NullAuditSink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// All records appended so far, in order.
    pub fn records(&self) -> Vec<ClaimRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl Default for NullAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSink for NullAuditSink {
    fn append(&self, record: ClaimRecord) {
        self.records.lock().unwrap().push(record);
    }
}
