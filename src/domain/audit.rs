//! Audit collaborator for insight generation
//!
//! The generator records every model invocation through an injected sink
//! instead of a process-wide logger, so embedding hosts choose where the
//! trail goes and tests can observe it directly.

use std::fmt::Debug;

use crate::domain::insight::InsightRecord;

/// Recipient of insight audit records.
///
/// Fire-and-forget: the generator never consumes a return value and a sink
/// must not fail the dispatch path.
pub trait AuditSink: Send + Sync + Debug {
    /// Record one model invocation.
    fn record(&self, record: InsightRecord);
}

/// In-memory implementation of AuditSink
pub mod in_memory {
    use std::sync::Mutex;

    use super::*;

    /// Sink that collects records in memory, for tests and embedding hosts
    /// that consume the trail themselves.
    #[derive(Debug, Default)]
    pub struct InMemoryAuditSink {
        records: Mutex<Vec<InsightRecord>>,
    }

    impl InMemoryAuditSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of all records collected so far.
        pub fn records(&self) -> Vec<InsightRecord> {
            self.records.lock().unwrap().clone()
        }

        pub fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.records.lock().unwrap().is_empty()
        }
    }

    impl AuditSink for InMemoryAuditSink {
        fn record(&self, record: InsightRecord) {
            self.records.lock().unwrap().push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::in_memory::InMemoryAuditSink;
    use super::*;

    #[test]
    fn test_in_memory_sink_collects_records() {
        let sink = InMemoryAuditSink::new();
        assert!(sink.is_empty());

        sink.record(InsightRecord::success("trend", 1, json!({"slope": 0.2}), 5));
        sink.record(InsightRecord::failed("trend", 1, "series too short", 1));

        assert_eq!(sink.len(), 2);

        let records = sink.records();
        assert!(records[0].status().is_success());
        assert_eq!(records[1].error(), Some("series too short"));
    }
}
