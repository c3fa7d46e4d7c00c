//! Audit sink implementations.
//!
//! Provides in-memory logging and Postgres schema definitions for an
//! append-only stream of admission decisions.

use std::collections::VecDeque;

use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AdmissionEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related class identifier.
    pub class_id: String,
    /// Related student identifier.
    pub student_id: String,
    /// Action taken (admit, waitlist, reject, drop, promote, overflow).
    pub action: String,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AdmissionEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AdmissionEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AdmissionEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AdmissionEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Postgres-backed audit sink (schema-only; DB I/O not wired).
pub struct PostgresAuditSink;

impl PostgresAuditSink {
    /// Returns SQL migration statements for the audit log.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[
            r"
CREATE TABLE IF NOT EXISTS ca_audit_events (
    event_id TEXT PRIMARY KEY,
    class_id TEXT NOT NULL,
    student_id TEXT NOT NULL,
    action TEXT NOT NULL,
    detail TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_ca_audit_events_class_created ON ca_audit_events (class_id, created_at);
CREATE INDEX IF NOT EXISTS idx_ca_audit_events_student ON ca_audit_events (student_id);
",
        ]
    }
}

impl AuditSink for PostgresAuditSink {
    fn record(&mut self, _event: AdmissionEvent) {
        // Stub: actual DB writes require a runtime + client; left to integration layer.
    }
}

/// Helper to build an audit event from context.
pub fn build_admission_event(
    event_id: impl Into<String>,
    class_id: impl Into<String>,
    student_id: impl Into<String>,
    action: impl Into<String>,
    detail: Option<String>,
) -> AdmissionEvent {
    AdmissionEvent {
        event_id: event_id.into(),
        class_id: class_id.into(),
        student_id: student_id.into(),
        action: action.into(),
        created_at_ms: now_ms(),
        detail,
    }
}
