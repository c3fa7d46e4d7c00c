//! Tests for audit sinks

use class_admission::core::{
    build_admission_event, AuditSink, InMemoryAuditSink, PostgresAuditSink,
};

#[test]
fn test_build_admission_event() {
    let event = build_admission_event(
        "evt-1",
        "class-1",
        "student-1",
        "admit",
        Some("seat 1/6".to_string()),
    );
    assert_eq!(event.event_id, "evt-1");
    assert_eq!(event.class_id, "class-1");
    assert_eq!(event.student_id, "student-1");
    assert_eq!(event.action, "admit");
    assert_eq!(event.detail.as_deref(), Some("seat 1/6"));
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_in_memory_sink_bounds_its_buffer() {
    let mut sink = InMemoryAuditSink::new(3);
    for i in 0..5 {
        sink.record(build_admission_event(
            format!("evt-{i}"),
            "class-1",
            "student-1",
            "admit",
            None,
        ));
    }
    let events = sink.events();
    assert_eq!(events.len(), 3);
    // Oldest events are evicted first.
    assert_eq!(events[0].event_id, "evt-2");
    assert_eq!(events[2].event_id, "evt-4");
}

#[test]
fn test_postgres_sink_migrations() {
    let migrations = PostgresAuditSink::migrations();
    assert!(!migrations.is_empty());
    assert!(migrations[0].contains("CREATE TABLE IF NOT EXISTS ca_audit_events"));
}

#[test]
fn test_postgres_sink_record_is_a_noop() {
    let mut sink = PostgresAuditSink;
    sink.record(build_admission_event("e", "c", "s", "drop", None));
}
