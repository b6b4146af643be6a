//! Tests for audit sink

use std::sync::Arc;

use action_scheduler::core::{
    build_audit_event, AttemptOutcome, AuditSink, InMemoryAuditSink, TracingAuditSink,
};
use parking_lot::Mutex;

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(
        "buyUpgrades",
        "buy",
        AttemptOutcome::Succeeded,
        1_000,
        Some("\"Kitten helpers\"".to_string()),
    );

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0], event);
    assert_eq!(events[0].action, "buyUpgrades");
    assert_eq!(events[0].pool, "buy");
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("a", "a", AttemptOutcome::Succeeded, 1, None));
    sink.record(build_audit_event("b", "b", AttemptOutcome::Declined, 2, None));
    sink.record(build_audit_event("c", "c", AttemptOutcome::Succeeded, 3, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, "b"); // First one popped
    assert_eq!(events[1].action, "c");
}

#[test]
fn test_zero_capacity_sink_keeps_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event("a", "a", AttemptOutcome::Succeeded, 1, None));
    assert!(sink.events().is_empty());
}

#[test]
fn test_events_for_filters_by_action() {
    let mut sink = InMemoryAuditSink::new(10);
    sink.record(build_audit_event("a", "buy", AttemptOutcome::Declined, 1, None));
    sink.record(build_audit_event("b", "buy", AttemptOutcome::Succeeded, 1, None));
    sink.record(build_audit_event(
        "a",
        "buy",
        AttemptOutcome::Faulted {
            reason: "boom".to_string(),
        },
        2,
        None,
    ));

    let events = sink.events_for("a");
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].outcome.label(), "faulted");
}

#[test]
fn test_build_audit_event_ids_are_unique() {
    let first = build_audit_event("a", "a", AttemptOutcome::Succeeded, 5, None);
    let second = build_audit_event("a", "a", AttemptOutcome::Succeeded, 5, None);
    assert_ne!(first.event_id, second.event_id);
    assert_eq!(first.created_at_ms, 5);
}

#[test]
fn test_shared_sink_records_through_clone() {
    let shared = Arc::new(Mutex::new(InMemoryAuditSink::new(4)));
    let mut handle = Arc::clone(&shared);
    handle.record(build_audit_event("a", "a", AttemptOutcome::Declined, 1, None));
    assert_eq!(shared.lock().events().len(), 1);
}

#[test]
fn test_tracing_sink_accepts_events() {
    let mut sink = TracingAuditSink;
    sink.record(build_audit_event("a", "a", AttemptOutcome::Declined, 1, None));
}

#[test]
fn test_outcome_serializes_tagged() {
    let json = serde_json::to_value(AttemptOutcome::Faulted {
        reason: "boom".to_string(),
    })
    .unwrap();
    assert_eq!(json, serde_json::json!({"type": "faulted", "reason": "boom"}));
}
