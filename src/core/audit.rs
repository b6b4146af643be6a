//! Audit sink implementations.
//!
//! Every attempt made by a pass produces one [`AuditEvent`]. The in-memory
//! sink keeps a bounded window of recent events for inspection and tests.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use serde::{Deserialize, Serialize};

use crate::util::clock::Millis;

/// How an attempted action ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// The strategy acted; its pool is claimed for the tick.
    Succeeded,
    /// The strategy ran and decided not to act.
    Declined,
    /// The strategy returned an error or panicked.
    Faulted {
        /// Fault detail.
        reason: String,
    },
}

impl AttemptOutcome {
    /// Short label used in logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Declined => "declined",
            Self::Faulted { .. } => "faulted",
        }
    }
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Action name.
    pub action: String,
    /// Pool the action belongs to.
    pub pool: String,
    /// Outcome of the attempt.
    pub outcome: AttemptOutcome,
    /// Attempt timestamp in milliseconds.
    pub created_at_ms: Millis,
    /// Serialized strategy payload, if any.
    pub payload: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Stored events for one action, oldest first.
    pub fn events_for(&self, action: &str) -> Vec<AuditEvent> {
        self.events
            .iter()
            .filter(|e| e.action == action)
            .cloned()
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Shared sink: the scheduler records through one handle while the host
/// reads through another.
impl<T: AuditSink> AuditSink for Arc<Mutex<T>> {
    fn record(&mut self, event: AuditEvent) {
        self.lock().record(event);
    }
}

/// Sink that forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent) {
        tracing::debug!(
            event_id = %event.event_id,
            action = %event.action,
            pool = %event.pool,
            outcome = event.outcome.label(),
            at_ms = event.created_at_ms,
            "action attempt"
        );
    }
}

/// Helper to build an audit event with a fresh identifier.
pub fn build_audit_event(
    action: impl Into<String>,
    pool: impl Into<String>,
    outcome: AttemptOutcome,
    created_at_ms: Millis,
    payload: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        action: action.into(),
        pool: pool.into(),
        outcome,
        created_at_ms,
        payload,
    }
}
