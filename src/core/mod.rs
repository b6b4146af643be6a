//! Core scheduling abstractions: actions, pools, gating and the evaluation pass.

pub mod action;
pub mod audit;
pub mod error;
pub mod gate;
pub mod pool;
pub mod scheduler;

pub use action::{Action, ActionResult, Strategy, StrategyResult};
pub use audit::{
    build_audit_event, AttemptOutcome, AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink,
};
pub use error::{AppResult, SchedulerError};
pub use gate::{check_interval, GateDecision};
pub use pool::{ActionPool, PoolHandle, PoolRegistry};
pub use scheduler::{ActionScheduler, AttemptRecord, PassReport, SchedulerStats, SuppressionFn};
