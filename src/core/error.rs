//! Error types for scheduler operations.

use thiserror::Error;

/// Errors produced while assembling or driving a scheduler.
///
/// Strategy faults never appear here. They are contained inside a pass
/// and surface only through logging, audit events and the pass report.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Two actions were registered under the same name.
    #[error("duplicate action: {0}")]
    DuplicateAction(String),
    /// A toggle switch name has no known predicate.
    #[error("unknown switch: {0}")]
    UnknownSwitch(String),
    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The tick driver could not reach an async runtime.
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
