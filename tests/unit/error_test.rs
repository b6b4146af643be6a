//! Tests for error types

use action_scheduler::core::SchedulerError;

#[test]
fn test_duplicate_action_error() {
    let err = SchedulerError::DuplicateAction("buyUpgrades".to_string());
    assert_eq!(format!("{}", err), "duplicate action: buyUpgrades");
}

#[test]
fn test_unknown_switch_error() {
    let err = SchedulerError::UnknownSwitch("Golden switch".to_string());
    assert_eq!(format!("{}", err), "unknown switch: Golden switch");
}

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("tick_interval_ms must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: tick_interval_ms must be greater than 0"
    );
}

#[test]
fn test_runtime_error() {
    let err = SchedulerError::Runtime("no reactor running".to_string());
    assert_eq!(format!("{}", err), "runtime error: no reactor running");
}
