//! Tests for clocks and telemetry

use std::thread;

use action_scheduler::util::{init_tracing, now_ms, Clock, ManualClock, SystemClock};

#[test]
fn test_manual_clock_advance_and_set() {
    let clock = ManualClock::new(1_000);
    assert_eq!(clock.now_ms(), 1_000);
    assert_eq!(clock.advance(250), 1_250);
    assert_eq!(clock.now_ms(), 1_250);

    clock.set(500);
    assert_eq!(clock.now_ms(), 500);
}

#[test]
fn test_manual_clock_clones_share_time() {
    let clock = ManualClock::new(0);
    let other = clock.clone();
    let handle = thread::spawn(move || {
        other.advance(40);
    });
    handle.join().unwrap();
    assert_eq!(clock.now_ms(), 40);
}

#[test]
fn test_system_clock_tracks_wall_time() {
    let before = now_ms();
    let reading = SystemClock.now_ms();
    let after = now_ms();
    assert!(before <= reading && reading <= after);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialized");
}
