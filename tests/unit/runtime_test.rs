//! Tests for the runner and status models

use action_scheduler::core::{Action, ActionResult};
use action_scheduler::builders::SchedulerBuilder;
use action_scheduler::runtime::{health, snapshot, Runner};
use action_scheduler::util::ManualClock;

fn counting_runner(clock: ManualClock) -> Runner<u32> {
    let scheduler = SchedulerBuilder::new()
        .action(Action::from_fn("count", 100, |n: &mut u32| {
            *n += 1;
            Ok(ActionResult::acted())
        }))
        .action(
            Action::from_fn("never", 0, |_: &mut u32| Ok(ActionResult::declined())).in_pool("shared"),
        )
        .build()
        .unwrap();
    Runner::with_clock(scheduler, 0, clock)
}

#[test]
fn test_runner_reads_its_clock() {
    let clock = ManualClock::new(1_000);
    let mut runner = counting_runner(clock.clone());

    assert!(runner.last_report().is_none());
    assert_eq!(runner.tick().at_ms, 1_000);
    assert_eq!(*runner.state(), 1);

    clock.advance(50);
    assert!(!runner.tick().attempted("count"));
    clock.advance(50);
    assert!(runner.tick().attempted("count"));
    assert_eq!(*runner.state(), 2);
    assert_eq!(runner.last_report().unwrap().tick, 3);
}

#[test]
fn test_runner_state_access() {
    let mut runner = counting_runner(ManualClock::new(0));
    *runner.state_mut() = 40;
    runner.tick();
    assert_eq!(runner.scheduler().current_tick(), 1);
    assert_eq!(runner.into_state(), 41);
}

#[test]
fn test_snapshot_reflects_scheduler() {
    let clock = ManualClock::new(500);
    let mut runner = counting_runner(clock);
    runner.tick();

    let snap = snapshot(runner.scheduler());
    assert_eq!(snap.tick, 1);
    assert_eq!(snap.actions.len(), 2);
    assert_eq!(snap.actions[0].name, "count");
    assert_eq!(snap.actions[0].last_attempt_at, Some(500));
    assert_eq!(snap.actions[1].pool, "shared");

    let count_pool = snap.pools.iter().find(|p| p.id == "count").unwrap();
    assert_eq!(count_pool.last_success_at, Some(500));
    let shared_pool = snap.pools.iter().find(|p| p.id == "shared").unwrap();
    assert_eq!(shared_pool.last_success_at, None);

    assert_eq!(snap.stats.attempts, 2);
    assert_eq!(snap.stats.successes, 1);
    assert_eq!(snap.stats.declines, 1);
}

#[test]
fn test_snapshot_serializes() {
    let runner = counting_runner(ManualClock::new(0));
    let json = serde_json::to_value(snapshot(runner.scheduler())).unwrap();
    assert_eq!(json["tick"], 0);
    assert_eq!(json["actions"][0]["interval_ms"], 100);
}

#[test]
fn test_health() {
    let h = health(true);
    assert!(h.ok);
    assert!(h.running);
    assert!(!health(false).running);
}
