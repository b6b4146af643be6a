//! Tests for scheduler builders

use action_scheduler::autoplay::names;
use action_scheduler::builders::{autoplayer_builder, build_autoplayer, SchedulerBuilder};
use action_scheduler::config::StrategyOptions;
use action_scheduler::core::{Action, ActionResult, SchedulerError};
use action_scheduler::infra::InMemoryGame;

fn noop(name: &str) -> Action<u32> {
    Action::from_fn(name, 0, |_: &mut u32| Ok(ActionResult::declined()))
}

#[test]
fn test_builder_preserves_order() {
    let builder = SchedulerBuilder::new().action(noop("a")).action(noop("b")).action(noop("c"));
    assert_eq!(builder.names(), vec!["a", "b", "c"]);

    let scheduler = builder.build().unwrap();
    let names: Vec<&str> = scheduler.actions().iter().map(Action::name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_builder_rejects_duplicates() {
    let result = SchedulerBuilder::new()
        .action(noop("buyUpgrades"))
        .action(noop("buyBuildings"))
        .action(noop("buyUpgrades"))
        .build();

    match result {
        Err(SchedulerError::DuplicateAction(name)) => assert_eq!(name, "buyUpgrades"),
        other => panic!("expected duplicate error, got {:?}", other.map(|s| s.actions().len())),
    }
}

#[test]
fn test_builder_attaches_suppression() {
    let mut scheduler = SchedulerBuilder::new()
        .action(noop("a"))
        .suppress_when(|n: &u32| *n > 0)
        .build()
        .unwrap();

    let mut state = 0;
    assert!(!scheduler.run_pass(&mut state, 0).suppressed);
    state = 1;
    assert!(scheduler.run_pass(&mut state, 1).suppressed);
}

#[test]
fn test_autoplayer_registers_six_actions() {
    let scheduler = build_autoplayer::<InMemoryGame>(&StrategyOptions::default()).unwrap();
    let registered: Vec<(&str, u64, &str)> = scheduler
        .actions()
        .iter()
        .map(|a| (a.name(), a.interval_ms(), a.pool_id()))
        .collect();

    assert_eq!(
        registered,
        vec![
            (names::CLICK_COOKIE, 20, names::CLICK_COOKIE),
            (names::CLICK_SHIMMERS, 100, names::CLICK_SHIMMERS),
            (names::POP_WRINKLERS, 10_000, names::POP_WRINKLERS),
            (names::FLIP_SWITCHES, 10_000, names::BUY_POOL),
            (names::BUY_UPGRADES, 100, names::BUY_POOL),
            (names::BUY_BUILDINGS, 100, names::BUY_POOL),
        ]
    );
}

#[test]
fn test_autoplayer_builder_accepts_extra_actions() {
    let scheduler = autoplayer_builder::<InMemoryGame>(&StrategyOptions::default())
        .unwrap()
        .action(Action::from_fn("idle", 1_000, |_: &mut InMemoryGame| {
            Ok(ActionResult::declined())
        }))
        .build()
        .unwrap();
    assert_eq!(scheduler.actions().len(), 7);
}

#[test]
fn test_autoplayer_rejects_unknown_switch() {
    let options = StrategyOptions {
        switches: vec!["Golden switch".to_string()],
        ..StrategyOptions::default()
    };
    let err = build_autoplayer::<InMemoryGame>(&options).err().unwrap();
    assert!(matches!(err, SchedulerError::UnknownSwitch(name) if name == "Golden switch"));
}

#[test]
fn test_autoplayer_rejects_bad_research_level() {
    let options = StrategyOptions {
        research_level_max: 99,
        ..StrategyOptions::default()
    };
    let err = build_autoplayer::<InMemoryGame>(&options).err().unwrap();
    assert!(matches!(err, SchedulerError::InvalidConfig(_)));
}
