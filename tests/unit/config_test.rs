//! Tests for configuration

use std::collections::HashMap;

use action_scheduler::config::{AutoplayConfig, StrategyOptions};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_config_is_valid() {
    let cfg = AutoplayConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.tick_interval_ms, 1);
    assert!(cfg.strategies.appease_elders);
    assert_eq!(cfg.strategies.research_level_max, 4);
    assert_eq!(cfg.strategies.switches.len(), 3);
}

#[test]
fn test_config_from_json() {
    let json = r#"
    {
        "tick_interval_ms": 5,
        "strategies": {
            "appease_elders": false,
            "research_level_max": 2,
            "switches": ["Revoke Elder Covenant"]
        }
    }
    "#;

    let cfg = AutoplayConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.tick_interval_ms, 5);
    assert!(!cfg.strategies.appease_elders);
    assert_eq!(cfg.strategies.research_level_max, 2);
    assert!(cfg.strategies.buy_upgrades); // defaulted
    assert_eq!(cfg.strategies.switches, vec!["Revoke Elder Covenant"]);
}

#[test]
fn test_config_validation_zero_tick() {
    let mut cfg = AutoplayConfig::default();
    cfg.tick_interval_ms = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_validation_research_level() {
    let options = StrategyOptions {
        research_level_max: 11,
        ..StrategyOptions::default()
    };
    let err = options.validate().unwrap_err();
    assert!(err.contains("research_level_max"));

    let options = StrategyOptions {
        research_level_max: 10,
        ..StrategyOptions::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_config_validation_unknown_switch() {
    let json = r#"{ "strategies": { "switches": ["Golden switch"] } }"#;
    let err = AutoplayConfig::from_json_str(json).unwrap_err();
    assert!(err.contains("Golden switch"));
}

#[test]
fn test_config_parse_error() {
    let err = AutoplayConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_config_from_lookup_overrides() {
    let cfg = AutoplayConfig::from_lookup(lookup(&[
        ("AUTOPLAY_TICK_MS", "10"),
        ("AUTOPLAY_APPEASE_ELDERS", "false"),
        ("AUTOPLAY_RESEARCH_LEVEL_MAX", " 3 "),
        ("AUTOPLAY_BUY_BUILDINGS", "false"),
        ("AUTOPLAY_SWITCHES", "Elder Pledge, ,Elder Covenant"),
    ]))
    .unwrap();

    assert_eq!(cfg.tick_interval_ms, 10);
    assert!(!cfg.strategies.appease_elders);
    assert_eq!(cfg.strategies.research_level_max, 3);
    assert!(cfg.strategies.buy_upgrades);
    assert!(!cfg.strategies.buy_buildings);
    assert_eq!(
        cfg.strategies.switches,
        vec!["Elder Pledge".to_string(), "Elder Covenant".to_string()]
    );
}

#[test]
fn test_config_from_lookup_empty_is_default() {
    let cfg = AutoplayConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, AutoplayConfig::default());
}

#[test]
fn test_config_from_lookup_bad_value() {
    let err = AutoplayConfig::from_lookup(lookup(&[("AUTOPLAY_TICK_MS", "fast")])).unwrap_err();
    assert!(err.contains("AUTOPLAY_TICK_MS"));

    let err = AutoplayConfig::from_lookup(lookup(&[("AUTOPLAY_TICK_MS", "0")])).unwrap_err();
    assert!(err.contains("greater than 0"));
}
