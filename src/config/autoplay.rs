//! Autoplayer configuration: tick cadence plus the options strategies read.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::autoplay::{Switch, RESEARCH_TIERS};

/// Options consumed by the strategies. The scheduler core ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyOptions {
    /// Keep the elders calm by flipping the pledge/covenant switches.
    pub appease_elders: bool,
    /// Highest research tier bought automatically (index into the research
    /// tier list).
    pub research_level_max: usize,
    /// Automatically buy store upgrades.
    pub buy_upgrades: bool,
    /// Automatically buy buildings.
    pub buy_buildings: bool,
    /// Toggle switches the autoplayer may flip, by store name.
    pub switches: Vec<String>,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            appease_elders: true,
            research_level_max: 4,
            buy_upgrades: true,
            buy_buildings: true,
            switches: Switch::ALL.iter().map(|s| s.name().to_owned()).collect(),
        }
    }
}

impl StrategyOptions {
    /// Validate option values.
    pub fn validate(&self) -> Result<(), String> {
        if self.research_level_max >= RESEARCH_TIERS.len() {
            return Err(format!(
                "research_level_max must be below {}",
                RESEARCH_TIERS.len()
            ));
        }
        for name in &self.switches {
            Switch::from_str(name).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

/// Root autoplayer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    /// Milliseconds between evaluation passes.
    pub tick_interval_ms: u64,
    /// Strategy options.
    pub strategies: StrategyOptions,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1,
            strategies: StrategyOptions::default(),
        }
    }
}

impl AutoplayConfig {
    /// Validate the cadence and all strategy options.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be greater than 0".into());
        }
        self.strategies
            .validate()
            .map_err(|e| format!("strategies invalid: {e}"))
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from `AUTOPLAY_*` environment variables, reading a
    /// `.env` file first if present. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Recognized keys: `AUTOPLAY_TICK_MS`, `AUTOPLAY_APPEASE_ELDERS`,
    /// `AUTOPLAY_RESEARCH_LEVEL_MAX`, `AUTOPLAY_BUY_UPGRADES`,
    /// `AUTOPLAY_BUY_BUILDINGS` and `AUTOPLAY_SWITCHES` (comma separated).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup("AUTOPLAY_TICK_MS") {
            cfg.tick_interval_ms = parse_var("AUTOPLAY_TICK_MS", &v)?;
        }
        if let Some(v) = lookup("AUTOPLAY_APPEASE_ELDERS") {
            cfg.strategies.appease_elders = parse_var("AUTOPLAY_APPEASE_ELDERS", &v)?;
        }
        if let Some(v) = lookup("AUTOPLAY_RESEARCH_LEVEL_MAX") {
            cfg.strategies.research_level_max = parse_var("AUTOPLAY_RESEARCH_LEVEL_MAX", &v)?;
        }
        if let Some(v) = lookup("AUTOPLAY_BUY_UPGRADES") {
            cfg.strategies.buy_upgrades = parse_var("AUTOPLAY_BUY_UPGRADES", &v)?;
        }
        if let Some(v) = lookup("AUTOPLAY_BUY_BUILDINGS") {
            cfg.strategies.buy_buildings = parse_var("AUTOPLAY_BUY_BUILDINGS", &v)?;
        }
        if let Some(v) = lookup("AUTOPLAY_SWITCHES") {
            cfg.strategies.switches = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| format!("{key}={value:?}: {e}"))
}
