//! Idle-game autoplayer built on the action scheduler.
//!
//! This module is one concrete strategy set for the scheduler: it clicks,
//! collects bonuses and spends the balance through the [`GameState`]
//! interface. Build a ready-to-run scheduler with
//! [`crate::builders::build_autoplayer`].

pub mod provider;
pub mod sound;
pub mod strategies;
pub mod switches;

pub use provider::{Building, GameState, Shimmer, Upgrade, UpgradeKind, Wrinkler};
pub use sound::{with_click_sound_muted, MutedClickSound};
pub use strategies::{
    best_building, research_tier, BuyBuildings, BuyUpgrades, ClickCookie, ClickShimmers,
    FlipSwitches, PopWrinklers, RESEARCH_TIERS,
};
pub use switches::{Switch, SwitchTable};

/// Action names registered by the autoplayer, in evaluation order.
pub mod names {
    /// Click the main target.
    pub const CLICK_COOKIE: &str = "clickCookie";
    /// Activate bonus events.
    pub const CLICK_SHIMMERS: &str = "clickShimmers";
    /// Pop collectibles at the cap.
    pub const POP_WRINKLERS: &str = "popWrinklers";
    /// Flip toggle switches.
    pub const FLIP_SWITCHES: &str = "flipSwitches";
    /// Buy store upgrades.
    pub const BUY_UPGRADES: &str = "buyUpgrades";
    /// Buy buildings.
    pub const BUY_BUILDINGS: &str = "buyBuildings";
    /// Pool shared by every purchasing action.
    pub const BUY_POOL: &str = "buy";
}

/// Attempt intervals in milliseconds.
pub mod intervals {
    /// 50 clicks per second, the host's own click rate limit.
    pub const CLICK_COOKIE_MS: u64 = 1000 / 50;
    /// Ten checks per second.
    pub const CLICK_SHIMMERS_MS: u64 = 100;
    /// Every ten seconds.
    pub const POP_WRINKLERS_MS: u64 = 10_000;
    /// Every ten seconds.
    pub const FLIP_SWITCHES_MS: u64 = 10_000;
    /// Ten checks per second.
    pub const BUY_UPGRADES_MS: u64 = 100;
    /// Ten checks per second.
    pub const BUY_BUILDINGS_MS: u64 = 100;
}
