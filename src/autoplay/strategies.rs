//! The autoplayer's strategies.
//!
//! Each strategy is a small, non-blocking decision over [`GameState`]. They
//! know nothing about intervals or pools; the builder attaches those.

use tracing::{debug, info};

use super::provider::{Building, GameState, Upgrade, UpgradeKind};
use super::sound::with_click_sound_muted;
use super::switches::SwitchTable;
use crate::config::StrategyOptions;
use crate::core::{ActionResult, Strategy, StrategyResult};

/// Research upgrades in purchase order. An upgrade's index is its tier;
/// `research_level_max` caps which tiers are bought.
pub const RESEARCH_TIERS: [&str; 11] = [
    "Bingo center/Research facility",
    "Specialized chocolate chips",
    "Designer cocoa beans",
    "Ritual rolling pins",
    "Underworld ovens",
    "One mind",
    "Exotic nuts",
    "Communal brainsweep",
    "Arcane sugar",
    "Elder Pact",
    "Sacrificial rolling pins",
];

/// Tier of a research upgrade, if it is one the autoplayer knows.
pub fn research_tier(name: &str) -> Option<usize> {
    RESEARCH_TIERS.iter().position(|tier| *tier == name)
}

/// Click the main target with the click sound muted. Always acts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickCookie;

impl<G: GameState> Strategy<G> for ClickCookie {
    fn run(&self, game: &mut G) -> StrategyResult {
        with_click_sound_muted(game, |g| g.click_cookie())?;
        Ok(ActionResult::acted())
    }
}

/// Activate every bonus event except the wrath variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickShimmers;

impl<G: GameState> Strategy<G> for ClickShimmers {
    fn run(&self, game: &mut G) -> StrategyResult {
        let ids: Vec<usize> = game
            .shimmers()
            .iter()
            .filter(|s| !s.wrath)
            .map(|s| s.id)
            .collect();
        if ids.is_empty() {
            return Ok(ActionResult::declined());
        }
        for id in &ids {
            game.click_shimmer(*id)?;
        }
        debug!(count = ids.len(), "clicked shimmers");
        Ok(ActionResult::acted_with(ids.len()))
    }
}

/// Pop a collectible only once the cap is reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopWrinklers;

impl<G: GameState> Strategy<G> for PopWrinklers {
    fn run(&self, game: &mut G) -> StrategyResult {
        let max = game.max_wrinklers();
        let attached = game.wrinklers().iter().filter(|w| w.close).count();
        if max == 0 || attached < max {
            return Ok(ActionResult::declined());
        }
        match game.pop_random_wrinkler()? {
            Some(slot) => {
                info!(slot, "popped wrinkler");
                Ok(ActionResult::acted_with(slot))
            }
            None => Ok(ActionResult::declined()),
        }
    }
}

/// Flip the first affordable toggle whose switch predicate holds.
#[derive(Debug, Clone)]
pub struct FlipSwitches {
    table: SwitchTable,
    options: StrategyOptions,
}

impl FlipSwitches {
    /// Flip switches from `table` according to `options`.
    pub const fn new(table: SwitchTable, options: StrategyOptions) -> Self {
        Self { table, options }
    }
}

impl<G: GameState> Strategy<G> for FlipSwitches {
    fn run(&self, game: &mut G) -> StrategyResult {
        debug!("checking switches");
        let view: &G = game;
        let found = view.upgrades_in_store().iter().find_map(|upgrade| {
            if upgrade.kind != UpgradeKind::Toggle || !upgrade.can_buy {
                return None;
            }
            let switch = self.table.lookup(&upgrade.name)?;
            switch
                .should_flip(&self.options, view)
                .then_some((upgrade.id, switch))
        });
        let Some((id, switch)) = found else {
            return Ok(ActionResult::declined());
        };
        info!(%switch, "flipping switch");
        game.buy_upgrade(id, false)?;
        Ok(ActionResult::acted_with(switch.name()))
    }
}

/// Buy the first upgrade that is safe to auto-buy.
///
/// Regular and cookie upgrades are always allowed. Research upgrades are
/// allowed up to `research_level_max`, and are bought with the confirmation
/// prompt bypassed.
#[derive(Debug, Clone)]
pub struct BuyUpgrades {
    options: StrategyOptions,
}

impl BuyUpgrades {
    /// Buy upgrades according to `options`.
    pub const fn new(options: StrategyOptions) -> Self {
        Self { options }
    }

    fn allows(&self, upgrade: &Upgrade) -> bool {
        match upgrade.kind {
            UpgradeKind::Regular | UpgradeKind::Cookie => true,
            UpgradeKind::Tech => research_tier(&upgrade.name)
                .is_some_and(|tier| tier <= self.options.research_level_max),
            UpgradeKind::Toggle | UpgradeKind::Other(_) => false,
        }
    }
}

impl<G: GameState> Strategy<G> for BuyUpgrades {
    fn run(&self, game: &mut G) -> StrategyResult {
        if !self.options.buy_upgrades {
            return Ok(ActionResult::declined());
        }
        let Some(upgrade) = game.upgrades_in_store().iter().find(|u| self.allows(u)) else {
            return Ok(ActionResult::declined());
        };
        if !upgrade.can_buy {
            return Ok(ActionResult::declined());
        }
        let id = upgrade.id;
        let name = upgrade.name.clone();
        let bypass = upgrade.kind == UpgradeKind::Tech && upgrade.needs_confirmation;
        info!(upgrade = %name, bypass, "buying upgrade");
        game.buy_upgrade(id, bypass)?;
        Ok(ActionResult::acted_with(name))
    }
}

/// Buy one unit of the most cost-effective unlocked building, if affordable.
#[derive(Debug, Clone)]
pub struct BuyBuildings {
    options: StrategyOptions,
}

impl BuyBuildings {
    /// Buy buildings according to `options`.
    pub const fn new(options: StrategyOptions) -> Self {
        Self { options }
    }
}

/// Most cost-effective unlocked building. Ties go to the later building and
/// buildings with no positive efficiency are never picked.
pub fn best_building(buildings: &[Building]) -> Option<&Building> {
    let mut best: Option<&Building> = None;
    for building in buildings.iter().rev().filter(|b| !b.locked) {
        let bar = best.map_or(0.0, Building::efficiency);
        if building.efficiency() > bar {
            best = Some(building);
        }
    }
    best
}

impl<G: GameState> Strategy<G> for BuyBuildings {
    fn run(&self, game: &mut G) -> StrategyResult {
        if !self.options.buy_buildings {
            return Ok(ActionResult::declined());
        }
        let cookies = game.cookies();
        let Some(building) = best_building(game.buildings()) else {
            return Ok(ActionResult::declined());
        };
        if building.price >= cookies {
            return Ok(ActionResult::declined());
        }
        let id = building.id;
        let name = building.name.clone();
        info!(building = %name, price = building.price, "buying building");
        game.buy_building(id, 1)?;
        Ok(ActionResult::acted_with(name))
    }
}
