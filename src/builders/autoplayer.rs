//! Assemble the autoplayer's action set from configuration.

use crate::autoplay::names::{
    BUY_BUILDINGS, BUY_POOL, BUY_UPGRADES, CLICK_COOKIE, CLICK_SHIMMERS, FLIP_SWITCHES,
    POP_WRINKLERS,
};
use crate::autoplay::{
    intervals, BuyBuildings, BuyUpgrades, ClickCookie, ClickShimmers, FlipSwitches, GameState,
    PopWrinklers, SwitchTable,
};
use crate::builders::SchedulerBuilder;
use crate::config::StrategyOptions;
use crate::core::{Action, ActionScheduler, SchedulerError};

/// Builder pre-loaded with the autoplayer's actions, in evaluation order.
///
/// Purchases share the `buy` pool, so at most one purchase lands per tick
/// and switches get first refusal, then upgrades, then buildings.
///
/// # Errors
///
/// Returns [`SchedulerError::UnknownSwitch`] for a switch name with no known
/// predicate and [`SchedulerError::InvalidConfig`] for other bad options.
pub fn autoplayer_builder<G>(options: &StrategyOptions) -> Result<SchedulerBuilder<G>, SchedulerError>
where
    G: GameState + 'static,
{
    let table = SwitchTable::from_names(&options.switches)?;
    options.validate().map_err(SchedulerError::InvalidConfig)?;

    Ok(SchedulerBuilder::new()
        .action(Action::new(CLICK_COOKIE, intervals::CLICK_COOKIE_MS, ClickCookie))
        .action(Action::new(CLICK_SHIMMERS, intervals::CLICK_SHIMMERS_MS, ClickShimmers))
        .action(Action::new(POP_WRINKLERS, intervals::POP_WRINKLERS_MS, PopWrinklers))
        .action(
            Action::new(
                FLIP_SWITCHES,
                intervals::FLIP_SWITCHES_MS,
                FlipSwitches::new(table, options.clone()),
            )
            .in_pool(BUY_POOL),
        )
        .action(
            Action::new(BUY_UPGRADES, intervals::BUY_UPGRADES_MS, BuyUpgrades::new(options.clone()))
                .in_pool(BUY_POOL),
        )
        .action(
            Action::new(BUY_BUILDINGS, intervals::BUY_BUILDINGS_MS, BuyBuildings::new(options.clone()))
                .in_pool(BUY_POOL),
        )
        .suppress_when(|game: &G| game.is_ascending()))
}

/// Build a ready-to-run autoplayer scheduler.
///
/// # Errors
///
/// See [`autoplayer_builder`].
pub fn build_autoplayer<G>(options: &StrategyOptions) -> Result<ActionScheduler<G>, SchedulerError>
where
    G: GameState + 'static,
{
    autoplayer_builder(options)?.build()
}
