//! In-memory game state for simulations, tests and benchmarks.

use anyhow::{anyhow, bail};

use crate::autoplay::{Building, GameState, Shimmer, Upgrade, Wrinkler};
use crate::core::AppResult;

/// Price growth per building bought.
const PRICE_GROWTH: f64 = 1.15;

/// Plain-vector implementation of [`GameState`].
///
/// Buying a building deducts its price and raises the next price by 15%;
/// buying an upgrade removes it from the store; a click adds one unit to the
/// balance and, if the click sound is on, counts a played sound.
#[derive(Debug, Clone)]
pub struct InMemoryGame {
    cookies: f64,
    buildings: Vec<Building>,
    owned: Vec<u32>,
    upgrades: Vec<Upgrade>,
    bought_upgrades: Vec<String>,
    shimmers: Vec<Shimmer>,
    clicked_shimmers: Vec<usize>,
    wrinklers: Vec<Wrinkler>,
    max_wrinklers: usize,
    popped_wrinklers: Vec<usize>,
    clicks: u64,
    click_sounds: u64,
    click_sound: bool,
    ascending: bool,
}

impl Default for InMemoryGame {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGame {
    /// Empty game with a zero balance and the click sound on.
    pub const fn new() -> Self {
        Self {
            cookies: 0.0,
            buildings: Vec::new(),
            owned: Vec::new(),
            upgrades: Vec::new(),
            bought_upgrades: Vec::new(),
            shimmers: Vec::new(),
            clicked_shimmers: Vec::new(),
            wrinklers: Vec::new(),
            max_wrinklers: 0,
            popped_wrinklers: Vec::new(),
            clicks: 0,
            click_sounds: 0,
            click_sound: true,
            ascending: false,
        }
    }

    /// Set the balance.
    #[must_use]
    pub fn with_cookies(mut self, cookies: f64) -> Self {
        self.cookies = cookies;
        self
    }

    /// Set the balance in place.
    pub fn set_cookies(&mut self, cookies: f64) {
        self.cookies = cookies;
    }

    /// Append an unlocked building and return its id.
    pub fn add_building(&mut self, name: impl Into<String>, price: f64, cps: f64) -> usize {
        let id = self.buildings.len();
        self.buildings.push(Building {
            id,
            name: name.into(),
            locked: false,
            price,
            cps,
        });
        self.owned.push(0);
        id
    }

    /// Lock or unlock building `id`.
    pub fn set_locked(&mut self, id: usize, locked: bool) {
        if let Some(building) = self.buildings.get_mut(id) {
            building.locked = locked;
        }
    }

    /// Put an upgrade in the store.
    pub fn add_upgrade(&mut self, upgrade: Upgrade) {
        self.upgrades.push(upgrade);
    }

    /// Spawn a bonus event and return its id.
    pub fn add_shimmer(&mut self, wrath: bool) -> usize {
        let id = self.shimmers.len() + self.clicked_shimmers.len();
        self.shimmers.push(Shimmer { id, wrath });
        id
    }

    /// Add a collectible slot and return its id.
    pub fn add_wrinkler(&mut self, close: bool) -> usize {
        let id = self.wrinklers.len();
        self.wrinklers.push(Wrinkler { id, close });
        id
    }

    /// Set the collectible cap.
    pub fn set_max_wrinklers(&mut self, max: usize) {
        self.max_wrinklers = max;
    }

    /// Start or finish a non-interruptible transition.
    pub fn set_ascending(&mut self, ascending: bool) {
        self.ascending = ascending;
    }

    /// Units owned of building `id`.
    pub fn owned(&self, id: usize) -> u32 {
        self.owned.get(id).copied().unwrap_or(0)
    }

    /// Names of upgrades bought, in purchase order.
    pub fn bought_upgrades(&self) -> &[String] {
        &self.bought_upgrades
    }

    /// Bonus events clicked, in click order.
    pub fn clicked_shimmers(&self) -> &[usize] {
        &self.clicked_shimmers
    }

    /// Collectibles popped, in pop order.
    pub fn popped_wrinklers(&self) -> &[usize] {
        &self.popped_wrinklers
    }

    /// Total clicks on the main target.
    pub const fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Clicks that played a sound.
    pub const fn click_sounds(&self) -> u64 {
        self.click_sounds
    }
}

impl GameState for InMemoryGame {
    fn cookies(&self) -> f64 {
        self.cookies
    }

    fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    fn buy_building(&mut self, id: usize, quantity: u32) -> AppResult<()> {
        let building = self
            .buildings
            .get_mut(id)
            .ok_or_else(|| anyhow!("no building {id}"))?;
        if building.locked {
            bail!("{} is locked", building.name);
        }
        for _ in 0..quantity {
            if building.price > self.cookies {
                bail!("cannot afford {} at {}", building.name, building.price);
            }
            self.cookies -= building.price;
            building.price *= PRICE_GROWTH;
            self.owned[id] += 1;
        }
        Ok(())
    }

    fn upgrades_in_store(&self) -> &[Upgrade] {
        &self.upgrades
    }

    fn buy_upgrade(&mut self, id: usize, bypass_confirmation: bool) -> AppResult<()> {
        let idx = self
            .upgrades
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| anyhow!("upgrade {id} not in store"))?;
        let upgrade = &self.upgrades[idx];
        if !upgrade.can_buy {
            bail!("cannot afford {}", upgrade.name);
        }
        if upgrade.needs_confirmation && !bypass_confirmation {
            bail!("{} is waiting for confirmation", upgrade.name);
        }
        let upgrade = self.upgrades.remove(idx);
        self.bought_upgrades.push(upgrade.name);
        Ok(())
    }

    fn shimmers(&self) -> &[Shimmer] {
        &self.shimmers
    }

    fn click_shimmer(&mut self, id: usize) -> AppResult<()> {
        let idx = self
            .shimmers
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| anyhow!("shimmer {id} is gone"))?;
        self.shimmers.remove(idx);
        self.clicked_shimmers.push(id);
        Ok(())
    }

    fn wrinklers(&self) -> &[Wrinkler] {
        &self.wrinklers
    }

    fn max_wrinklers(&self) -> usize {
        self.max_wrinklers
    }

    fn pop_random_wrinkler(&mut self) -> AppResult<Option<usize>> {
        let Some(wrinkler) = self.wrinklers.iter_mut().find(|w| w.close) else {
            return Ok(None);
        };
        wrinkler.close = false;
        self.popped_wrinklers.push(wrinkler.id);
        Ok(Some(wrinkler.id))
    }

    fn click_cookie(&mut self) -> AppResult<()> {
        self.clicks += 1;
        self.cookies += 1.0;
        if self.click_sound {
            self.click_sounds += 1;
        }
        Ok(())
    }

    fn click_sound_enabled(&self) -> bool {
        self.click_sound
    }

    fn set_click_sound(&mut self, enabled: bool) {
        self.click_sound = enabled;
    }

    fn is_ascending(&self) -> bool {
        self.ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_building_grows_price() {
        let mut game = InMemoryGame::new().with_cookies(100.0);
        let cursor = game.add_building("Cursor", 15.0, 0.1);
        game.buy_building(cursor, 1).unwrap();
        assert_eq!(game.owned(cursor), 1);
        assert!((game.cookies() - 85.0).abs() < 1e-9);
        assert!((game.buildings()[cursor].price - 17.25).abs() < 1e-9);
    }

    #[test]
    fn test_buy_building_rejects_unaffordable() {
        let mut game = InMemoryGame::new().with_cookies(10.0);
        let cursor = game.add_building("Cursor", 15.0, 0.1);
        assert!(game.buy_building(cursor, 1).is_err());
        assert_eq!(game.owned(cursor), 0);
    }

    #[test]
    fn test_pop_first_close_wrinkler() {
        let mut game = InMemoryGame::new();
        game.add_wrinkler(false);
        let close = game.add_wrinkler(true);
        assert_eq!(game.pop_random_wrinkler().unwrap(), Some(close));
        assert_eq!(game.pop_random_wrinkler().unwrap(), None);
        assert_eq!(game.popped_wrinklers(), &[close]);
    }
}
