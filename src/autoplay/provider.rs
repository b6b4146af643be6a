//! State & command surface the autoplayer strategies read from and act on.
//!
//! The scheduler core never sees this trait; it only hands the host's state
//! to each strategy. Hosts wrap their live game in an implementation.

use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// A purchasable building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Position in the store.
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Not yet available for purchase.
    pub locked: bool,
    /// Price of the next unit.
    pub price: f64,
    /// Production per second one more unit would add.
    pub cps: f64,
}

impl Building {
    /// Production gained per unit of currency spent.
    pub fn efficiency(&self) -> f64 {
        self.cps / self.price
    }
}

/// Category of a store upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    /// Plain upgrade.
    Regular,
    /// Flavor upgrade.
    Cookie,
    /// Research upgrade; some trigger irreversible events.
    Tech,
    /// Toggle-like switch that can be flipped back and forth.
    Toggle,
    /// Anything the autoplayer never buys.
    Other(String),
}

/// An upgrade currently offered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    /// Store identifier.
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Category.
    pub kind: UpgradeKind,
    /// Affordable right now.
    pub can_buy: bool,
    /// Buying opens a confirmation prompt unless bypassed.
    pub needs_confirmation: bool,
}

/// A transient, time-limited bonus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shimmer {
    /// Event identifier.
    pub id: usize,
    /// Harmful variant the autoplayer leaves alone.
    pub wrath: bool,
}

/// A maturing collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrinkler {
    /// Slot identifier.
    pub id: usize,
    /// Attached and maturing.
    pub close: bool,
}

/// Read/command interface over the host game.
pub trait GameState {
    /// Current resource balance.
    fn cookies(&self) -> f64;

    /// Buildings in store order.
    fn buildings(&self) -> &[Building];

    /// Buy `quantity` units of building `id`.
    ///
    /// # Errors
    ///
    /// Fails if the host rejects the purchase.
    fn buy_building(&mut self, id: usize, quantity: u32) -> AppResult<()>;

    /// Upgrades currently in the store, in store order.
    fn upgrades_in_store(&self) -> &[Upgrade];

    /// Buy upgrade `id`, skipping its confirmation prompt if
    /// `bypass_confirmation` is set.
    ///
    /// # Errors
    ///
    /// Fails if the host rejects the purchase.
    fn buy_upgrade(&mut self, id: usize, bypass_confirmation: bool) -> AppResult<()>;

    /// Bonus events on screen.
    fn shimmers(&self) -> &[Shimmer];

    /// Activate bonus event `id`.
    ///
    /// # Errors
    ///
    /// Fails if the event vanished or the host rejects the click.
    fn click_shimmer(&mut self, id: usize) -> AppResult<()>;

    /// Collectible slots.
    fn wrinklers(&self) -> &[Wrinkler];

    /// Current collectible cap.
    fn max_wrinklers(&self) -> usize;

    /// Pop one attached collectible chosen by the host. Returns the popped
    /// slot, or `None` if nothing was attached.
    ///
    /// # Errors
    ///
    /// Fails if the host rejects the command.
    fn pop_random_wrinkler(&mut self) -> AppResult<Option<usize>>;

    /// Click the main target once.
    ///
    /// # Errors
    ///
    /// Fails if the host rejects the click.
    fn click_cookie(&mut self) -> AppResult<()>;

    /// Whether clicks currently play a sound.
    fn click_sound_enabled(&self) -> bool;

    /// Enable or disable the click sound.
    fn set_click_sound(&mut self, enabled: bool);

    /// A non-interruptible transition is in progress; no action may run.
    fn is_ascending(&self) -> bool;
}
