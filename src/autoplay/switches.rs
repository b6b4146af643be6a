//! Toggle switches the autoplayer may flip, and the predicates deciding when.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::provider::GameState;
use crate::config::StrategyOptions;
use crate::core::SchedulerError;

/// A known toggle upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Switch {
    /// Temporarily calms the elders.
    ElderPledge,
    /// Permanently calms the elders at a production cost.
    ElderCovenant,
    /// Undoes the covenant.
    RevokeElderCovenant,
}

impl Switch {
    /// Every known switch.
    pub const ALL: [Self; 3] = [Self::ElderPledge, Self::ElderCovenant, Self::RevokeElderCovenant];

    /// Store name of the switch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ElderPledge => "Elder Pledge",
            Self::ElderCovenant => "Elder Covenant",
            Self::RevokeElderCovenant => "Revoke Elder Covenant",
        }
    }

    /// Whether the switch should be flipped given the options and game.
    pub fn should_flip<G: GameState + ?Sized>(self, options: &StrategyOptions, game: &G) -> bool {
        match self {
            Self::ElderPledge => {
                options.appease_elders
                    && !game
                        .upgrades_in_store()
                        .iter()
                        .any(|u| u.name == Self::ElderCovenant.name())
            }
            Self::ElderCovenant => options.appease_elders,
            Self::RevokeElderCovenant => !options.appease_elders,
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Switch {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|switch| switch.name() == s)
            .ok_or_else(|| SchedulerError::UnknownSwitch(s.to_owned()))
    }
}

/// Validated set of switches the autoplayer is allowed to flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchTable {
    enabled: Vec<Switch>,
}

impl SwitchTable {
    /// Table with every known switch.
    pub fn all() -> Self {
        Self {
            enabled: Switch::ALL.to_vec(),
        }
    }

    /// Build a table from store names.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::UnknownSwitch`] for the first name with no
    /// known predicate.
    pub fn from_names<I>(names: I) -> Result<Self, SchedulerError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut enabled = Vec::new();
        for name in names {
            let switch: Switch = name.as_ref().parse()?;
            if !enabled.contains(&switch) {
                enabled.push(switch);
            }
        }
        Ok(Self { enabled })
    }

    /// The enabled switch with this store name, if any.
    pub fn lookup(&self, upgrade_name: &str) -> Option<Switch> {
        self.enabled
            .iter()
            .copied()
            .find(|switch| switch.name() == upgrade_name)
    }

    /// Enabled switches.
    pub fn switches(&self) -> &[Switch] {
        &self.enabled
    }
}
