//! Host-facing status models.

use serde::{Deserialize, Serialize};

use crate::core::{ActionScheduler, SchedulerStats};
use crate::util::clock::Millis;

/// One registered action as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSnapshot {
    /// Action name.
    pub name: String,
    /// Minimum milliseconds between attempts.
    pub interval_ms: Millis,
    /// Pool identifier.
    pub pool: String,
    /// Last attempt, if any.
    pub last_attempt_at: Option<Millis>,
}

/// One pool as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Pool identifier.
    pub id: String,
    /// Last member success, if any.
    pub last_success_at: Option<Millis>,
}

/// Point-in-time view of a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerSnapshot {
    /// Most recent tick sequence number.
    pub tick: u64,
    /// Actions in evaluation order.
    pub actions: Vec<ActionSnapshot>,
    /// Pools in creation order.
    pub pools: Vec<PoolSnapshot>,
    /// Running totals.
    pub stats: SchedulerStats,
}

/// Health response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
    /// Whether passes are being fired.
    pub running: bool,
}

/// Build a snapshot of `scheduler`.
pub fn snapshot<S>(scheduler: &ActionScheduler<S>) -> SchedulerSnapshot {
    SchedulerSnapshot {
        tick: scheduler.current_tick(),
        actions: scheduler
            .actions()
            .iter()
            .map(|a| ActionSnapshot {
                name: a.name().to_owned(),
                interval_ms: a.interval_ms(),
                pool: a.pool_id().to_owned(),
                last_attempt_at: a.last_attempt_at(),
            })
            .collect(),
        pools: scheduler
            .pools()
            .iter()
            .map(|p| PoolSnapshot {
                id: p.id().to_owned(),
                last_success_at: p.last_success_at(),
            })
            .collect(),
        stats: scheduler.stats(),
    }
}

/// Return a health payload.
pub const fn health(running: bool) -> Health {
    Health { ok: true, running }
}
