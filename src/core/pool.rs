//! Action pools: lazily created mutual-exclusion domains shared by actions.
//!
//! A pool enforces no cooldown of its own. Its only job is to let at most one
//! member action succeed per tick: once a member succeeds, the remaining
//! members are skipped until the next tick.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::util::clock::Millis;

/// Stable handle to a pool inside a [`PoolRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolHandle(usize);

/// Mutual-exclusion state for one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPool {
    id: String,
    last_success_at: Option<Millis>,
    /// Tick sequence number in which a member last succeeded.
    claimed_in_tick: Option<u64>,
}

impl ActionPool {
    fn new(id: String) -> Self {
        Self {
            id,
            last_success_at: None,
            claimed_in_tick: None,
        }
    }

    /// Pool identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When a member action last succeeded; `None` if never.
    pub const fn last_success_at(&self) -> Option<Millis> {
        self.last_success_at
    }

    /// Whether a member already succeeded during tick `tick`.
    pub fn is_claimed(&self, tick: u64) -> bool {
        self.claimed_in_tick == Some(tick)
    }

    /// Record a member success at `now` during tick `tick`.
    ///
    /// `last_success_at` never moves backwards, even if `now` does.
    pub(crate) fn record_success(&mut self, tick: u64, now: Millis) {
        self.claimed_in_tick = Some(tick);
        self.last_success_at = Some(self.last_success_at.map_or(now, |prev| prev.max(now)));
    }
}

/// Registry of pools keyed by identifier.
///
/// Pools are created on first reference and never removed, so a handle stays
/// valid for the registry's lifetime.
#[derive(Debug, Default)]
pub struct PoolRegistry {
    index: HashMap<String, PoolHandle>,
    pools: Vec<ActionPool>,
}

impl PoolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `pool_id`, creating the pool if absent.
    pub fn resolve(&mut self, pool_id: &str) -> PoolHandle {
        if let Some(handle) = self.index.get(pool_id) {
            return *handle;
        }
        let handle = PoolHandle(self.pools.len());
        self.pools.push(ActionPool::new(pool_id.to_owned()));
        self.index.insert(pool_id.to_owned(), handle);
        tracing::debug!(pool = pool_id, "created action pool");
        handle
    }

    /// Pool behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` came from a different registry.
    pub fn get(&self, handle: PoolHandle) -> &ActionPool {
        &self.pools[handle.0]
    }

    pub(crate) fn get_mut(&mut self, handle: PoolHandle) -> &mut ActionPool {
        &mut self.pools[handle.0]
    }

    /// Look up a pool by identifier without creating it.
    pub fn find(&self, pool_id: &str) -> Option<&ActionPool> {
        self.index.get(pool_id).map(|handle| self.get(*handle))
    }

    /// All pools in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionPool> {
        self.pools.iter()
    }

    /// Number of pools created so far.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no pool has been referenced yet.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
