//! Action descriptors and the strategy abstraction they wrap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::AppResult;
use crate::util::clock::Millis;

/// Outcome of one strategy invocation.
///
/// Only `success` outlives the pass that produced it: a successful result
/// claims the action's pool for the rest of the tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the strategy acted.
    pub success: bool,
    /// Opaque detail about what was done.
    pub payload: Option<serde_json::Value>,
}

impl ActionResult {
    /// The strategy acted, with no further detail.
    pub const fn acted() -> Self {
        Self {
            success: true,
            payload: None,
        }
    }

    /// The strategy acted and reports `payload`.
    pub fn acted_with(payload: impl Into<serde_json::Value>) -> Self {
        Self {
            success: true,
            payload: Some(payload.into()),
        }
    }

    /// The strategy ran and decided not to act.
    pub const fn declined() -> Self {
        Self {
            success: false,
            payload: None,
        }
    }
}

/// Result of a strategy run. `Err` is a strategy fault.
pub type StrategyResult = AppResult<ActionResult>;

/// Pluggable decision function an action wraps.
///
/// Strategies read and write only through the state handed to them and must
/// not block: a pass runs every eligible strategy synchronously.
///
/// # Example
///
/// ```rust,ignore
/// use action_scheduler::core::{ActionResult, Strategy, StrategyResult};
///
/// struct Counter;
///
/// impl Strategy<u32> for Counter {
///     fn run(&self, state: &mut u32) -> StrategyResult {
///         *state += 1;
///         Ok(ActionResult::acted())
///     }
/// }
/// ```
pub trait Strategy<S>: Send + Sync {
    /// Decide whether to act on `state`, and act.
    ///
    /// # Errors
    ///
    /// Any error is treated as a fault of this strategy: it is logged and
    /// the invocation counts as `success: false`.
    fn run(&self, state: &mut S) -> StrategyResult;
}

impl<S, F> Strategy<S> for F
where
    F: Fn(&mut S) -> StrategyResult + Send + Sync,
{
    fn run(&self, state: &mut S) -> StrategyResult {
        self(state)
    }
}

/// One registered automated behavior.
pub struct Action<S> {
    name: String,
    interval_ms: Millis,
    pool_id: Option<String>,
    pub(crate) last_attempt_at: Option<Millis>,
    strategy: Box<dyn Strategy<S>>,
}

impl<S> Action<S> {
    /// Create an action attempted at most once every `interval_ms`
    /// (`0` means every tick), in its own pool.
    pub fn new(
        name: impl Into<String>,
        interval_ms: Millis,
        strategy: impl Strategy<S> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            interval_ms,
            pool_id: None,
            last_attempt_at: None,
            strategy: Box::new(strategy),
        }
    }

    /// Create an action from a closure strategy.
    pub fn from_fn<F>(name: impl Into<String>, interval_ms: Millis, f: F) -> Self
    where
        F: Fn(&mut S) -> StrategyResult + Send + Sync + 'static,
    {
        Self::new(name, interval_ms, f)
    }

    /// Place the action in a shared pool.
    #[must_use]
    pub fn in_pool(mut self, pool_id: impl Into<String>) -> Self {
        self.pool_id = Some(pool_id.into());
        self
    }

    /// Unique action name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum milliseconds between attempts.
    pub const fn interval_ms(&self) -> Millis {
        self.interval_ms
    }

    /// Explicit pool, if one was assigned.
    pub fn explicit_pool(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }

    /// Pool the action belongs to: the explicit pool, else its own name.
    pub fn pool_id(&self) -> &str {
        self.pool_id.as_deref().unwrap_or(&self.name)
    }

    /// When the action was last attempted; `None` if never.
    pub const fn last_attempt_at(&self) -> Option<Millis> {
        self.last_attempt_at
    }

    pub(crate) fn strategy(&self) -> &dyn Strategy<S> {
        self.strategy.as_ref()
    }
}

impl<S> fmt::Debug for Action<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("interval_ms", &self.interval_ms)
            .field("pool_id", &self.pool_id())
            .field("last_attempt_at", &self.last_attempt_at)
            .finish_non_exhaustive()
    }
}
