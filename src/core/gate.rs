//! Per-action eligibility checks run at the start of every attempt.

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::pool::{PoolHandle, PoolRegistry};
use crate::util::clock::Millis;

/// Why an action may or may not be attempted this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    /// Eligible: attempt now.
    Due,
    /// The action's own interval has not elapsed.
    NotDue {
        /// Milliseconds until the interval elapses.
        remaining_ms: Millis,
    },
    /// Another member of the action's pool already succeeded this tick.
    PoolClaimed,
    /// `now` is earlier than the last attempt, so elapsed time is unknown.
    ClockAnomaly,
}

impl GateDecision {
    /// Whether the action should be invoked.
    pub const fn is_due(self) -> bool {
        matches!(self, Self::Due)
    }
}

/// Interval gate: is an action last attempted at `last_attempt_at` due at
/// `now`?
///
/// Never-attempted actions are always due. The boundary is inclusive: an
/// action is due again once exactly `interval_ms` has elapsed.
pub fn check_interval(last_attempt_at: Option<Millis>, interval_ms: Millis, now: Millis) -> GateDecision {
    if interval_ms == 0 {
        return GateDecision::Due;
    }
    let Some(last) = last_attempt_at else {
        return GateDecision::Due;
    };
    match now.checked_sub(last) {
        None => GateDecision::ClockAnomaly,
        Some(elapsed) if elapsed < interval_ms => GateDecision::NotDue {
            remaining_ms: interval_ms - elapsed,
        },
        Some(_) => GateDecision::Due,
    }
}

/// Full gate for `action` during tick `tick`: the interval check, then the
/// pool's per-tick exclusion.
///
/// The pool is resolved only once the interval check passes, so pools come
/// into existence the first time one of their members is due.
pub fn evaluate<S>(
    action: &Action<S>,
    pools: &mut PoolRegistry,
    tick: u64,
    now: Millis,
) -> (GateDecision, Option<PoolHandle>) {
    let decision = check_interval(action.last_attempt_at(), action.interval_ms(), now);
    if !decision.is_due() {
        return (decision, None);
    }
    let handle = pools.resolve(action.pool_id());
    if pools.get(handle).is_claimed(tick) {
        return (GateDecision::PoolClaimed, Some(handle));
    }
    (GateDecision::Due, Some(handle))
}
