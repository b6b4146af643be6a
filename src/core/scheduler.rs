//! The action scheduler: registry, evaluation pass and fault-isolating invoker.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::core::action::{Action, ActionResult, Strategy};
use crate::core::audit::{build_audit_event, AttemptOutcome, AuditSink};
use crate::core::gate::{self, GateDecision};
use crate::core::pool::{PoolHandle, PoolRegistry};
use crate::core::SchedulerError;
use crate::util::clock::Millis;

/// Predicate that suppresses a whole pass while it returns `true`.
pub type SuppressionFn<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;

/// One attempt made during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Action name.
    pub action: String,
    /// Pool the action belongs to.
    pub pool: String,
    /// How the attempt ended.
    pub outcome: AttemptOutcome,
}

/// Summary of one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    /// Tick sequence number of the pass.
    pub tick: u64,
    /// Time the pass evaluated against.
    pub at_ms: Millis,
    /// The suppression predicate held, so nothing was evaluated.
    pub suppressed: bool,
    /// Attempts in registration order.
    pub attempts: Vec<AttemptRecord>,
    /// Actions skipped because their clock went backwards.
    pub clock_anomalies: Vec<String>,
}

impl PassReport {
    /// Whether `action` was attempted in this pass.
    pub fn attempted(&self, action: &str) -> bool {
        self.attempts.iter().any(|a| a.action == action)
    }

    /// Outcome for `action`, if it was attempted.
    pub fn outcome(&self, action: &str) -> Option<&AttemptOutcome> {
        self.attempts
            .iter()
            .find(|a| a.action == action)
            .map(|a| &a.outcome)
    }

    /// Names of actions that succeeded.
    pub fn succeeded(&self) -> impl Iterator<Item = &str> {
        self.attempts
            .iter()
            .filter(|a| a.outcome == AttemptOutcome::Succeeded)
            .map(|a| a.action.as_str())
    }

    /// Faulted actions with their fault detail.
    pub fn faults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attempts.iter().filter_map(|a| match &a.outcome {
            AttemptOutcome::Faulted { reason } => Some((a.action.as_str(), reason.as_str())),
            _ => None,
        })
    }
}

/// Running totals across all passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Passes requested, including suppressed ones.
    pub ticks: u64,
    /// Passes skipped by the suppression predicate, including passes where
    /// it panicked.
    pub suppressed_ticks: u64,
    /// Suppression predicate panics.
    pub suppression_faults: u64,
    /// Strategy invocations.
    pub attempts: u64,
    /// Invocations that acted.
    pub successes: u64,
    /// Invocations that declined.
    pub declines: u64,
    /// Invocations that faulted.
    pub faults: u64,
    /// Interval checks that saw time move backwards.
    pub clock_anomalies: u64,
}

/// Registry of actions plus the per-pool state their passes share.
///
/// A pass evaluates actions in registration order, so earlier actions get
/// first refusal within a shared pool. All mutation happens inside
/// [`ActionScheduler::run_pass`], which takes `&mut self`; two passes can
/// never interleave.
pub struct ActionScheduler<S> {
    actions: Vec<Action<S>>,
    pools: PoolRegistry,
    suppression: Option<SuppressionFn<S>>,
    audit: Option<Box<dyn AuditSink>>,
    tick: u64,
    stats: SchedulerStats,
}

impl<S> Default for ActionScheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ActionScheduler<S> {
    /// Create a scheduler with no actions.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            pools: PoolRegistry::new(),
            suppression: None,
            audit: None,
            tick: 0,
            stats: SchedulerStats::default(),
        }
    }

    /// Skip every pass while `predicate` holds for the state.
    #[must_use]
    pub fn with_suppression<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.suppression = Some(Box::new(predicate));
        self
    }

    pub(crate) fn set_suppression(&mut self, predicate: SuppressionFn<S>) {
        self.suppression = Some(predicate);
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Append `action` to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::DuplicateAction`] if an action with the same
    /// name is already registered.
    pub fn register(&mut self, action: Action<S>) -> Result<(), SchedulerError> {
        if self.actions.iter().any(|a| a.name() == action.name()) {
            return Err(SchedulerError::DuplicateAction(action.name().to_owned()));
        }
        tracing::debug!(
            action = action.name(),
            interval_ms = action.interval_ms(),
            pool = action.pool_id(),
            "registered action"
        );
        self.actions.push(action);
        Ok(())
    }

    /// Registered actions in evaluation order.
    pub fn actions(&self) -> &[Action<S>] {
        &self.actions
    }

    /// Look up an action by name.
    pub fn action(&self, name: &str) -> Option<&Action<S>> {
        self.actions.iter().find(|a| a.name() == name)
    }

    /// Pools referenced so far.
    pub const fn pools(&self) -> &PoolRegistry {
        &self.pools
    }

    /// Resolve the pool of the registered action `name`, creating it if this
    /// is its first reference. `None` if no such action exists.
    pub fn resolve_pool(&mut self, name: &str) -> Option<PoolHandle> {
        let pool_id = self.action(name)?.pool_id().to_owned();
        Some(self.pools.resolve(&pool_id))
    }

    /// Running totals.
    pub const fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Tick sequence number of the most recent pass.
    pub const fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Run one evaluation pass against `state` at time `now`.
    ///
    /// Every due action is attempted in registration order. Strategy faults
    /// are logged and recorded but never stop the pass. A panicking
    /// suppression predicate skips the pass.
    pub fn run_pass(&mut self, state: &mut S, now: Millis) -> PassReport {
        self.tick += 1;
        self.stats.ticks += 1;
        let mut report = PassReport {
            tick: self.tick,
            at_ms: now,
            ..PassReport::default()
        };

        if let Some(predicate) = self.suppression.as_ref() {
            let suppressed = match panic::catch_unwind(AssertUnwindSafe(|| predicate(&*state))) {
                Ok(suppressed) => suppressed,
                Err(panic) => {
                    tracing::warn!(
                        tick = self.tick,
                        error = %panic_message(panic.as_ref()),
                        "suppression predicate fault; skipping pass"
                    );
                    self.stats.suppression_faults += 1;
                    true
                }
            };
            if suppressed {
                tracing::trace!(tick = self.tick, "pass suppressed");
                self.stats.suppressed_ticks += 1;
                report.suppressed = true;
                return report;
            }
        }

        for idx in 0..self.actions.len() {
            let (decision, handle) = gate::evaluate(&self.actions[idx], &mut self.pools, self.tick, now);
            let handle = match (decision, handle) {
                (GateDecision::Due, Some(handle)) => handle,
                (GateDecision::ClockAnomaly, _) => {
                    tracing::debug!(
                        action = self.actions[idx].name(),
                        now_ms = now,
                        "clock moved backwards; treating action as not due"
                    );
                    self.stats.clock_anomalies += 1;
                    report.clock_anomalies.push(self.actions[idx].name().to_owned());
                    continue;
                }
                _ => continue,
            };

            let action = &mut self.actions[idx];
            action.last_attempt_at = Some(now);
            let outcome = match invoke(action.strategy(), state) {
                Ok(result) if result.success => {
                    self.pools.get_mut(handle).record_success(self.tick, now);
                    self.stats.successes += 1;
                    (AttemptOutcome::Succeeded, result.payload)
                }
                Ok(result) => {
                    self.stats.declines += 1;
                    (AttemptOutcome::Declined, result.payload)
                }
                Err(reason) => {
                    tracing::warn!(action = action.name(), error = %reason, "strategy fault");
                    self.stats.faults += 1;
                    (AttemptOutcome::Faulted { reason }, None)
                }
            };
            self.stats.attempts += 1;

            let (outcome, payload) = outcome;
            let pool = self.pools.get(handle).id().to_owned();
            if let Some(sink) = self.audit.as_mut() {
                let event = build_audit_event(
                    action.name(),
                    pool.clone(),
                    outcome.clone(),
                    now,
                    payload.map(|p| p.to_string()),
                );
                if let Err(panic) = panic::catch_unwind(AssertUnwindSafe(|| sink.record(event))) {
                    tracing::warn!(
                        action = action.name(),
                        error = %panic_message(panic.as_ref()),
                        "audit sink fault"
                    );
                }
            }
            report.attempts.push(AttemptRecord {
                action: action.name().to_owned(),
                pool,
                outcome,
            });
        }

        report
    }
}

/// Run `strategy` inside a fault boundary. Errors and panics both come back
/// as `Err` with a readable description.
fn invoke<S>(strategy: &dyn Strategy<S>, state: &mut S) -> Result<ActionResult, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| strategy.run(state))) {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(err)) => Err(format!("{err:#}")),
        Err(panic) => Err(panic_message(panic.as_ref())),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_owned()
    }
}
