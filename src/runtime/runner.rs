//! Bundles a scheduler with the state it drives and the clock it reads.

use std::sync::Arc;

use crate::core::{ActionScheduler, PassReport};
use crate::util::clock::{Clock, SystemClock};

/// A scheduler, its state and its clock: everything one tick needs.
pub struct Runner<S> {
    scheduler: ActionScheduler<S>,
    state: S,
    clock: Arc<dyn Clock>,
    last_report: Option<PassReport>,
}

impl<S> Runner<S> {
    /// Drive `scheduler` over `state` using the system clock.
    pub fn new(scheduler: ActionScheduler<S>, state: S) -> Self {
        Self::with_clock(scheduler, state, SystemClock)
    }

    /// Drive `scheduler` over `state` using `clock`.
    pub fn with_clock(scheduler: ActionScheduler<S>, state: S, clock: impl Clock + 'static) -> Self {
        Self {
            scheduler,
            state,
            clock: Arc::new(clock),
            last_report: None,
        }
    }

    /// Run one pass at the clock's current time.
    pub fn tick(&mut self) -> &PassReport {
        let now = self.clock.now_ms();
        let report = self.scheduler.run_pass(&mut self.state, now);
        self.last_report.insert(report)
    }

    /// Report of the most recent pass.
    pub const fn last_report(&self) -> Option<&PassReport> {
        self.last_report.as_ref()
    }

    /// The scheduler.
    pub const fn scheduler(&self) -> &ActionScheduler<S> {
        &self.scheduler
    }

    /// The driven state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Mutable access to the driven state between passes.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Take the state back, dropping the scheduler.
    pub fn into_state(self) -> S {
        self.state
    }
}
