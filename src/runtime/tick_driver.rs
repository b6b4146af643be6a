//! Periodic driver firing evaluation passes on a tokio runtime.
//!
//! The driver owns at most one background task. Every pass runs inside that
//! task while holding the runner's mutex, so passes never overlap, and a
//! stop request is only observed between passes.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::core::SchedulerError;
use crate::runtime::runner::Runner;

/// Running task plus the channel that asks it to stop.
struct DriverTask {
    stop_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

/// Owned, cancellable periodic task handle for a [`Runner`].
///
/// `Stopped → start → Running → stop → Stopped`. Both transitions are
/// idempotent and safe to call from any thread. Dropping the driver stops it.
pub struct TickDriver<S> {
    runner: Arc<Mutex<Runner<S>>>,
    cadence: Duration,
    handle: Handle,
    task: Mutex<Option<DriverTask>>,
}

impl<S: Send + 'static> TickDriver<S> {
    /// Create a stopped driver on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidConfig`] for a zero cadence and
    /// [`SchedulerError::Runtime`] outside a tokio runtime.
    pub fn new(runner: Runner<S>, cadence: Duration) -> Result<Self, SchedulerError> {
        let handle = Handle::try_current().map_err(|e| SchedulerError::Runtime(e.to_string()))?;
        Self::with_handle(runner, cadence, handle)
    }

    /// Create a stopped driver that spawns onto `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidConfig`] for a zero cadence.
    pub fn with_handle(runner: Runner<S>, cadence: Duration, handle: Handle) -> Result<Self, SchedulerError> {
        if cadence.is_zero() {
            return Err(SchedulerError::InvalidConfig(
                "tick cadence must be greater than 0".into(),
            ));
        }
        Ok(Self {
            runner: Arc::new(Mutex::new(runner)),
            cadence,
            handle,
            task: Mutex::new(None),
        })
    }

    /// Begin firing passes. Returns `false` if already running.
    pub fn start(&self) -> bool {
        let mut task = self.task.lock();
        if task.as_ref().is_some_and(|t| !t.join.is_finished()) {
            return false;
        }
        let (stop_tx, stop_rx) = watch::channel(false);
        let join = self
            .handle
            .spawn(drive(Arc::clone(&self.runner), self.cadence, stop_rx));
        *task = Some(DriverTask { stop_tx, join });
        info!(cadence_ms = self.cadence.as_millis(), "tick driver started");
        true
    }

    /// Prevent further passes. A pass already in progress completes.
    /// Returns `false` if already stopped.
    pub fn stop(&self) -> bool {
        let Some(task) = self.task.lock().take() else {
            return false;
        };
        if task.join.is_finished() {
            return false;
        }
        let _ = task.stop_tx.send(true);
        info!("tick driver stopped");
        true
    }

    /// Stop, then wait for the background task to exit.
    pub async fn shutdown(&self) {
        let task = self.task.lock().take();
        if let Some(task) = task {
            let _ = task.stop_tx.send(true);
            let _ = task.join.await;
            info!("tick driver shut down");
        }
    }

    /// Alias for [`TickDriver::start`].
    pub fn play(&self) -> bool {
        self.start()
    }

    /// Alias for [`TickDriver::stop`].
    pub fn pause(&self) -> bool {
        self.stop()
    }
}

impl<S> TickDriver<S> {
    /// Whether a background task is currently firing passes.
    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .is_some_and(|t| !t.join.is_finished())
    }

    /// Time between passes.
    pub const fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Shared runner; lock it to inspect state between passes.
    ///
    /// The driver task takes the same blocking lock for every pass. Never
    /// hold the guard across an `.await`: on a current-thread runtime the
    /// driver can then never acquire it. Prefer [`TickDriver::with_runner`].
    pub fn runner(&self) -> Arc<Mutex<Runner<S>>> {
        Arc::clone(&self.runner)
    }

    /// Run `f` against the runner between passes.
    pub fn with_runner<T>(&self, f: impl FnOnce(&mut Runner<S>) -> T) -> T {
        f(&mut self.runner.lock())
    }
}

impl<S> Drop for TickDriver<S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            let _ = task.stop_tx.send(true);
        }
    }
}

async fn drive<S>(runner: Arc<Mutex<Runner<S>>>, cadence: Duration, mut stop_rx: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(cadence);
    // Eligibility is computed from elapsed time, so late ticks are dropped
    // rather than replayed.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            biased;
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                let mut runner = runner.lock();
                match panic::catch_unwind(AssertUnwindSafe(|| runner.tick().clone())) {
                    Ok(report) if !report.attempts.is_empty() => {
                        debug!(tick = report.tick, attempts = report.attempts.len(), "pass complete");
                    }
                    Ok(_) => {}
                    Err(_) => warn!("pass panicked outside the strategy boundary; driver continues"),
                }
            }
        }
    }
    debug!("tick driver task exiting");
}
