//! Millisecond clocks used by the scheduler.
//!
//! The scheduler never reads the system time directly. Every pass is handed a
//! `now` obtained from a [`Clock`], which lets tests drive passes with a
//! [`ManualClock`] and keeps eligibility a pure function of elapsed time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub type Millis = u64;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// A host clock set before the epoch reads as `0`.
pub fn now_ms() -> Millis {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Source of "now" for scheduler passes.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds.
    fn now_ms(&self) -> Millis;
}

/// Wall clock backed by [`SystemTime`]. May move backwards if the host
/// adjusts its clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        now_ms()
    }
}

/// Manually advanced clock for simulations and tests.
///
/// Clones share the same underlying time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`.
    pub fn new(start_ms: Millis) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Move the clock forward by `delta_ms` and return the new reading.
    pub fn advance(&self, delta_ms: Millis) -> Millis {
        self.now.fetch_add(delta_ms, Ordering::AcqRel) + delta_ms
    }

    /// Set the clock to an absolute reading, which may be earlier than the
    /// current one.
    pub fn set(&self, now_ms: Millis) {
        self.now.store(now_ms, Ordering::Release);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.load(Ordering::Acquire)
    }
}
