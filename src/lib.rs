//! # Action Scheduler
//!
//! A tick-driven scheduler for small, independent automated decisions made
//! against continuously changing external state.
//!
//! Each registered action wraps a pluggable strategy and carries two
//! constraints:
//!
//! - **Interval**: the action is attempted at most once every `interval_ms`
//!   (an attempt counts whether or not the strategy acts or faults).
//! - **Pool**: actions sharing a pool are mutually exclusive within a tick.
//!   Once one member succeeds, the rest of the pool is skipped until the
//!   next tick. Actions without an explicit pool get one named after them.
//!
//! A pass evaluates every action in registration order, so earlier actions
//! get first refusal inside a shared pool. Strategy faults (returned errors
//! and panics) are logged, audited and contained; the pass always finishes.
//!
//! ## Core Scheduler
//!
//! ```rust,ignore
//! use action_scheduler::builders::SchedulerBuilder;
//! use action_scheduler::core::{Action, ActionResult};
//!
//! let mut scheduler = SchedulerBuilder::new()
//!     .action(Action::from_fn("tick", 0, |n: &mut u32| {
//!         *n += 1;
//!         Ok(ActionResult::acted())
//!     }))
//!     .build()?;
//!
//! let mut count = 0;
//! let report = scheduler.run_pass(&mut count, 1_000);
//! assert!(report.attempted("tick"));
//! ```
//!
//! ## Autoplayer
//!
//! The [`autoplay`] module ships one concrete strategy set for an idle game,
//! written against the [`autoplay::GameState`] trait. Drive it on a tokio
//! runtime with [`runtime::TickDriver`]:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use action_scheduler::builders::build_autoplayer;
//! use action_scheduler::config::AutoplayConfig;
//! use action_scheduler::runtime::{Runner, TickDriver};
//!
//! let cfg = AutoplayConfig::from_env()?;
//! let scheduler = build_autoplayer(&cfg.strategies)?;
//! let driver = TickDriver::new(
//!     Runner::new(scheduler, my_game),
//!     Duration::from_millis(cfg.tick_interval_ms),
//! )?;
//! driver.start();
//! // ...
//! driver.stop();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: actions, pools, gating and passes.
pub mod core;
/// Configuration models for the tick cadence and strategy options.
pub mod config;
/// Builders to construct schedulers from actions and configuration.
pub mod builders;
/// Idle-game strategies and the state interface they act on.
pub mod autoplay;
/// Infrastructure adapters such as the in-memory game.
pub mod infra;
/// Runtime adapters: the runner, tick driver and status models.
pub mod runtime;
/// Shared utilities.
pub mod util;
