//! Runtime adapters: the runner, the tokio tick driver and status models.

pub mod api;
pub mod runner;
#[cfg(feature = "tokio-runtime")]
pub mod tick_driver;

pub use api::{health, snapshot, ActionSnapshot, Health, PoolSnapshot, SchedulerSnapshot};
pub use runner::Runner;
#[cfg(feature = "tokio-runtime")]
pub use tick_driver::TickDriver;
