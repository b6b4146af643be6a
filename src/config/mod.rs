//! Configuration models for the tick cadence and strategy options.

pub mod autoplay;

pub use autoplay::{AutoplayConfig, StrategyOptions};
