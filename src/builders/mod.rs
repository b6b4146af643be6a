//! Builders to construct schedulers from actions and configuration.

pub mod autoplayer;
pub mod scheduler_builder;

pub use autoplayer::{autoplayer_builder, build_autoplayer};
pub use scheduler_builder::SchedulerBuilder;
