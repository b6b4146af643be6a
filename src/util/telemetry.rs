//! Tracing setup for hosts that do not bring their own subscriber.

/// Install an env-filtered fmt subscriber unless one is already set.
///
/// Events are emitted under the `action_scheduler` target: strategy and
/// suppression faults at `warn`, purchases and driver start/stop at `info`,
/// pool creation and clock anomalies at `debug`, suppressed passes at
/// `trace`. For example `RUST_LOG=action_scheduler=debug`.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .try_init();
}
