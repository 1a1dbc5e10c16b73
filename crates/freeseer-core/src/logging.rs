use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Per-request events from the configuration routes are logged at debug.
pub const DEFAULT_LOG_FILTER: &str = "freeseer_core=info,freeseer_web=debug,tower_http=info";

pub fn init() {
    init_with_default(DEFAULT_LOG_FILTER);
}

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
/// Later calls are no-ops.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .try_init();

    if installed.is_ok() {
        tracing::debug!(default_filter, "Logging initialized");
    }
}
