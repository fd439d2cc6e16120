//! Opt-in diagnostic tracing (`--log`).

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins over `level` when set.
pub fn enable_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    // a second call (e.g. from the shell) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
