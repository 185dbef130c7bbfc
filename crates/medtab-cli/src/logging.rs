//! Logging setup via `tracing` / `tracing-subscriber`.
//!
//! Verbosity comes from the CLI flags; `RUST_LOG` still wins when the user
//! has not passed any explicit verbosity flag.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `explicit` marks whether the level filter came from a CLI flag; when it
/// did, the environment filter is ignored.
pub fn init_logging(level: LevelFilter, explicit: bool) {
    let filter = if explicit {
        EnvFilter::default().add_directive(level.into())
    } else {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
