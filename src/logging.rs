use anyhow::{Result, anyhow};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Output goes to stderr: stdout belongs to the protocol response. The level
/// comes from `RUST_LOG` and defaults to `info`.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
