use anyhow::{Context, Result};
use autointerface_core::config::LoggingConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, else the configured level when logging is
/// enabled, else warnings only
pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if logging.enabled {
            EnvFilter::new(logging.level.to_lowercase())
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Install the global fmt subscriber, writing to the configured log file
/// when there is one
pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = env_filter(logging);

    match logging.path.as_ref().filter(|_| logging.enabled) {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
