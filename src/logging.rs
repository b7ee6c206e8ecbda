//! Logging initialization.
//!
//! Sets up tracing with an env-filter taken from configuration. The TUI
//! draws on stderr, so console logs go to stdout where they cannot corrupt
//! the alternate screen; a log file can be configured instead.

use crate::config::DashConfig;

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_logging(config: &DashConfig) {
    let filter = tracing_subscriber::EnvFilter::new(config.log_level.clone());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_target(true);

    match &config.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .unwrap_or_else(|e| panic!("Failed to open log file {}: {}", path, e));
            builder.with_writer(file).with_ansi(false).init();
        }
        None => builder.init(),
    }
}
