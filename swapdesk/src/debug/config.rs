//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g. "swapdesk=debug,info")
    pub log_level: String,
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("SWAPDESK_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            log_dir,
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "swapdesk=info,warn".to_string()),
        }
    }
}
