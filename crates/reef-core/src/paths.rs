//! Centralized path utilities
//!
//! All application paths in one place for consistency

use std::path::PathBuf;

use crate::constants::{CONFIG_DIR_NAME, PORTFOLIO_FILE_NAME, SETTINGS_FILE_NAME};

/// Get the reef config directory (~/.reef)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Get the logs directory (~/.reef/logs)
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Get the portfolio content override file (~/.reef/portfolio.toml)
pub fn portfolio_file() -> PathBuf {
    config_dir().join(PORTFOLIO_FILE_NAME)
}

/// Get the UI settings file (~/.reef/config.toml)
pub fn settings_file() -> PathBuf {
    config_dir().join(SETTINGS_FILE_NAME)
}
