//! File logging setup.
//!
//! Library code logs through the `log` facade; this module wires the facade
//! to a fern dispatch writing into the platform data directory when logging
//! is enabled in the configuration, and silences it otherwise.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;

/// Path of the log file inside the platform data directory.
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(data_dir.join("catalogist").join("catalogist.log"))
}

/// Install the global logger according to the configuration.
///
/// # Errors
/// Fails if the log directory cannot be created, the log file cannot be
/// opened, or a logger was already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return fern::Dispatch::new()
            .level(log::LevelFilter::Off)
            .apply()
            .context("Failed to install logger");
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")
}
