mod config;

pub use config::{AssessmentConfig, Config, FlavorConfig, ReportConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/readiness[-dev]/` based on READINESS_ENV.
///
/// Set READINESS_ENV=dev to use the development config directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("READINESS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("readiness-dev")
    } else {
        base_dir.join("readiness")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
