//! Core TOML settings loading: read from a path or the platform default.

use crate::schema::TesselConfig;
use crate::validation;
use std::path::Path;
use tessel_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load settings from a specific TOML file path.
///
/// Missing fields take their defaults. A file that parses but fails
/// validation is logged and replaced by the defaults.
pub fn load_from_path(path: &Path) -> Result<TesselConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TesselConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("settings validation warning: {e}");
        warn!("falling back to default settings");
        return Ok(TesselConfig::default());
    }

    info!("loaded settings from {}", path.display());
    Ok(config)
}

/// Load settings from `path`, writing the commented default file first if
/// it does not exist yet.
pub fn load_or_create(path: &Path) -> Result<TesselConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no settings found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(TesselConfig::default())
        }
        other => other,
    }
}

/// Load settings from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/tessel/settings.toml`
/// On Linux: `~/.config/tessel/settings.toml`
pub fn load_default() -> Result<TesselConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
