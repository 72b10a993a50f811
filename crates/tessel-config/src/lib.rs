//! tessel settings.
//!
//! TOML-backed settings with defaults for every field, a dotted-key store
//! on top of the typed schema, validation, and live reload.

pub mod reload;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{
    describe_hotkey, HotkeyEntry, Hotkeys, SettingDescription, Settings, TesselConfig,
    CONFIG_SCHEMA_VERSION,
};
pub use store::SettingsStore;
pub use toml_writer::{save_config, save_config_to_path};
pub use watcher::ConfigWatcher;

use tessel_common::ConfigError;

/// Load settings from the platform default path, creating the file on
/// first run.
pub fn load_config() -> Result<TesselConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize settings to a pretty-printed JSON string.
pub fn config_to_json(config: &TesselConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize settings: {e}\"}}"))
}
