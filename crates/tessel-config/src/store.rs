//! Flat dotted-key view over the typed settings.
//!
//! Keys mirror the TOML layout: `settings.backgroundColor`,
//! `settings.adBlocker`, `settings.hotkeys.<Category>.<action>`. Every
//! successful `set` is validated and, when the store is backed by a file,
//! written straight back to disk.

use std::path::{Path, PathBuf};

use tessel_common::ConfigError;
use toml::Value;
use tracing::{debug, info};

use crate::schema::{Settings, TesselConfig};
use crate::toml_loader::load_or_create;
use crate::toml_writer::save_config_to_path;
use crate::validation;

#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    config: TesselConfig,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Open the settings file at `path`, creating it with defaults if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = load_or_create(&path)?;
        Ok(Self {
            config,
            path: Some(path),
        })
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_config(config: TesselConfig) -> Self {
        Self { config, path: None }
    }

    pub fn config(&self) -> &TesselConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.config.settings
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read one value by dotted key. Tables are returned whole.
    pub fn get(&self, key: &str) -> Option<Value> {
        let root = Value::try_from(&self.config).ok()?;
        key.split('.')
            .try_fold(&root, |node, segment| node.get(segment))
            .cloned()
    }

    /// Every leaf key in the store, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let Ok(root) = Value::try_from(&self.config) {
            collect_keys(&root, String::new(), &mut keys);
        }
        keys.sort();
        keys
    }

    /// Replace one leaf value by dotted key.
    ///
    /// The key must already exist and the new value must have the same TOML
    /// type. The resulting settings must pass validation; on any failure the
    /// store is left unchanged.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let value = value.into();
        let mut root = Value::try_from(&self.config)
            .map_err(|e| ConfigError::ParseError(format!("failed to serialize settings: {e}")))?;

        let slot = key
            .split('.')
            .try_fold(&mut root, |node, segment| node.get_mut(segment))
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        if slot.is_table() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        if slot.type_str() != value.type_str() {
            return Err(ConfigError::ValidationError(format!(
                "{key}: expected {}, got {}",
                slot.type_str(),
                value.type_str()
            )));
        }
        *slot = value;

        let config: TesselConfig = root
            .try_into()
            .map_err(|e| ConfigError::ParseError(format!("invalid value for {key}: {e}")))?;
        validation::validate(&config)?;

        debug!(key, "setting updated");
        self.config = config;
        self.persist()
    }

    pub fn set_hotkey(
        &mut self,
        category: &str,
        action: &str,
        binding: &str,
    ) -> Result<(), ConfigError> {
        self.set(&format!("settings.hotkeys.{category}.{action}"), binding)
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<(), ConfigError> {
        self.set("settings.backgroundColor", color)
    }

    pub fn set_ad_blocker(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.set("settings.adBlocker", enabled)
    }

    /// Swap in a whole new config, e.g. one reloaded from disk.
    /// Does not write back.
    pub fn replace(&mut self, config: TesselConfig) -> Result<(), ConfigError> {
        validation::validate(&config)?;
        self.config = config;
        info!("settings replaced");
        Ok(())
    }

    fn persist(&self) -> Result<(), ConfigError> {
        match &self.path {
            Some(path) => save_config_to_path(&self.config, path),
            None => Ok(()),
        }
    }
}

fn collect_keys(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node.as_table() {
        Some(table) => {
            for (name, child) in table {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_keys(child, key, out);
            }
        }
        None => out.push(prefix),
    }
}
