//! Full settings validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod colors;
mod helpers;
mod hotkeys;


use crate::schema::TesselConfig;
use tessel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TesselConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    colors::validate_colors(&mut errors, config);
    hotkeys::validate_no_duplicates(&mut errors, &config.settings.hotkeys);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
