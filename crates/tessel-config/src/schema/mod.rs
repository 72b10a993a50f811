//! Configuration schema types for tessel.
//!
//! All structs use `serde(default)` so partial files work correctly.

mod descriptions;
mod hotkeys;
mod settings;

pub use descriptions::*;
pub use hotkeys::*;
pub use settings::*;

use serde::{Deserialize, Serialize};

/// Current settings schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root of the settings file. Everything lives under `[settings]` so that
/// TOML paths and the dotted store keys are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TesselConfig {
    pub settings: Settings,
}
