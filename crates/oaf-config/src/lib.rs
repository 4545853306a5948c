//! Configuration for the OAF panel.
//!
//! One TOML file with `[bridge]`, `[layout]` and `[logging]` sections. Every
//! field has a default, so an empty file is a valid config.
//!
//! ```rust,no_run
//! let config = oaf_config::load_config().unwrap_or_default();
//! println!("{}", oaf_config::config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    BridgeConfig, LayoutDimensions, LogLevel, LoggingConfig, NavigationStyle, OafConfig,
    CONFIG_SCHEMA_VERSION,
};

use oaf_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<OafConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<OafConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &OafConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
