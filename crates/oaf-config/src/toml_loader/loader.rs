//! Reading and parsing the config file.

use crate::schema::OafConfig;
use crate::validation;
use oaf_common::ConfigError;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the TOML file at `path`.
///
/// A missing file is `FileNotFound`. Invalid values only warn; the parsed
/// config is returned unchanged so callers decide whether to reject it.
pub fn load_from_path(path: &Path) -> Result<OafConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;
    let config: OafConfig = toml::from_str(&raw)
        .map_err(|e| ConfigError::ParseError(format!("invalid TOML in {}: {e}", path.display())))?;

    match validation::validate(&config) {
        Ok(()) => debug!("config validated"),
        Err(e) => warn!(path = %path.display(), "{e}; keeping parsed values"),
    }

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load from [`default_config_path`], writing the commented default first if
/// there is no file yet.
pub fn load_default() -> Result<OafConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(OafConfig::default())
        }
        other => other,
    }
}
