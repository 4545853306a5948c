//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod bridge;
mod helpers;
mod layout;

#[cfg(test)]
mod tests;

use crate::schema::OafConfig;
use oaf_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &OafConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    bridge::validate_bridge(&mut errors, config);
    layout::validate_layout(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
