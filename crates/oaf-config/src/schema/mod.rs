//! Configuration schema types for the panel.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bridge;
mod layout;
mod logging;

pub use bridge::*;
pub use layout::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the panel.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct OafConfig {
    pub bridge: BridgeConfig,
    pub layout: LayoutDimensions,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sections() {
        let config = OafConfig::default();
        assert_eq!(config.bridge.app_id, DEFAULT_APP_ID);
        assert_eq!(config.layout.minimize_size, MINIMIZE_SIZE);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: OafConfig = toml::from_str("").unwrap();
        assert_eq!(config.bridge.host, LOCAL_BRIDGE_HOST);
        assert!((config.layout.maximize_height_ratio - MAXIMIZE_HEIGHT_RATIO).abs() < f64::EPSILON);
    }

    #[test]
    fn full_toml_overrides_every_section() {
        let config: OafConfig = toml::from_str(
            r#"
[bridge]
app_id = "42"
host = "tenant.example.com"
iframe_id = "69"

[layout]
side_panel_height_ratio = 0.9
minimize_size = 160

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.bridge.app_id, "42");
        assert_eq!(config.bridge.iframe_id.as_deref(), Some("69"));
        assert!((config.layout.side_panel_height_ratio - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.layout.minimize_size, 160);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
}
