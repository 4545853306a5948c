//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = OafConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_missing_app_id() {
    let mut config = OafConfig::default();
    config.bridge.app_id = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bridge.app_id is required"));
}

#[test]
fn catches_missing_host() {
    let mut config = OafConfig::default();
    config.bridge.host = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bridge.host is required"));
}

#[test]
fn standalone_iframe_id_only_warns() {
    let mut config = OafConfig::default();
    config.bridge.iframe_id = Some("standalone-abc".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_ratio_above_one() {
    let mut config = OafConfig::default();
    config.layout.side_panel_height_ratio = 1.2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.side_panel_height_ratio"));
}

#[test]
fn catches_zero_ratio() {
    let mut config = OafConfig::default();
    config.layout.maximize_width_ratio = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.maximize_width_ratio"));
}

#[test]
fn ratio_of_exactly_one_is_allowed() {
    let mut config = OafConfig::default();
    config.layout.maximize_height_ratio = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_minimize_size() {
    let mut config = OafConfig::default();
    config.layout.minimize_size = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.minimize_size"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = OafConfig::default();
    config.bridge.app_id = String::new();
    config.layout.maximize_height_ratio = -0.5;
    config.layout.minimize_size = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bridge.app_id"));
    assert!(err.contains("layout.maximize_height_ratio"));
    assert!(err.contains("layout.minimize_size"));
    assert_eq!(err.matches("; ").count(), 2);
}
