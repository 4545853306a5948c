//! Host bridge connection settings.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default application id registered with the host.
pub const DEFAULT_APP_ID: &str = "1234567890";
/// Local bridge used while developing outside the host.
pub const LOCAL_BRIDGE_HOST: &str = "http://localhost:46880";
/// Scheme prefixed onto hosts configured without one.
pub const HTTPS_PROTOCOL: &str = "https://";
/// Prefix of iframe ids generated when the host did not supply one.
pub const STANDALONE_IFRAME_PREFIX: &str = "standalone-";

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("static regex"));

/// Which call shape the host's `navigateToPath` expects.
///
/// Chosen once from config; the client never retries the other shape.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    /// `navigateToPath("/path")`
    #[default]
    Path,
    /// `navigateToPath({ path: "/path" })`, for older host builds.
    Object,
}

/// Connection settings for the host bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Application id registered with the host (required).
    pub app_id: String,
    /// Host URL; a bare domain gets `https://` prefixed.
    pub host: String,
    /// Floating iframe id supplied by the host, if any.
    pub iframe_id: Option<String>,
    pub navigation: NavigationStyle,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.into(),
            host: LOCAL_BRIDGE_HOST.into(),
            iframe_id: None,
            navigation: NavigationStyle::Path,
        }
    }
}

impl BridgeConfig {
    /// The configured host with a scheme, or `None` when blank.
    pub fn normalized_host(&self) -> Option<String> {
        normalize_host(&self.host)
    }

    /// The configured iframe id, or a freshly generated standalone one.
    pub fn resolve_iframe_id(&self) -> String {
        match self.iframe_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("{STANDALONE_IFRAME_PREFIX}{}", uuid::Uuid::new_v4()),
        }
    }
}

/// Trim a host and prefix `https://` unless it already has an http(s) scheme.
pub fn normalize_host(host: &str) -> Option<String> {
    let host = host.trim();
    if host.is_empty() {
        return None;
    }
    if SCHEME_RE.is_match(host) {
        Some(host.to_string())
    } else {
        Some(format!("{HTTPS_PROTOCOL}{host}"))
    }
}

// =============================================================================
// Tests
// =============================================================================
