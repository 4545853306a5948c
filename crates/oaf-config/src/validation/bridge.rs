//! Bridge connection validation.

use crate::schema::{OafConfig, STANDALONE_IFRAME_PREFIX};

use super::helpers::validate_required;

/// Validate the fields the host needs to accept the panel.
pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &OafConfig) {
    validate_required(errors, "bridge.app_id", &config.bridge.app_id);
    validate_required(errors, "bridge.host", &config.bridge.host);

    if let Some(id) = config.bridge.iframe_id.as_deref() {
        if id.starts_with(STANDALONE_IFRAME_PREFIX) {
            tracing::warn!(iframe_id = id, "bridge.iframe_id looks like a standalone fallback");
        }
    }
}
