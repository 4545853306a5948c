//! Layout dimension validation (ratios and minimized size).

use crate::schema::OafConfig;

use super::helpers::{validate_range, validate_ratio};

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &OafConfig) {
    let layout = &config.layout;
    validate_ratio(errors, "layout.maximize_height_ratio", layout.maximize_height_ratio);
    validate_ratio(errors, "layout.maximize_width_ratio", layout.maximize_width_ratio);
    validate_ratio(
        errors,
        "layout.side_panel_height_ratio",
        layout.side_panel_height_ratio,
    );
    validate_ratio(
        errors,
        "layout.side_panel_width_ratio",
        layout.side_panel_width_ratio,
    );
    validate_range(errors, "layout.minimize_size", layout.minimize_size, 1, 4096);
}
