//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# OAF panel configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[bridge]
# app_id = "1234567890"
# host = "http://localhost:46880"   # bare domains get https:// prefixed
# iframe_id = "69"                  # omitted: a standalone-<uuid> id is generated
# navigation = "path"               # path, object

[layout]
# maximize_height_ratio = 0.6       # (0.0, 1.0]
# maximize_width_ratio = 0.3
# side_panel_height_ratio = 0.95
# side_panel_width_ratio = 0.3
# minimize_size = 200               # 1-4096 px

[logging]
# level = "info"                    # debug, info, warn, error
"##
    .to_string()
}
