// clean-path-config/src/examples.rs
// ============================================================================
// Module: Clean Path Config Examples
// Description: Deterministic example configuration.
// Purpose: Keep documented example TOML in sync with the config model.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The example below is asserted against the config model in tests so the
//! documented defaults cannot drift from the code.

// ============================================================================
// SECTION: Example TOML
// ============================================================================

/// Returns an example `clean-path.toml` matching the default configuration.
#[must_use]
pub const fn config_toml_example() -> &'static str {
    r#"[middleware]
mode = "redirect"
redirect = "permanent"
trailing_slash = "directory"
max_path_bytes = 8192

[server]
bind = "127.0.0.1:8080"
"#
}
