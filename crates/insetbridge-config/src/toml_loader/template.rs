//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# insetbridge configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[surface]
# url = "https://localhost/"   # mutually exclusive with html
# html = "<html>...</html>"
# title = "insetbridge"
# devtools = false
# user_agent = "insetbridge/0.1.0"
# width = 412                  # logical px
# height = 915

[safe_area]
# enabled = true
# property_prefix = "--android-safe-area"   # -> --android-safe-area-{top,right,bottom,left}
# transparent_system_bars = true

[edge_to_edge]
# margin_adjustment = "disable"   # disable | auto | force
# host_os_version = 34            # explicit; never detected
# native_edge_to_edge_min_os = 35 # used by "auto"

[emulation]
# Desktop stand-in for host insets, in logical px.
# system_bars = { top = 24, bottom = 48 }
# display_cutout = { top = 32 }
# ime = { bottom = 0 }

[logging]
# level = "info"   # trace | debug | info | warn | error
"##
}
