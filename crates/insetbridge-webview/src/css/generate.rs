//! Builds CSS custom property values and the script that applies them.

use insetbridge_common::Edge;

/// A CSS custom property ready for injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    /// Custom property name (e.g. `--android-safe-area-top`).
    pub name: String,
    /// CSS value (e.g. `max(env(safe-area-inset-top), 24px)`).
    pub value: String,
}

impl CssVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Value for one edge: never smaller than what the engine's own
/// `env(safe-area-inset-*)` reports.
pub fn safe_area_value(edge: Edge, logical_px: u32) -> String {
    format!("max(env(safe-area-inset-{}), {logical_px}px)", edge.as_str())
}

/// Escape for a single-quoted JS string literal.
fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// Generate a JavaScript snippet that sets CSS variables on the root element.
///
/// Uses `document.documentElement.style.setProperty()` for each variable,
/// which updates them live without a page reload. A page without a root
/// element (mid-navigation) is left untouched.
pub fn generate_css_injection_js(variables: &[CssVariable]) -> String {
    let mut js = String::from(
        "(function() {\n  var root = document.documentElement;\n  if (!root) return;\n  var s = root.style;\n",
    );

    for var in variables {
        js.push_str(&format!(
            "  s.setProperty('{}', '{}');\n",
            escape_js(&var.name),
            escape_js(&var.value)
        ));
    }

    js.push_str("})();");
    js
}
