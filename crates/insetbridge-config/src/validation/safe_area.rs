//! Validation for the `[safe_area]` section.
//!
//! The property prefix ends up inside a generated script, so it is held to
//! the custom property grammar: `--` followed by `[A-Za-z0-9_-]`.

use crate::schema::InsetBridgeConfig;

pub(crate) fn validate_safe_area(errors: &mut Vec<String>, config: &InsetBridgeConfig) {
    if let Err(e) = validate_property_prefix(&config.safe_area.property_prefix) {
        errors.push(format!("safe_area.property_prefix: {e}"));
    }
}

/// Validate a CSS custom property prefix such as `--android-safe-area`.
pub fn validate_property_prefix(prefix: &str) -> Result<(), String> {
    let Some(rest) = prefix.strip_prefix("--") else {
        return Err(format!("'{prefix}' must start with '--'"));
    };
    if rest.is_empty() {
        return Err("prefix needs a name after '--'".into());
    }
    if let Some(ch) = rest
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(format!("invalid character '{ch}' in '{prefix}'"));
    }
    if rest.ends_with('-') {
        return Err(format!("'{prefix}' must not end with '-'"));
    }
    Ok(())
}
