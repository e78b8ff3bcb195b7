//! Validation for the `[surface]` section.

use crate::schema::InsetBridgeConfig;

use super::helpers::validate_range;

pub(crate) fn validate_surface(errors: &mut Vec<String>, config: &InsetBridgeConfig) {
    let s = &config.surface;
    if s.url.is_some() && s.html.is_some() {
        errors.push("surface.url and surface.html are mutually exclusive".into());
    }
    validate_range(errors, "surface.width", s.width, 100, 10_000);
    validate_range(errors, "surface.height", s.height, 100, 10_000);
}
