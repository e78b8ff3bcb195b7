//! Validation for the `[emulation]` section.

use insetbridge_common::{Edge, Insets};

use crate::schema::InsetBridgeConfig;

use super::helpers::validate_range;

/// Largest inset a single edge may report, in logical px.
const MAX_EMULATED_INSET: u32 = 10_000;

pub(crate) fn validate_emulation(errors: &mut Vec<String>, config: &InsetBridgeConfig) {
    let e = &config.emulation;
    validate_insets(errors, "emulation.system_bars", &e.system_bars);
    validate_insets(errors, "emulation.display_cutout", &e.display_cutout);
    validate_insets(errors, "emulation.ime", &e.ime);
}

fn validate_insets(errors: &mut Vec<String>, section: &str, insets: &Insets) {
    for edge in Edge::ALL {
        let name = format!("{section}.{}", edge.as_str());
        validate_range(errors, &name, insets.get(edge), 0, MAX_EMULATED_INSET);
    }
}
