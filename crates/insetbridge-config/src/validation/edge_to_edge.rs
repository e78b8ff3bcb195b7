//! Validation for the `[edge_to_edge]` section.

use crate::schema::InsetBridgeConfig;

use super::helpers::validate_range;

pub(crate) fn validate_edge_to_edge(errors: &mut Vec<String>, config: &InsetBridgeConfig) {
    let e = &config.edge_to_edge;
    if let Some(v) = e.host_os_version {
        validate_range(errors, "edge_to_edge.host_os_version", v, 1, 1000);
    }
    validate_range(
        errors,
        "edge_to_edge.native_edge_to_edge_min_os",
        e.native_edge_to_edge_min_os,
        1,
        1000,
    );
}
