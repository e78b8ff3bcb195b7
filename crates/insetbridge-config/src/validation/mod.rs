//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod edge_to_edge;
mod emulation;
mod helpers;
mod safe_area;
mod surface;


pub use safe_area::validate_property_prefix;

use crate::schema::InsetBridgeConfig;
use insetbridge_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &InsetBridgeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    surface::validate_surface(&mut errors, config);
    safe_area::validate_safe_area(&mut errors, config);
    edge_to_edge::validate_edge_to_edge(&mut errors, config);
    emulation::validate_emulation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
