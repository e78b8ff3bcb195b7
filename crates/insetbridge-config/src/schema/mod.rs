//! Configuration schema types for insetbridge.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod emulation;
mod safe_area;
mod surface;
mod system;

pub use emulation::*;
pub use safe_area::*;
pub use surface::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for insetbridge.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InsetBridgeConfig {
    pub surface: SurfaceConfig,
    pub safe_area: SafeAreaConfig,
    pub edge_to_edge: EdgeToEdgeConfig,
    pub emulation: EmulationConfig,
    pub logging: LoggingConfig,
}
