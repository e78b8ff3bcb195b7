//! Safe-area publishing and edge-to-edge policy settings.

use insetbridge_common::{MarginPolicy, DEFAULT_PROPERTY_PREFIX};
use serde::{Deserialize, Serialize};

/// Safe-area inset publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeAreaConfig {
    /// Run the inset pipeline at all.
    pub enabled: bool,
    /// CSS custom property prefix, e.g. `--android-safe-area`.
    pub property_prefix: String,
    /// Ask the host for transparent status and navigation bars on attach.
    pub transparent_system_bars: bool,
}

impl Default for SafeAreaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            property_prefix: DEFAULT_PROPERTY_PREFIX.into(),
            transparent_system_bars: true,
        }
    }
}

/// How the host's automatic inset margins are configured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarginAdjustment {
    /// Never let the host adjust margins.
    #[default]
    Disable,
    /// Let the host adjust margins on OS versions below the threshold.
    Auto,
    /// Always let the host adjust margins.
    Force,
}

/// Edge-to-edge policy inputs.
///
/// The OS version is an explicit input rather than something detected at
/// runtime: the version at which native safe-area reporting became reliable
/// has moved before and may move again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeToEdgeConfig {
    pub margin_adjustment: MarginAdjustment,
    /// Host OS version (e.g. Android API level). Unknown when absent.
    pub host_os_version: Option<u32>,
    /// First OS version on which the host enforces edge-to-edge layout.
    pub native_edge_to_edge_min_os: u32,
}

impl Default for EdgeToEdgeConfig {
    fn default() -> Self {
        Self {
            margin_adjustment: MarginAdjustment::Disable,
            host_os_version: None,
            native_edge_to_edge_min_os: 35,
        }
    }
}

impl EdgeToEdgeConfig {
    /// Resolve the configured inputs into the policy handed to the host.
    ///
    /// `auto` with an unknown OS version resolves to [`MarginPolicy::Disabled`].
    pub fn margin_policy(&self) -> MarginPolicy {
        match self.margin_adjustment {
            MarginAdjustment::Disable => MarginPolicy::Disabled,
            MarginAdjustment::Force => MarginPolicy::HostAdjusts,
            MarginAdjustment::Auto => match self.host_os_version {
                Some(v) if v < self.native_edge_to_edge_min_os => MarginPolicy::HostAdjusts,
                _ => MarginPolicy::Disabled,
            },
        }
    }
}
