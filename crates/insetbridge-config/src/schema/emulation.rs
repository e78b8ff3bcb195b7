//! Desktop stand-in for the host's window insets.
//!
//! A desktop window has no status bar, cutout or soft keyboard, so the
//! shell synthesizes inset events from these values. They are given in
//! logical pixels and scaled by the window's scale factor before emission,
//! which is what a real host would report in physical pixels.

use insetbridge_common::Insets;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulationConfig {
    pub system_bars: Insets,
    pub display_cutout: Insets,
    pub ime: Insets,
}
