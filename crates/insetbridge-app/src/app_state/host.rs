//! Desktop host shell: window chrome, density, and synthesized insets.
//!
//! A desktop window reports no system bars of its own, so the shell plays
//! the host's part. Inset events are synthesized from `[emulation]` and
//! the margin policy decides whether the shell itself shrinks the content
//! to clear the system bars.

use winit::window::Window;

use insetbridge_common::{Insets, MarginPolicy};
use insetbridge_config::schema::EmulationConfig;
use insetbridge_webview::safe_area::{DensityFactor, DensitySource, HostChrome, RawInsetEvent};

// =============================================================================
// CHROME
// =============================================================================

/// Window chrome state recorded by the one-time host setup.
#[derive(Debug, Default)]
pub(super) struct DesktopChrome {
    pub transparent_bars: bool,
    pub margin_policy: Option<MarginPolicy>,
}

impl DesktopChrome {
    /// Effective margin policy; the default before setup has run.
    pub fn policy(&self) -> MarginPolicy {
        self.margin_policy.unwrap_or(MarginPolicy::Disabled)
    }
}

impl HostChrome for DesktopChrome {
    fn request_transparent_system_bars(&mut self) {
        self.transparent_bars = true;
    }

    fn set_margin_policy(&mut self, policy: MarginPolicy) {
        self.margin_policy = Some(policy);
    }
}

// =============================================================================
// DENSITY
// =============================================================================

/// Density read from the window's scale factor at call time.
pub(super) struct WindowDensity<'a>(pub Option<&'a Window>);

impl DensitySource for WindowDensity<'_> {
    fn density(&self) -> DensityFactor {
        let Some(window) = self.0 else {
            return DensityFactor::ONE;
        };
        let scale = window.scale_factor();
        DensityFactor::new(scale).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "bad window scale factor, assuming 1.0");
            DensityFactor::ONE
        })
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Scale logical insets to physical pixels.
fn to_physical(insets: Insets, scale: f64) -> Insets {
    insets.map(|v| (f64::from(v) * scale).round() as u32)
}

/// Build the host inset notification for a window at `scale`.
pub(super) fn emulated_insets(emulation: &EmulationConfig, scale: f64) -> RawInsetEvent {
    RawInsetEvent {
        system_bars: to_physical(emulation.system_bars, scale),
        display_cutout: to_physical(emulation.display_cutout, scale),
        ime: to_physical(emulation.ime, scale),
    }
}

/// Content bounds inside a `width` x `height` physical window.
///
/// Under [`MarginPolicy::HostAdjusts`] the content is inset by the system
/// bars, as the host would; otherwise it fills the window.
pub(super) fn content_bounds(
    width: u32,
    height: u32,
    policy: MarginPolicy,
    system_bars: Insets,
) -> wry::Rect {
    let margins = match policy {
        MarginPolicy::HostAdjusts => system_bars,
        MarginPolicy::Disabled => Insets::ZERO,
    };
    let w = width.saturating_sub(margins.left.saturating_add(margins.right));
    let h = height.saturating_sub(margins.top.saturating_add(margins.bottom));
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(
            i32::try_from(margins.left).unwrap_or(i32::MAX),
            i32::try_from(margins.top).unwrap_or(i32::MAX),
        )),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(w, h)),
    }
}

// =============================================================================
// TESTS
// =============================================================================
