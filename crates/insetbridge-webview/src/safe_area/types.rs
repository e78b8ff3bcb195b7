use insetbridge_common::{BridgeError, Edge, Insets, Result};

/// The merged obstruction on each edge, in physical pixels.
///
/// Replaced wholesale on every host notification; never edited in place.
pub type InsetSnapshot = Insets;

/// One inset-change notification from the host windowing system.
///
/// Each category is reported separately, in physical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawInsetEvent {
    /// Status bar and navigation bar.
    pub system_bars: Insets,
    pub display_cutout: Insets,
    /// On-screen keyboard.
    pub ime: Insets,
}

impl RawInsetEvent {
    /// Per-edge maximum across all categories.
    ///
    /// A cutout narrower than the status bar, or a keyboard covering the
    /// navigation bar, still yields the largest obstruction on that edge.
    pub fn merged(&self) -> InsetSnapshot {
        self.system_bars
            .union(self.display_cutout)
            .union(self.ime)
    }
}

/// Ratio of physical to logical pixels. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityFactor(f64);

impl DensityFactor {
    pub const ONE: DensityFactor = DensityFactor(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(BridgeError::InvalidDensity(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Convert a physical pixel count to logical pixels.
    ///
    /// Rounds to the nearest integer with ties away from zero, which for
    /// non-negative input is the same as rounding half up.
    pub fn to_logical(self, physical: u32) -> u32 {
        // Non-negative and finite, so the saturating cast never truncates sign.
        (f64::from(physical) / self.0).round() as u32
    }
}

/// Insets in logical pixels, derived per publish and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalInsets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl LogicalInsets {
    pub fn from_physical(snapshot: InsetSnapshot, density: DensityFactor) -> Self {
        Self {
            top: density.to_logical(snapshot.top),
            right: density.to_logical(snapshot.right),
            bottom: density.to_logical(snapshot.bottom),
            left: density.to_logical(snapshot.left),
        }
    }

    pub fn get(&self, edge: Edge) -> u32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}
