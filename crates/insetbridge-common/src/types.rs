use serde::{Deserialize, Serialize};

/// Default CSS custom property prefix; the four edge properties append
/// `-top`, `-right`, `-bottom` and `-left`.
pub const DEFAULT_PROPERTY_PREFIX: &str = "--android-safe-area";

/// One of the four edges of a content surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in CSS shorthand order (top, right, bottom, left).
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

/// Per-edge pixel obstruction.
///
/// The unit depends on context: host events carry physical pixels, the
/// `[emulation]` config section carries logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
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

    /// Per-edge maximum of `self` and `other`.
    pub fn union(self, other: Insets) -> Insets {
        Insets {
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
        }
    }

    /// Apply `f` to every edge.
    pub fn map(self, mut f: impl FnMut(u32) -> u32) -> Insets {
        Insets {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Whether the host shell applies its own inset-based margins to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginPolicy {
    /// The host shrinks the surface by the system bar insets itself.
    HostAdjusts,
    /// The surface spans edge to edge; insets are handled by the bridge.
    Disabled,
}
