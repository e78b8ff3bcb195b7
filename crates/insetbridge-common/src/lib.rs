pub mod errors;
pub mod types;

pub use errors::{BridgeError, ConfigError, SurfaceError};
pub use types::{Edge, Insets, MarginPolicy, DEFAULT_PROPERTY_PREFIX};

pub type Result<T> = std::result::Result<T, BridgeError>;
