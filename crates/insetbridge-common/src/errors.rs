use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to write into a content surface's style environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The surface was torn down between scheduling and executing the write.
    #[error("content surface unavailable")]
    Unavailable,

    #[error("script evaluation failed: {0}")]
    Script(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("inset observer is already attached to a surface")]
    AlreadyAttached,

    #[error("inset event source already has a subscriber")]
    SourceBusy,

    #[error("invalid density factor: {0}")]
    InvalidDensity(f64),

    #[error("webview error: {0}")]
    WebView(String),
}
