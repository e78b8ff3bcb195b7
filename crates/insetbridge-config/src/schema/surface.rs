//! Content surface (window + webview) settings.

use serde::{Deserialize, Serialize};

/// The single content surface hosted by the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Inline HTML to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Window title.
    pub title: String,
    /// Enable webview dev tools.
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Initial window size in logical pixels.
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            title: "insetbridge".into(),
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("insetbridge/{}", env!("CARGO_PKG_VERSION"))),
            width: 412,
            height: 915,
        }
    }
}
