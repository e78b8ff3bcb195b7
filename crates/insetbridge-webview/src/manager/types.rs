/// Configuration for creating the content WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent, so content
    /// can draw under translucent system bars.
    pub transparent: bool,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_one_source() {
        let c = WebViewConfig::with_url("https://localhost/");
        assert_eq!(c.url.as_deref(), Some("https://localhost/"));
        assert!(c.html.is_none());
        assert!(c.transparent);

        let c = WebViewConfig::with_html("<p></p>");
        assert!(c.url.is_none());
        assert_eq!(c.html.as_deref(), Some("<p></p>"));
    }
}
