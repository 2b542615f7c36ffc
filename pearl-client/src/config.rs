//! Client configuration

/// Client configuration for connecting to the POS backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PEARL_API_BASE | http://localhost:8080 | API base URL |
/// | PEARL_API_TOKEN | (none) | Bearer token for authenticated endpoints |
/// | PEARL_TIMEOUT | 30 | Request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authenticated endpoints.
    ///
    /// Passed in explicitly; the client never reads token storage itself.
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("PEARL_API_BASE").unwrap_or_else(|_| "http://localhost:8080".into()),
        );
        config.token = std::env::var("PEARL_API_TOKEN").ok();
        config.timeout = std::env::var("PEARL_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
