//! Client configuration

/// Connection settings for the three backend services.
///
/// The dashboard, customer and session endpoints share one base URL; the
/// product catalog (including uploads) and the auth service each have
/// their own. The bearer token is part of the configuration so callers
/// never reach into ambient storage for it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Dashboard / customer / session API base URL
    pub api_url: String,

    /// Product catalog API base URL
    pub catalog_url: String,

    /// Auth service base URL
    pub auth_url: String,

    /// Bearer token for authenticated requests
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration with every service on the same base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_url: base_url.clone(),
            catalog_url: base_url.clone(),
            auth_url: base_url,
            token: None,
            timeout: 30,
        }
    }

    /// Set the product catalog base URL
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    /// Set the auth service base URL
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
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
    pub fn build(self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
            .with_catalog_url("http://localhost:3030")
            .with_auth_url("http://localhost:8080")
    }
}
