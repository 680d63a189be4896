//! HTTP client core
//!
//! Request building, bearer-token attachment and response normalization.
//! The typed endpoint wrappers live in [`crate::api`].

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// Longest error-body excerpt carried into an error message.
const ERROR_BODY_LIMIT: usize = 300;

/// HTTP client for the console's backend services
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Set the authentication token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.token = Some(token.into());
    }

    /// Clear the authentication token
    pub fn clear_token(&mut self) {
        self.config.token = None;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.config.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    // ========== URL building ==========

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    pub(crate) fn catalog_url(&self, path: &str) -> String {
        format!("{}{}", self.config.catalog_url.trim_end_matches('/'), path)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}{}", self.config.auth_url.trim_end_matches('/'), path)
    }

    // ========== Request primitives ==========

    /// Make a GET request
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: String) -> ClientResult<T> {
        let mut request = self.client.get(&url).header("Accept", "application/json");

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: String,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a form-urlencoded body
    pub(crate) async fn post_form<T: DeserializeOwned, B: Serialize>(
        &self,
        url: String,
        form: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(&url).form(form).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart body
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: String,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let mut request = self.client.post(&url).multipart(form);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    // ========== Response normalization ==========

    /// Map the HTTP response into the expected JSON type or a
    /// [`ClientError`].
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::FORBIDDEN => ClientError::Forbidden(trim_body(&text)),
                StatusCode::NOT_FOUND => ClientError::NotFound(trim_body(&text)),
                StatusCode::BAD_REQUEST => ClientError::Validation(trim_body(&text)),
                _ => ClientError::Status {
                    status: status.as_u16(),
                    body: trim_body(&text),
                },
            });
        }

        // A proxy or error page can answer 2xx with HTML; refuse to guess.
        if !content_type.contains("application/json") {
            tracing::warn!(%content_type, "expected JSON response");
            return Err(ClientError::InvalidResponse(format!(
                "expected JSON, got content type {:?}",
                content_type
            )));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse failed: {}", e)))
    }
}

/// Trim an error body to a displayable excerpt.
fn trim_body(text: &str) -> String {
    if text.chars().count() <= ERROR_BODY_LIMIT {
        text.to_string()
    } else {
        text.chars().take(ERROR_BODY_LIMIT).collect()
    }
}
