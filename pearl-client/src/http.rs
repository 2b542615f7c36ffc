//! HTTP client for the POS backend REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{OptionGroup, Promotion};

/// HTTP client for making requests to the POS backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Status { status, detail }),
            };
        }

        // Decode from text so a malformed body maps to `Decode`, not to a
        // generic transport error.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ClientError::Decode)
    }

    // ========== Menu API ==========

    /// Get the option groups for a menu item. Requires a bearer token.
    pub async fn menu_option_groups(&self, menu_item_id: i64) -> ClientResult<Vec<OptionGroup>> {
        self.get(&format!("menu/options/{}", menu_item_id)).await
    }

    // ========== Promotions API ==========

    /// Get the currently active promotions
    pub async fn active_promotions(&self) -> ClientResult<Vec<Promotion>> {
        self.get("promotions/Active").await
    }
}
