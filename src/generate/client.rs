//! # HTTP Generation Client
//!
//! [`HttpGenerator`] posts the description to the generation service and
//! maps the response onto [`GeneratedContent`] or a [`GenerateError`].
//!
//! No timeout, retry or cancellation is applied: an attempt ends
//! only when the service answers or the connection fails.

use super::{GenerateError, GenerateRequest, GenerationService};
use crate::content::GeneratedContent;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Path of the generation endpoint, relative to the service base URL.
pub const GENERATE_PATH: &str = "/api/generate";

/// [`GenerationService`] backed by a real HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    http: Client,
    base_url: String,
}

impl HttpGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured [`reqwest::Client`] (proxy settings, TLS roots, ...).
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Full URL of the generation endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }
}

#[async_trait]
impl GenerationService for HttpGenerator {
    async fn generate(&self, request: GenerateRequest) -> Result<GeneratedContent, GenerateError> {
        let url = self.endpoint();
        debug!(%url, chars = request.description.len(), "generate: sending request");

        // `.json()` sets `Content-Type: application/json`
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "generate: service returned an error");
            return Err(GenerateError::from_response(status.as_u16(), &body));
        }

        let content: GeneratedContent = serde_json::from_str(&body)?;
        info!(
            status = status.as_u16(),
            features = content.features.len(),
            "generate: content received"
        );
        Ok(content)
    }
}
