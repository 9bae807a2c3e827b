//! # Generation Module
//!
//! The boundary to the external generation service: the request/response
//! types, the error taxonomy, and the [`GenerationService`] seam.
//!
//! ## Protocol
//!
//! | Step | Detail |
//! |------|--------|
//! | Request | `POST {base}/api/generate`, JSON body `{"description": ...}` |
//! | Success | any 2xx, body decoded as [`GeneratedContent`] |
//! | Failure | any other status, body read as plain text |
//!
//! [`HttpGenerator`] is the production implementation. Tests substitute
//! their own [`GenerationService`] so no network is needed.

pub mod client;

pub use client::{HttpGenerator, GENERATE_PATH};

use crate::content::GeneratedContent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when the service fails without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate content";

/// JSON body of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub description: String,
}

/// Why a generation attempt failed. The `Display` text is what the user sees.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Request { status: u16, message: String },
    /// The request never completed (connection refused, reset, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// A success response whose body is not valid content.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl GenerateError {
    /// Build a [`GenerateError::Request`] from a status and the raw body text,
    /// falling back to [`FALLBACK_ERROR_MESSAGE`] when the body is blank.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            body.to_string()
        };
        Self::Request { status, message }
    }
}

/// Anything that can turn a description into landing-page content.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GeneratedContent, GenerateError>;
}
