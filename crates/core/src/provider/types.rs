//! Types shared by the provider query clients.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while querying a provider.
///
/// Only transport-level failures are errors. Malformed fields inside a
/// successful response are absorbed by the normalizers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("API did not return valid JSON: {0}")]
    InvalidJson(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// General-index categories that can be searched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TpbCategory {
    HdMovies,
    HdTv,
}

impl TpbCategory {
    /// Numeric category id understood by the API.
    pub fn id(&self) -> u32 {
        match self {
            TpbCategory::HdMovies => 207,
            TpbCategory::HdTv => 208,
        }
    }

    /// Short label used in output file names.
    pub fn label(&self) -> &'static str {
        match self {
            TpbCategory::HdMovies => "movies",
            TpbCategory::HdTv => "tv",
        }
    }
}

/// Issues GET requests and decodes JSON bodies.
///
/// The clients only depend on this seam, so retry policy, timeouts and the
/// HTTP stack stay outside the normalization logic.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` with the given query parameters and decode the body.
    async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, ProviderError>;
}
