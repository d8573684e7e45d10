//! Client configuration.

use reqwest::Url;
use thiserror::Error;

/// Base URL used when `SALARYCAST_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Environment variable overriding the base URL (native hosts only).
pub const API_URL_ENV: &str = "SALARYCAST_API_URL";

/// Fixed prediction endpoint.
pub const PREDICT_PATH: &str = "/predict";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

/// Where predictions are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    predict_url: Url,
}

impl ClientConfig {
    /// Resolve the prediction endpoint against `base_url`.
    ///
    /// In the browser this is the page origin; natively it comes from
    /// [`ClientConfig::from_env`].
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        let predict_url = base.join(PREDICT_PATH).map_err(|e| invalid(e.to_string()))?;

        Ok(Self { predict_url })
    }

    /// Read `SALARYCAST_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| {
            tracing::info!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        Self::new(&base_url)
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }
}
