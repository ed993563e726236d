//! Advisor error types.

use thiserror::Error;

pub type AdvisorResult<T> = std::result::Result<T, AdvisorError>;

/// Advisor errors.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// No API key configured for the provider.
    #[error("Missing API key for the advisor provider")]
    MissingApiKey,

    /// Provider-side failure (transport, status, or malformed payload).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdvisorError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Stable code string for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::MissingApiKey => "missing_api_key",
            Self::Provider(_) => "provider_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::Provider(err.to_string())
    }
}
