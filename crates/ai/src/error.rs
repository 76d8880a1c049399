//! Ingestion pipeline error types.

use ledgerly_core::Error as CoreError;
use thiserror::Error;

/// Natural-language ingestion errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// No identified user; checked before any model call.
    #[error("Authentication required")]
    AuthRequired,

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (transport or API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Model output could not be parsed into the expected shape.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// Core error from ledgerly-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    /// Error code for programmatic handling at API boundaries.
    pub fn code(&self) -> &'static str {
        match self {
            AiError::AuthRequired => "AUTH_REQUIRED",
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::ExtractionFailed(_) => "EXTRACTION_FAILED",
            AiError::Core(_) => "CORE_ERROR",
            AiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
