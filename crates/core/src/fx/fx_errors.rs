use thiserror::Error;

/// Custom error type for FX-related operations
#[derive(Debug, Error)]
pub enum FxError {
    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),
}
