use thiserror::Error;

/// Custom error type for transaction-related operations
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Could not find a user account: {0}")]
    AccountNotFound(String),
    #[error("More than one account matches; specify which one: {0}")]
    AccountAmbiguous(String),
    #[error("Category \"{0}\" not found")]
    CategoryNotFound(String),
    #[error("Transaction type \"{0}\" not found")]
    TypeNotFound(String),
    #[error("Invalid draft: {0}")]
    InvalidDraft(String),
}

impl From<TransactionError> for String {
    fn from(error: TransactionError) -> Self {
        error.to_string()
    }
}
