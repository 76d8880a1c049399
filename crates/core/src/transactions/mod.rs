//! Transactions module - domain models, services, and traits.

mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use transactions_errors::TransactionError;
pub use transactions_model::{
    BatchCommitResult, CommitStatus, DraftCommitResult, NewTransaction, Transaction,
    TransactionDetails, TransactionDraft, TransactionType,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait, TransactionTypeRepositoryTrait,
};
