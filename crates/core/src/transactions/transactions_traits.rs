//! Transaction repository and service traits.
//!
//! These traits define the record store contract for transactions and
//! transaction types without any database-specific types.

use async_trait::async_trait;

use super::transactions_model::{
    BatchCommitResult, NewTransaction, Transaction, TransactionDetails, TransactionDraft,
};
use crate::accounts::AccountSelector;
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Inserts one transaction. The store assigns the id and defaults
    /// `transaction_date` to the time of insertion.
    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Lists a user's transactions joined with type and category names,
    /// newest first.
    fn list_details_by_owner(&self, owner_id: &str) -> Result<Vec<TransactionDetails>>;
}

/// Trait defining the contract for TransactionType lookups.
pub trait TransactionTypeRepositoryTrait: Send + Sync {
    /// Finds a type by exact, case-sensitive name match.
    fn find_by_name(&self, name: &str) -> Result<Option<crate::transactions::TransactionType>>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Resolves and persists a batch of drafts for the given owner.
    ///
    /// Drafts are committed independently and concurrently; the returned
    /// result carries one outcome per draft, in input order. An `Err` is
    /// only returned for failures outside any single draft's commit.
    async fn commit_drafts(
        &self,
        owner_id: &str,
        selector: &AccountSelector,
        drafts: Vec<TransactionDraft>,
    ) -> Result<BatchCommitResult>;

    /// Lists a user's transactions with resolved names, newest first.
    fn get_transactions(&self, owner_id: &str) -> Result<Vec<TransactionDetails>>;
}
