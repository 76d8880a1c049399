//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use super::accounts_model::Account;
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations handle the persistence of account data; account
/// creation is owned by an external flow, so only reads are specified.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Lists the accounts owned by a user.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
pub trait AccountServiceTrait: Send + Sync {
    /// Lists the accounts owned by a user, for dashboard display.
    fn list_accounts(&self, owner_id: &str) -> Result<Vec<Account>>;
}
