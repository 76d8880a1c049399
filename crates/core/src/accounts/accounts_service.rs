use log::debug;
use std::sync::Arc;

use super::accounts_model::Account;
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for reading accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl AccountServiceTrait for AccountService {
    /// Lists all accounts owned by a user
    fn list_accounts(&self, owner_id: &str) -> Result<Vec<Account>> {
        debug!("Listing accounts for owner {}", owner_id);
        self.repository.list_by_owner(owner_id)
    }
}
