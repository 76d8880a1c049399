use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;

use super::transactions_model::{
    BatchCommitResult, CommitStatus, DraftCommitResult, NewTransaction, Transaction,
    TransactionDetails, TransactionDraft,
};
use super::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait, TransactionTypeRepositoryTrait,
};
use crate::accounts::{Account, AccountRepositoryTrait, AccountSelector};
use crate::categories::CategoryRepositoryTrait;
use crate::errors::Result;
use crate::transactions::TransactionError;

/// Service resolving transaction drafts against the store's lookup
/// tables and persisting them as a batch.
pub struct TransactionService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    transaction_type_repository: Arc<dyn TransactionTypeRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        transaction_type_repository: Arc<dyn TransactionTypeRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            category_repository,
            transaction_type_repository,
            transaction_repository,
        }
    }

    /// Picks the target account for the owner according to the selector.
    ///
    /// `Unspecified` resolves only when the owner has exactly one
    /// account; with several, the caller must disambiguate.
    fn resolve_account(&self, owner_id: &str, selector: &AccountSelector) -> Result<Account> {
        let mut accounts = self.account_repository.list_by_owner(owner_id)?;
        match selector {
            AccountSelector::Id(id) => accounts
                .into_iter()
                .find(|a| &a.id == id)
                .ok_or_else(|| TransactionError::AccountNotFound(id.clone()).into()),
            AccountSelector::Name(name) => accounts
                .into_iter()
                .find(|a| &a.name == name)
                .ok_or_else(|| TransactionError::AccountNotFound(name.clone()).into()),
            AccountSelector::Unspecified => match accounts.len() {
                0 => Err(TransactionError::AccountNotFound(
                    "the user has no accounts".to_string(),
                )
                .into()),
                1 => Ok(accounts.remove(0)),
                n => Err(TransactionError::AccountAmbiguous(format!(
                    "the user has {} accounts and none was named",
                    n
                ))
                .into()),
            },
        }
    }

    /// Resolves a single draft's references in order, then inserts it.
    async fn try_commit(
        &self,
        owner_id: &str,
        selector: &AccountSelector,
        draft: &TransactionDraft,
    ) -> Result<Transaction> {
        draft.validate()?;

        let account = self.resolve_account(owner_id, selector)?;

        let category = self
            .category_repository
            .find_by_name(&draft.category_name, owner_id)?
            .ok_or_else(|| TransactionError::CategoryNotFound(draft.category_name.clone()))?;

        let transaction_type = self
            .transaction_type_repository
            .find_by_name(&draft.type_name)?
            .ok_or_else(|| TransactionError::TypeNotFound(draft.type_name.clone()))?;

        self.transaction_repository
            .insert(NewTransaction {
                account_id: account.id,
                type_id: transaction_type.id,
                category_id: category.id,
                amount: draft.amount,
                description: draft.description.clone(),
            })
            .await
    }

    async fn commit_one(
        &self,
        owner_id: &str,
        selector: &AccountSelector,
        draft: TransactionDraft,
    ) -> DraftCommitResult {
        match self.try_commit(owner_id, selector, &draft).await {
            Ok(transaction) => DraftCommitResult {
                draft,
                status: CommitStatus::Committed { transaction },
            },
            Err(e) => {
                warn!("Draft \"{}\" not committed: {}", draft.description, e);
                DraftCommitResult {
                    draft,
                    status: CommitStatus::Failed {
                        error: e.to_string(),
                    },
                }
            }
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn commit_drafts(
        &self,
        owner_id: &str,
        selector: &AccountSelector,
        drafts: Vec<TransactionDraft>,
    ) -> Result<BatchCommitResult> {
        debug!(
            "Committing batch of {} drafts for owner {}",
            drafts.len(),
            owner_id
        );

        // One independent insert attempt per draft, no cross-draft
        // ordering guarantee and no shared lock.
        let results = join_all(
            drafts
                .into_iter()
                .map(|draft| self.commit_one(owner_id, selector, draft)),
        )
        .await;

        let batch = BatchCommitResult { results };
        if batch.committed_count() > 0 {
            // Cached transaction/dashboard views are stale from here on;
            // invalidation is the embedding application's concern.
            debug!(
                "{} transaction(s) inserted; downstream views need refresh",
                batch.committed_count()
            );
        }
        Ok(batch)
    }

    fn get_transactions(&self, owner_id: &str) -> Result<Vec<TransactionDetails>> {
        self.transaction_repository.list_details_by_owner(owner_id)
    }
}
