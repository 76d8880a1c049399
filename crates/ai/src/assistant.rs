//! The caller-facing prompt pipeline.
//!
//! Orchestrates auth gate → extraction → batch commit and compresses
//! the result into a `{success, message}` outcome with a human-readable
//! message, the shape UI boundaries consume directly.

use log::{error, info};
use std::sync::Arc;

use ledgerly_core::accounts::AccountSelector;
use ledgerly_core::transactions::TransactionServiceTrait;

use crate::error::AiError;
use crate::extractor::{ExtractionResult, TransactionExtractor};

/// Caller-facing result of the whole pipeline.
///
/// On success the message reports how many transactions were added; on
/// clarification it is the model's question; on failure it is a generic
/// human-readable error. Callers wanting structured detail use
/// `TransactionServiceTrait::commit_drafts` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    pub success: bool,
    pub message: String,
}

/// Pipeline from free text to committed ledger records.
pub struct PromptPipeline {
    extractor: TransactionExtractor,
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl PromptPipeline {
    /// Creates a new pipeline.
    pub fn new(
        extractor: TransactionExtractor,
        transaction_service: Arc<dyn TransactionServiceTrait>,
    ) -> Self {
        Self {
            extractor,
            transaction_service,
        }
    }

    /// Handles a free-text prompt for the given user.
    ///
    /// The batch lands in the user's sole account; users with several
    /// accounts must use [`handle_prompt_with_selector`].
    ///
    /// [`handle_prompt_with_selector`]: Self::handle_prompt_with_selector
    pub async fn handle_prompt(&self, user_id: Option<&str>, text: &str) -> PromptOutcome {
        self.handle_prompt_with_selector(user_id, &AccountSelector::Unspecified, text)
            .await
    }

    /// Handles a free-text prompt targeting an explicitly selected
    /// account.
    pub async fn handle_prompt_with_selector(
        &self,
        user_id: Option<&str>,
        selector: &AccountSelector,
        text: &str,
    ) -> PromptOutcome {
        match self.run(user_id, selector, text).await {
            Ok(outcome) => outcome,
            Err(AiError::AuthRequired) => PromptOutcome {
                success: false,
                message: "You must be signed in to add transactions.".to_string(),
            },
            Err(e) => {
                error!("Prompt handling failed ({}): {}", e.code(), e);
                PromptOutcome {
                    success: false,
                    message: "An error occurred while processing your request.".to_string(),
                }
            }
        }
    }

    async fn run(
        &self,
        user_id: Option<&str>,
        selector: &AccountSelector,
        text: &str,
    ) -> Result<PromptOutcome, AiError> {
        // Auth short-circuits before any model call.
        let user_id = user_id.ok_or(AiError::AuthRequired)?;

        match self.extractor.extract(text).await? {
            ExtractionResult::Clarification(question) => Ok(PromptOutcome {
                success: false,
                message: question,
            }),
            ExtractionResult::Transactions(drafts) => {
                let batch = self
                    .transaction_service
                    .commit_drafts(user_id, selector, drafts)
                    .await?;

                if batch.is_success() {
                    info!(
                        "Committed {} transaction(s) for user {}",
                        batch.committed_count(),
                        user_id
                    );
                    Ok(PromptOutcome {
                        success: true,
                        message: format!(
                            "Successfully added {} transactions!",
                            batch.committed_count()
                        ),
                    })
                } else {
                    // Partial outcomes are reported, never collapsed
                    // into an undifferentiated failure.
                    Ok(PromptOutcome {
                        success: false,
                        message: format!(
                            "Added {} of {} transactions; {} failed.",
                            batch.committed_count(),
                            batch.total(),
                            batch.failed_count()
                        ),
                    })
                }
            }
        }
    }
}
