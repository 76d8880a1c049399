use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionError;

/// Domain model representing a persisted ledger transaction.
///
/// `amount` is always a magnitude; whether it increases or decreases a
/// balance is determined by the transaction's type, never by sign.
/// Transactions are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub type_id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
}

/// A transaction joined with its resolved type and category names,
/// as returned by the listing read path and consumed by the
/// balance-history aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub type_name: String,
    pub category_name: String,
}

/// A fixed lookup row: canonically `debit` or `credit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionType {
    pub id: String,
    pub name: String,
}

/// Input model for inserting a transaction once all references resolved.
/// The store assigns the id and defaults `transaction_date` to now.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub account_id: String,
    pub type_id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub description: String,
}

/// An unpersisted candidate transaction parsed from natural language.
///
/// Names are symbolic until the committer resolves them against the
/// store's lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub amount: Decimal,
    pub description: String,
    pub type_name: String,
    pub category_name: String,
}

impl TransactionDraft {
    /// Validates the draft data before any reference resolution.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidDraft(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        if self.description.trim().is_empty() {
            return Err(TransactionError::InvalidDraft(
                "description cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of committing a single draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum CommitStatus {
    Committed { transaction: Transaction },
    Failed { error: String },
}

/// One entry per input draft, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftCommitResult {
    pub draft: TransactionDraft,
    #[serde(flatten)]
    pub status: CommitStatus,
}

impl DraftCommitResult {
    pub fn is_committed(&self) -> bool {
        matches!(self.status, CommitStatus::Committed { .. })
    }

    /// The failure message, if this draft failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CommitStatus::Failed { error } => Some(error),
            CommitStatus::Committed { .. } => None,
        }
    }
}

/// Result of a batch commit. Drafts are committed independently; nothing
/// is rolled back on sibling failure, so per-draft outcomes are always
/// surfaced rather than collapsed into a single verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCommitResult {
    pub results: Vec<DraftCommitResult>,
}

impl BatchCommitResult {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn committed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_committed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.committed_count()
    }

    /// True when every draft in the batch committed.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(amount: Decimal) -> TransactionDraft {
        TransactionDraft {
            amount,
            description: "coffee".to_string(),
            type_name: "debit".to_string(),
            category_name: "Other".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_positive_amount() {
        assert!(draft(dec!(3.50)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        assert!(matches!(
            draft(Decimal::ZERO).validate(),
            Err(TransactionError::InvalidDraft(_))
        ));
        assert!(draft(dec!(-10)).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_description() {
        let mut d = draft(dec!(5));
        d.description = "   ".to_string();
        assert!(matches!(
            d.validate(),
            Err(TransactionError::InvalidDraft(_))
        ));
    }
}
