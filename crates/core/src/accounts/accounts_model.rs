use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a user's account.
///
/// Accounts are created by an external flow; this core only reads them.
/// `balance` is a stored display figure that the ingestion pipeline never
/// mutates - any bookkeeping against it belongs to the embedding
/// application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub account_type: String,
    pub balance: Decimal,
    pub currency: String,
}

/// How the committer picks the account a batch of drafts lands in.
///
/// There is deliberately no "first account" default: when the owner has
/// more than one account, `Unspecified` fails instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "by", content = "value")]
pub enum AccountSelector {
    /// Target a specific account by store id.
    Id(String),
    /// Target an account by exact name match.
    Name(String),
    /// No account named by the caller. Resolves only when the owner has
    /// exactly one account.
    Unspecified,
}
