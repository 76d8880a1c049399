use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionDetails;

/// One point of the cumulative balance series: the running balance after
/// the source transaction is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePoint {
    pub date: DateTime<Utc>,
    pub balance: Decimal,
    pub transaction: TransactionDetails,
}

/// Display-range metadata for rendering the series against a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRange {
    pub min_balance: Decimal,
    pub max_balance: Decimal,
    /// Where the zero line sits between min and max, as a fraction in
    /// [0, 1] measured from the bottom.
    pub zero_line_position: Decimal,
}

/// The chronologically ordered balance series plus its display range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceHistory {
    pub points: Vec<BalancePoint>,
    pub range: BalanceRange,
}
