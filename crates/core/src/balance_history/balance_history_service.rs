use rust_decimal::Decimal;

use super::balance_history_model::{BalanceHistory, BalancePoint, BalanceRange};
use crate::constants::{HISTORY_RANGE_CEILING_FLOOR, TRANSACTION_TYPE_CREDIT};
use crate::transactions::TransactionDetails;

/// Turns an unordered transaction collection into a chronologically
/// ordered cumulative-balance series plus display-range metadata.
///
/// Pure function: no hidden state, identical input gives identical
/// output. Transactions are stable-sorted by date, so same-date entries
/// keep their input order.
pub fn calculate_history(transactions: Vec<TransactionDetails>) -> BalanceHistory {
    let mut sorted = transactions;
    sorted.sort_by_key(|t| t.transaction_date);

    let mut balance = Decimal::ZERO;
    let points: Vec<BalancePoint> = sorted
        .into_iter()
        .map(|transaction| {
            // Credits add to the balance; any other type subtracts.
            if transaction
                .type_name
                .eq_ignore_ascii_case(TRANSACTION_TYPE_CREDIT)
            {
                balance += transaction.amount;
            } else {
                balance -= transaction.amount;
            }
            BalancePoint {
                date: transaction.transaction_date,
                balance,
                transaction,
            }
        })
        .collect();

    let range = display_range(&points);
    BalanceHistory { points, range }
}

/// Derives the display range: balances floored at 0 below and 1000
/// above, padded by 10% of the span, with the zero line placed as a
/// fraction of the padded span.
fn display_range(points: &[BalancePoint]) -> BalanceRange {
    let ceiling = Decimal::from(HISTORY_RANGE_CEILING_FLOOR);
    if points.is_empty() {
        return BalanceRange {
            min_balance: Decimal::ZERO,
            max_balance: ceiling,
            zero_line_position: Decimal::ZERO,
        };
    }

    let mut min = Decimal::ZERO;
    let mut max = ceiling;
    for point in points {
        min = min.min(point.balance);
        max = max.max(point.balance);
    }

    let padding = (max - min) * Decimal::new(1, 1);
    let min = min - padding;
    let max = max + padding;

    let span = max - min;
    let zero_line_position = if span.is_zero() {
        Decimal::ZERO
    } else {
        (Decimal::ZERO - min) / span
    };

    BalanceRange {
        min_balance: min,
        max_balance: max,
        zero_line_position,
    }
}
