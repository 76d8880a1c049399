use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::fx::fx_errors::FxError;

/// Sparse pairwise exchange-rate matrix.
///
/// Maps a base currency code to the rates quoted against it (units of
/// target per unit of base). Not guaranteed symmetric or complete; every
/// base present quotes itself at 1.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    rates: HashMap<String, HashMap<String, Decimal>>,
}

impl ExchangeRateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rate for the given pair, also pinning the identity rate
    /// for the base currency.
    pub fn insert(&mut self, from: &str, to: &str, rate: Decimal) -> Result<(), FxError> {
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidExchangeRate(format!(
                "rate {}/{} must be positive, got {}",
                from, to, rate
            )));
        }
        let row = self.rates.entry(from.to_string()).or_default();
        row.insert(to.to_string(), rate);
        row.insert(from.to_string(), Decimal::ONE);
        Ok(())
    }

    /// Returns the direct rate for the pair, if one is quoted.
    pub fn direct_rate(&self, from: &str, to: &str) -> Option<Decimal> {
        self.rates.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Built-in sample rates (a static snapshot; a real deployment would
    /// refresh these from a rate feed).
    pub fn sample() -> Self {
        let d = |mantissa: i64, scale: u32| Decimal::new(mantissa, scale);
        let rows: [(&str, [(&str, Decimal); 9]); 3] = [
            (
                "INR",
                [
                    ("USD", d(12, 3)),
                    ("EUR", d(11, 3)),
                    ("GBP", d(95, 4)),
                    ("JPY", d(179, 2)),
                    ("CAD", d(16, 3)),
                    ("AUD", d(18, 3)),
                    ("CHF", d(11, 3)),
                    ("CNY", d(86, 3)),
                    ("SGD", d(16, 3)),
                ],
            ),
            (
                "USD",
                [
                    ("INR", d(8312, 2)),
                    ("EUR", d(92, 2)),
                    ("GBP", d(79, 2)),
                    ("JPY", d(14950, 2)),
                    ("CAD", d(135, 2)),
                    ("AUD", d(152, 2)),
                    ("CHF", d(88, 2)),
                    ("CNY", d(724, 2)),
                    ("SGD", d(134, 2)),
                ],
            ),
            (
                "EUR",
                [
                    ("INR", d(9045, 2)),
                    ("USD", d(109, 2)),
                    ("GBP", d(86, 2)),
                    ("JPY", d(16280, 2)),
                    ("CAD", d(147, 2)),
                    ("AUD", d(166, 2)),
                    ("CHF", d(96, 2)),
                    ("CNY", d(788, 2)),
                    ("SGD", d(146, 2)),
                ],
            ),
        ];

        let mut table = Self::new();
        for (base, quotes) in rows {
            for (target, rate) in quotes {
                // Sample rates are all positive; insert cannot fail here.
                table
                    .insert(base, target, rate)
                    .unwrap_or_else(|e| log::error!("sample rate rejected: {}", e));
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = ExchangeRateTable::new();
        table.insert("USD", "EUR", dec!(0.92)).unwrap();
        assert_eq!(table.direct_rate("USD", "EUR"), Some(dec!(0.92)));
        assert_eq!(table.direct_rate("EUR", "USD"), None);
    }

    #[test]
    fn test_identity_rate_pinned_for_base() {
        let mut table = ExchangeRateTable::new();
        table.insert("USD", "EUR", dec!(0.92)).unwrap();
        assert_eq!(table.direct_rate("USD", "USD"), Some(Decimal::ONE));
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let mut table = ExchangeRateTable::new();
        assert!(matches!(
            table.insert("USD", "EUR", Decimal::ZERO),
            Err(FxError::InvalidExchangeRate(_))
        ));
        assert!(table.insert("USD", "EUR", dec!(-1.5)).is_err());
    }

    #[test]
    fn test_sample_table_identity_rows() {
        let table = ExchangeRateTable::sample();
        for base in ["INR", "USD", "EUR"] {
            assert_eq!(table.direct_rate(base, base), Some(Decimal::ONE));
        }
        assert_eq!(table.direct_rate("USD", "INR"), Some(dec!(83.12)));
        // Sparse: GBP has no row of its own.
        assert_eq!(table.direct_rate("GBP", "USD"), None);
    }
}
