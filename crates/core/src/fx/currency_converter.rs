use log::warn;
use rust_decimal::Decimal;

use crate::constants::PIVOT_CURRENCY;
use crate::fx::fx_model::ExchangeRateTable;

/// A calculator for currency conversions over a static rate table.
///
/// Pure and side-effect free; safe to share across any number of callers.
pub struct CurrencyConverter {
    table: ExchangeRateTable,
}

impl CurrencyConverter {
    /// Creates a new `CurrencyConverter` over the given rate table.
    pub fn new(table: ExchangeRateTable) -> Self {
        Self { table }
    }

    /// Creates a converter over the built-in sample rates.
    pub fn with_sample_rates() -> Self {
        Self::new(ExchangeRateTable::sample())
    }

    /// Converts an amount from one currency to another.
    ///
    /// Same-currency conversion is exact. When no direct rate is quoted,
    /// the amount is routed through the USD pivot; a missing hop rate
    /// falls back to 1:1, which keeps the result finite but can be
    /// materially wrong for unquoted pairs. The fallback is logged so it
    /// is observable in production.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        if from == to {
            return amount;
        }

        if let Some(rate) = self.table.direct_rate(from, to) {
            return amount * rate;
        }

        let to_pivot = self
            .table
            .direct_rate(from, PIVOT_CURRENCY)
            .unwrap_or_else(|| {
                warn!(
                    "no {}/{} rate; pivot conversion assumes 1:1",
                    from, PIVOT_CURRENCY
                );
                Decimal::ONE
            });
        let from_pivot = self
            .table
            .direct_rate(PIVOT_CURRENCY, to)
            .unwrap_or_else(|| {
                warn!(
                    "no {}/{} rate; pivot conversion assumes 1:1",
                    PIVOT_CURRENCY, to
                );
                Decimal::ONE
            });

        amount * to_pivot * from_pivot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_same_currency_is_exact() {
        let converter = CurrencyConverter::with_sample_rates();
        for code in ["INR", "USD", "EUR", "GBP", "JPY"] {
            assert_eq!(converter.convert(dec!(123.45), code, code), dec!(123.45));
        }
    }

    #[test]
    fn test_direct_conversion() {
        let converter = CurrencyConverter::with_sample_rates();
        assert_eq!(
            converter.convert(Decimal::ONE_HUNDRED, "USD", "INR"),
            dec!(8312.00)
        );
    }

    #[test]
    fn test_direct_rate_preferred_over_pivot() {
        // EUR quotes JPY directly in the sample table.
        let converter = CurrencyConverter::with_sample_rates();
        assert_eq!(
            converter.convert(Decimal::ONE_HUNDRED, "EUR", "JPY"),
            dec!(16280.00)
        );
    }

    #[test]
    fn test_pivot_conversion_when_direct_rate_missing() {
        let mut table = ExchangeRateTable::new();
        table.insert("EUR", "USD", dec!(1.09)).unwrap();
        table.insert("USD", "JPY", dec!(149.50)).unwrap();
        let converter = CurrencyConverter::new(table);

        // 100 * 1.09 * 149.50
        assert_eq!(
            converter.convert(Decimal::ONE_HUNDRED, "EUR", "JPY"),
            dec!(16295.50)
        );
    }

    #[test]
    fn test_missing_pivot_hop_defaults_to_one() {
        let mut table = ExchangeRateTable::new();
        table.insert("EUR", "USD", dec!(1.09)).unwrap();
        let converter = CurrencyConverter::new(table);

        // No USD/JPY quote: second hop degrades to 1:1.
        assert_eq!(
            converter.convert(Decimal::ONE_HUNDRED, "EUR", "JPY"),
            dec!(109.00)
        );
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let converter = CurrencyConverter::with_sample_rates();
        let first = converter.convert(dec!(250), "EUR", "GBP");
        let second = converter.convert(dec!(250), "EUR", "GBP");
        assert_eq!(first, second);
    }
}
