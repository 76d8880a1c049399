//! Supported currency reference data.

use serde::Serialize;

/// A supported display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// 3-letter ISO code, e.g. "USD".
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// BCP 47 locale tag used by display layers for number formatting.
    pub locale: &'static str,
}

/// The immutable set of currencies amounts can be displayed in.
const SUPPORTED_CURRENCIES: [Currency; 10] = [
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹", locale: "en-IN" },
    Currency { code: "USD", name: "US Dollar", symbol: "$", locale: "en-US" },
    Currency { code: "EUR", name: "Euro", symbol: "€", locale: "de-DE" },
    Currency { code: "GBP", name: "British Pound", symbol: "£", locale: "en-GB" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥", locale: "ja-JP" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$", locale: "en-CA" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$", locale: "en-AU" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF", locale: "de-CH" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥", locale: "zh-CN" },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "S$", locale: "en-SG" },
];

/// All supported currencies, default first.
pub fn supported_currencies() -> &'static [Currency] {
    &SUPPORTED_CURRENCIES
}

/// The process-wide default display currency.
pub fn default_currency() -> &'static Currency {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|c| c.code == crate::constants::BASE_CURRENCY)
        .unwrap_or(&SUPPORTED_CURRENCIES[0])
}

/// Looks up a currency by code, falling back to the default when the code
/// is not in the supported set.
pub fn currency_by_code(code: &str) -> &'static Currency {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .unwrap_or_else(default_currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(currency_by_code("JPY").symbol, "¥");
        assert_eq!(currency_by_code("GBP").locale, "en-GB");
    }

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        assert_eq!(currency_by_code("XYZ").code, "INR");
        assert_eq!(*currency_by_code(""), *default_currency());
    }
}
