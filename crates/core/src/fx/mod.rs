//! FX (Foreign Exchange) module - reference currencies and conversion.

mod currency;
mod currency_converter;
mod fx_errors;
mod fx_model;

pub use currency::{currency_by_code, default_currency, supported_currencies, Currency};
pub use currency_converter::CurrencyConverter;
pub use fx_errors::FxError;
pub use fx_model::ExchangeRateTable;
