//! Balance history module - cumulative balance series for charting.

mod balance_history_model;
mod balance_history_service;

pub use balance_history_model::{BalanceHistory, BalancePoint, BalanceRange};
pub use balance_history_service::calculate_history;
