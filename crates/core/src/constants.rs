//! Shared constants for the Ledgerly core.

/// Currency every monetary value is stored in; display conversion starts here.
pub const BASE_CURRENCY: &str = "INR";

/// Pivot currency for two-hop conversion when no direct rate exists.
pub const PIVOT_CURRENCY: &str = "USD";

/// Canonical transaction type names. Matched by exact, case-sensitive name.
pub const TRANSACTION_TYPE_DEBIT: &str = "debit";
pub const TRANSACTION_TYPE_CREDIT: &str = "credit";

/// The category set the extraction prompt instructs the model to use.
/// These are seeded as global categories by the in-memory store.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Groceries",
    "Salary",
    "Transport",
    "Utilities",
    "Rent",
    "Other",
];

/// Floor applied to the top of the balance-history display range.
pub const HISTORY_RANGE_CEILING_FLOOR: i64 = 1000;
