use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::accounts::{Account, AccountRepositoryTrait};
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::constants::{DEFAULT_CATEGORIES, TRANSACTION_TYPE_CREDIT, TRANSACTION_TYPE_DEBIT};
use crate::errors::{DatabaseError, Result};
use crate::transactions::{
    NewTransaction, Transaction, TransactionDetails, TransactionRepositoryTrait, TransactionType,
    TransactionTypeRepositoryTrait,
};

/// In-process record store implementing every repository trait.
///
/// Suitable for tests and embedded use. All maps are guarded by their
/// own `RwLock`; reads never block each other and concurrent inserts in
/// a batch serialize only on the transactions map.
#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, Account>>,
    categories: RwLock<HashMap<String, Category>>,
    transaction_types: RwLock<HashMap<String, TransactionType>>,
    transactions: RwLock<HashMap<String, Transaction>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the canonical transaction types and
    /// the global category set.
    pub fn with_defaults() -> Self {
        let store = Self::new();
        for name in [TRANSACTION_TYPE_DEBIT, TRANSACTION_TYPE_CREDIT] {
            store.add_transaction_type(name);
        }
        for name in DEFAULT_CATEGORIES {
            store.add_category(name, None);
        }
        store
    }

    /// Registers an account (account creation itself is an external
    /// flow; the store only needs to hold the rows).
    pub fn add_account(
        &self,
        owner_id: &str,
        name: &str,
        account_type: &str,
        currency: &str,
    ) -> Account {
        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            account_type: account_type.to_string(),
            balance: Decimal::ZERO,
            currency: currency.to_string(),
        };
        self.accounts
            .write()
            .unwrap()
            .insert(account.id.clone(), account.clone());
        account
    }

    /// Registers a category; a `None` owner makes it global.
    pub fn add_category(&self, name: &str, owner_id: Option<&str>) -> Category {
        let category = Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            owner_id: owner_id.map(str::to_string),
        };
        self.categories
            .write()
            .unwrap()
            .insert(category.id.clone(), category.clone());
        category
    }

    fn add_transaction_type(&self, name: &str) -> TransactionType {
        let transaction_type = TransactionType {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
        };
        self.transaction_types
            .write()
            .unwrap()
            .insert(transaction_type.id.clone(), transaction_type.clone());
        transaction_type
    }
}

impl AccountRepositoryTrait for MemoryStore {
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .read()
            .unwrap()
            .values()
            .filter(|a| a.owner_id == owner_id)
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }
}

impl CategoryRepositoryTrait for MemoryStore {
    fn find_by_name(&self, name: &str, owner_id: &str) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .unwrap()
            .values()
            .find(|c| c.is_visible_to(owner_id) && c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    fn list_visible(&self, owner_id: &str) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .categories
            .read()
            .unwrap()
            .values()
            .filter(|c| c.is_visible_to(owner_id))
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

impl TransactionTypeRepositoryTrait for MemoryStore {
    fn find_by_name(&self, name: &str) -> Result<Option<TransactionType>> {
        Ok(self
            .transaction_types
            .read()
            .unwrap()
            .values()
            .find(|t| t.name == name)
            .cloned())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for MemoryStore {
    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        // Referential integrity: a transaction row may only point at
        // rows that exist.
        if !self
            .accounts
            .read()
            .unwrap()
            .contains_key(&new_transaction.account_id)
        {
            return Err(DatabaseError::WriteFailed(format!(
                "account {} does not exist",
                new_transaction.account_id
            ))
            .into());
        }
        if !self
            .categories
            .read()
            .unwrap()
            .contains_key(&new_transaction.category_id)
        {
            return Err(DatabaseError::WriteFailed(format!(
                "category {} does not exist",
                new_transaction.category_id
            ))
            .into());
        }
        if !self
            .transaction_types
            .read()
            .unwrap()
            .contains_key(&new_transaction.type_id)
        {
            return Err(DatabaseError::WriteFailed(format!(
                "transaction type {} does not exist",
                new_transaction.type_id
            ))
            .into());
        }
        if new_transaction.amount < Decimal::ZERO {
            return Err(DatabaseError::WriteFailed(
                "amount must be a non-negative magnitude".to_string(),
            )
            .into());
        }

        let transaction = Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: new_transaction.account_id,
            type_id: new_transaction.type_id,
            category_id: new_transaction.category_id,
            amount: new_transaction.amount,
            description: new_transaction.description,
            transaction_date: Utc::now(),
        };
        self.transactions
            .write()
            .unwrap()
            .insert(transaction.id.clone(), transaction.clone());
        Ok(transaction)
    }

    fn list_details_by_owner(&self, owner_id: &str) -> Result<Vec<TransactionDetails>> {
        let accounts = self.accounts.read().unwrap();
        let categories = self.categories.read().unwrap();
        let transaction_types = self.transaction_types.read().unwrap();
        let transactions = self.transactions.read().unwrap();

        let mut details: Vec<TransactionDetails> = transactions
            .values()
            .filter(|t| {
                accounts
                    .get(&t.account_id)
                    .is_some_and(|a| a.owner_id == owner_id)
            })
            .map(|t| {
                let type_name = transaction_types
                    .get(&t.type_id)
                    .map(|tt| tt.name.clone())
                    .unwrap_or_default();
                let category_name = categories
                    .get(&t.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                TransactionDetails {
                    id: t.id.clone(),
                    account_id: t.account_id.clone(),
                    amount: t.amount,
                    description: t.description.clone(),
                    transaction_date: t.transaction_date,
                    type_name,
                    category_name,
                }
            })
            .collect();

        // Newest first, matching the transactions listing read path.
        details.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_seed_types_and_global_categories() {
        let store = MemoryStore::with_defaults();
        assert!(TransactionTypeRepositoryTrait::find_by_name(&store, "debit")
            .unwrap()
            .is_some());
        assert!(TransactionTypeRepositoryTrait::find_by_name(&store, "credit")
            .unwrap()
            .is_some());
        assert!(CategoryRepositoryTrait::find_by_name(&store, "Groceries", "anyone")
            .unwrap()
            .is_some());
        assert_eq!(store.list_visible("anyone").unwrap().len(), 6);
    }

    #[test]
    fn test_category_lookup_ignores_case_and_respects_ownership() {
        let store = MemoryStore::new();
        store.add_category("Groceries", None);
        store.add_category("Hobby", Some("user-2"));

        let found = CategoryRepositoryTrait::find_by_name(&store, "groceries", "user-1").unwrap();
        assert!(found.is_some());
        let hidden = CategoryRepositoryTrait::find_by_name(&store, "Hobby", "user-1").unwrap();
        assert!(hidden.is_none());
        let visible = CategoryRepositoryTrait::find_by_name(&store, "hobby", "user-2").unwrap();
        assert!(visible.is_some());
    }

    #[tokio::test]
    async fn test_insert_requires_existing_references() {
        let store = MemoryStore::with_defaults();
        let result = store
            .insert(NewTransaction {
                account_id: "missing".to_string(),
                type_id: "missing".to_string(),
                category_id: "missing".to_string(),
                amount: dec!(10),
                description: "orphan".to_string(),
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_insert_and_list_details_newest_first() {
        let store = MemoryStore::with_defaults();
        let account = store.add_account("user-1", "Everyday", "checking", "INR");
        let category = CategoryRepositoryTrait::find_by_name(&store, "Groceries", "user-1")
            .unwrap()
            .unwrap();
        let debit = TransactionTypeRepositoryTrait::find_by_name(&store, "debit")
            .unwrap()
            .unwrap();

        for description in ["older", "newer"] {
            store
                .insert(NewTransaction {
                    account_id: account.id.clone(),
                    type_id: debit.id.clone(),
                    category_id: category.id.clone(),
                    amount: dec!(42),
                    description: description.to_string(),
                })
                .await
                .unwrap();
        }

        let details = store.list_details_by_owner("user-1").unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].type_name, "debit");
        assert_eq!(details[0].category_name, "Groceries");
        assert!(details[0].transaction_date >= details[1].transaction_date);

        // Another owner sees nothing.
        assert!(store.list_details_by_owner("user-2").unwrap().is_empty());
    }
}
