//! Category repository trait.

use super::categories_model::Category;
use crate::errors::Result;

/// Trait defining the contract for Category repository operations.
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Finds a category by name with a case-insensitive exact match,
    /// scoped to categories visible to the user (owned or global).
    fn find_by_name(&self, name: &str, owner_id: &str) -> Result<Option<Category>>;

    /// Lists the categories visible to a user.
    fn list_visible(&self, owner_id: &str) -> Result<Vec<Category>>;
}
