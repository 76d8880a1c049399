use serde::{Deserialize, Serialize};

/// A spending/income category a transaction is filed under.
///
/// A category with no owner is global and visible to every user;
/// otherwise it is private to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub owner_id: Option<String>,
}

impl Category {
    pub fn is_global(&self) -> bool {
        self.owner_id.is_none()
    }

    /// Whether this category may be used by the given user.
    pub fn is_visible_to(&self, owner_id: &str) -> bool {
        match &self.owner_id {
            None => true,
            Some(owner) => owner == owner_id,
        }
    }
}
