//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Id, Owned};

/// A named bucket that expenses are filed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: Id,
    /// The user who created the category.
    pub owner_id: Id,
    /// Category name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Owned for Category {
    fn owner_id(&self) -> Id {
        self.owner_id
    }
}

/// Data required to create a category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    /// Owning user.
    pub owner_id: Id,
    /// Category name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Partial update of a category; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}
