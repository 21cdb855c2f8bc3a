//! Category repository.

use chrono::Utc;
use dashmap::DashMap;

use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::category::{Category, CategoryChanges, CreateCategory};

use crate::sequence::IdSequence;

/// Repository for expense categories.
#[derive(Debug, Default)]
pub struct CategoryRepository {
    rows: DashMap<Id, Category>,
    ids: IdSequence,
}

impl CategoryRepository {
    /// Create an empty category repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new category.
    pub fn create(&self, data: CreateCategory) -> Category {
        let now = Utc::now();
        let category = Category {
            id: self.ids.next_id(),
            owner_id: data.owner_id,
            name: data.name,
            description: data.description,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(category.id, category.clone());
        category
    }

    /// Find a category by primary key.
    pub fn find_by_id(&self, id: Id) -> Option<Category> {
        self.rows.get(&id).map(|row| row.clone())
    }

    /// List every category ordered by name, then id.
    pub fn find_all(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.rows.iter().map(|row| row.clone()).collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        categories
    }

    /// Whether any category belongs to the given user.
    pub fn exists_for_owner(&self, owner_id: Id) -> bool {
        self.rows.iter().any(|row| row.owner_id == owner_id)
    }

    /// Apply a partial update.
    pub fn update(&self, id: Id, changes: CategoryChanges) -> AppResult<Category> {
        let mut row = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(description) = changes.description {
            row.description = Some(description);
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    /// Run `attach` while the category row is read-locked, so the category
    /// cannot be deleted until it returns. `None` if it does not exist.
    ///
    /// `attach` must not touch this repository.
    pub fn with_existing<R>(&self, id: Id, attach: impl FnOnce(&Category) -> R) -> Option<R> {
        let row = self.rows.get(&id)?;
        Some(attach(row.value()))
    }

    /// Remove a category unless `usage` reports expenses filed under it.
    ///
    /// `usage` runs under the row's write lock.
    pub fn delete_unused(&self, id: Id, usage: impl FnOnce() -> usize) -> AppResult<()> {
        let mut in_use = 0;
        let removed = self.rows.remove_if(&id, |_, _| {
            in_use = usage();
            in_use == 0
        });

        match removed {
            Some(_) => Ok(()),
            None if in_use > 0 => Err(AppError::conflict(format!(
                "Category {id} is still used by {in_use} expense(s)"
            ))),
            None => Err(AppError::not_found(format!("Category {id} not found"))),
        }
    }
}
