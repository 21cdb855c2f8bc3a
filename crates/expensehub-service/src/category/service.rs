//! Category CRUD with ownership enforcement.
//!
//! Categories are shared reference data: anyone holding
//! `view_categories` may read any of them. Editing and deleting another
//! user's category requires the manager-tier features.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use expensehub_auth::{Access, Feature, Gate, Principal, ResourceKind};
use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::category::{Category, CategoryChanges, CreateCategory};
use expensehub_entity::{Id, Owned};
use expensehub_store::{CategoryRepository, ExpenseRepository, UserRepository};

const MAX_NAME_LENGTH: usize = 100;

/// Manages expense categories.
#[derive(Debug, Clone)]
pub struct CategoryService {
    users: Arc<UserRepository>,
    categories: Arc<CategoryRepository>,
    expenses: Arc<ExpenseRepository>,
    gate: Arc<Gate>,
}

/// Input for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(
        users: Arc<UserRepository>,
        categories: Arc<CategoryRepository>,
        expenses: Arc<ExpenseRepository>,
        gate: Arc<Gate>,
    ) -> Self {
        Self {
            users,
            categories,
            expenses,
            gate,
        }
    }

    /// Lists every category.
    pub fn list(&self, principal: Option<&Principal>) -> AppResult<Vec<Category>> {
        self.gate.check(principal, Feature::ViewCategories)?;
        Ok(self.categories.find_all())
    }

    /// Gets a category by id.
    pub fn get(&self, principal: Option<&Principal>, id: Id) -> AppResult<Category> {
        self.load_authorized(principal, id, Access::View)
    }

    /// Creates a category owned by the caller.
    pub fn create(&self, principal: Option<&Principal>, input: NewCategory) -> AppResult<Category> {
        let principal = self.gate.check(principal, Feature::CreateCategory)?;
        let name = normalize_name(&input.name)?;

        let description = normalize_description(input.description);

        // Owner row stays locked so the account cannot be deleted mid-insert.
        let category = self
            .users
            .with_existing(principal.id, |_| {
                self.categories.create(CreateCategory {
                    owner_id: principal.id,
                    name,
                    description,
                })
            })
            .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))?;

        info!(category_id = category.id, owner_id = category.owner_id, "Category created");
        Ok(category)
    }

    /// Renames or re-describes a category.
    pub fn update(
        &self,
        principal: Option<&Principal>,
        id: Id,
        changes: CategoryChanges,
    ) -> AppResult<Category> {
        self.load_authorized(principal, id, Access::Edit)?;

        let changes = CategoryChanges {
            name: changes.name.as_deref().map(normalize_name).transpose()?,
            description: changes.description,
        };

        let updated = self.categories.update(id, changes)?;
        info!(category_id = id, "Category updated");
        Ok(updated)
    }

    /// Deletes a category that no expense references.
    pub fn delete(&self, principal: Option<&Principal>, id: Id) -> AppResult<()> {
        self.load_authorized(principal, id, Access::Delete)?;

        self.categories
            .delete_unused(id, || self.expenses.count_in_category(id))?;

        info!(category_id = id, "Category deleted");
        Ok(())
    }

    fn load_authorized(
        &self,
        principal: Option<&Principal>,
        id: Id,
        access: Access,
    ) -> AppResult<Category> {
        let category = self.categories.find_by_id(id);
        self.gate.check_resource(
            principal,
            Feature::ViewCategories,
            category.as_ref().map(Owned::owner_id),
            ResourceKind::Category,
            access,
        )?;
        category.ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }
}

fn normalize_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Category name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Category name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
