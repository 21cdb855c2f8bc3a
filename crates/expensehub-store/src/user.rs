//! User repository.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::user::{CreateUser, User, UserRole, UserStatus};

use crate::sequence::IdSequence;

/// Repository for user accounts.
#[derive(Debug, Default)]
pub struct UserRepository {
    rows: DashMap<Id, User>,
    /// Lowercased email → user id, used to enforce uniqueness.
    emails: DashMap<String, Id>,
    ids: IdSequence,
}

impl UserRepository {
    /// Create an empty user repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user. Fails with a conflict if the email is taken.
    pub fn create(&self, data: CreateUser) -> AppResult<User> {
        let key = data.email.trim().to_lowercase();

        let id = match self.emails.entry(key) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict("Email is already registered"));
            }
            Entry::Vacant(slot) => {
                let id = self.ids.next_id();
                slot.insert(id);
                id
            }
        };

        let now = Utc::now();
        let user = User {
            id,
            email: data.email.trim().to_string(),
            name: data.name,
            password_hash: data.password_hash,
            role: data.role,
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(id, user.clone());
        debug!(user_id = id, role = %user.role, status = %user.status, "User created");
        Ok(user)
    }

    /// Find a user by primary key.
    pub fn find_by_id(&self, id: Id) -> Option<User> {
        self.rows.get(&id).map(|row| row.clone())
    }

    /// Find a user by email (case-insensitive).
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.emails.get(&email.trim().to_lowercase())?;
        self.find_by_id(id)
    }

    /// List every user ordered by id.
    pub fn find_all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.rows.iter().map(|row| row.clone()).collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// Change a user's role.
    pub fn update_role(&self, id: Id, role: UserRole) -> AppResult<User> {
        self.modify(id, |user| user.role = role)
    }

    /// Change a user's account status.
    pub fn update_status(&self, id: Id, status: UserStatus) -> AppResult<User> {
        self.modify(id, |user| user.status = status)
    }

    /// Run `attach` while the user row is read-locked. The account cannot
    /// be deleted until `attach` returns. `None` if the user does not exist.
    ///
    /// `attach` must not touch this repository.
    pub fn with_existing<R>(&self, id: Id, attach: impl FnOnce(&User) -> R) -> Option<R> {
        let row = self.rows.get(&id)?;
        Some(attach(row.value()))
    }

    /// Remove a user unless `owns_records` reports rows that reference it.
    ///
    /// The check runs under the row's write lock, so nothing created through
    /// [`with_existing`](Self::with_existing) can slip in between.
    pub fn delete_unreferenced(&self, id: Id, owns_records: impl FnOnce() -> bool) -> AppResult<()> {
        let mut referenced = false;
        let removed = self.rows.remove_if(&id, |_, _| {
            referenced = owns_records();
            !referenced
        });

        match removed {
            Some((_, user)) => {
                self.emails.remove(&user.email.to_lowercase());
                Ok(())
            }
            None if referenced => Err(AppError::conflict(format!(
                "User {id} still owns expenses or categories"
            ))),
            None => Err(AppError::not_found(format!("User {id} not found"))),
        }
    }

    /// Number of stored users.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    fn modify(&self, id: Id, apply: impl FnOnce(&mut User)) -> AppResult<User> {
        let mut row = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        apply(&mut *row);
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}
