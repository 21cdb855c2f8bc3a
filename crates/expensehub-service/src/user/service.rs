//! Self-service account operations: register, login, profile lookup.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use expensehub_auth::jwt::IssuedToken;
use expensehub_auth::{
    Access, Feature, Gate, JwtEncoder, PasswordHasher, PasswordValidator, Principal, ResourceKind,
};
use expensehub_core::config::SeedConfig;
use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::user::{CreateUser, User, UserRole, UserStatus};
use expensehub_store::UserRepository;

/// Handles account self-service.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Authorization gate.
    gate: Arc<Gate>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
    /// Hash verified on unknown-email logins, built on first use.
    decoy_hash: Arc<OnceLock<String>>,
}

const DECOY_PASSWORD: &str = "expensehub-decoy-password";

/// Self-registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Plaintext password.
    pub password: String,
}

/// A successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Issued access token.
    pub token: IssuedToken,
    /// The authenticated account.
    pub user: User,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        gate: Arc<Gate>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            gate,
            hasher,
            validator,
            encoder,
            decoy_hash: Arc::new(OnceLock::new()),
        }
    }

    /// Registers a new account. It starts `pending` with role `user`
    /// and cannot log in until an administrator approves it.
    pub fn register(&self, input: Registration) -> AppResult<User> {
        let email = normalize_email(&input.email)?;
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        self.validator.validate(&input.password)?;

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self.users.create(CreateUser {
            email,
            name: name.to_string(),
            password_hash,
            role: UserRole::User,
            status: UserStatus::Pending,
        })?;

        info!(user_id = user.id, "Account registered, awaiting approval");
        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    pub fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let invalid = || AppError::unauthenticated("Invalid email or password");

        let Some(user) = self.users.find_by_email(email.trim()) else {
            warn!("Login attempt for unknown email");
            self.verify_decoy(password);
            return Err(invalid());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(invalid());
        }

        match user.status {
            UserStatus::Active => {}
            UserStatus::Pending => {
                warn!(user_id = user.id, "Login refused: account pending approval");
                return Err(AppError::unauthenticated("Account is pending approval"));
            }
            UserStatus::Rejected => {
                warn!(user_id = user.id, "Login refused: account rejected");
                return Err(AppError::unauthenticated("Account has been rejected"));
            }
        }

        let token = self.encoder.issue(user.id, &user.email)?;
        info!(user_id = user.id, role = %user.role, "User logged in");
        Ok(LoginResult { token, user })
    }

    /// Resolves the principal for an authenticated token subject.
    ///
    /// Role and status come from the store, not the token. A deleted
    /// account resolves to `None`.
    pub fn resolve_principal(&self, user_id: Id) -> Option<Principal> {
        self.users.find_by_id(user_id).map(|user| Principal::from(&user))
    }

    /// Spends one password verification so unknown emails take as long
    /// as wrong passwords.
    fn verify_decoy(&self, password: &str) {
        let hash = match self.decoy_hash.get() {
            Some(hash) => hash,
            None => match self.hasher.hash_password(DECOY_PASSWORD) {
                Ok(hash) => self.decoy_hash.get_or_init(|| hash),
                Err(e) => {
                    warn!(error = %e.message, "Decoy hash unavailable");
                    return;
                }
            },
        };
        let _ = self.hasher.verify_password(password, hash);
    }

    /// The caller's own account.
    pub fn me(&self, principal: Option<&Principal>) -> AppResult<User> {
        let principal = self.gate.check(principal, Feature::ViewDashboard)?;
        self.users
            .find_by_id(principal.id)
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Feature → granted map for the caller, used for UI gating.
    pub fn permissions(
        &self,
        principal: Option<&Principal>,
    ) -> AppResult<BTreeMap<&'static str, bool>> {
        let principal = self.gate.authenticate(principal)?;
        Ok(self.gate.enforcer().permissions_for_role(&principal.role))
    }

    /// Views a user profile: one's own, or anyone's with `manage_users`.
    pub fn get_user(&self, principal: Option<&Principal>, id: Id) -> AppResult<User> {
        let user = self.users.find_by_id(id);
        self.gate.check_resource(
            principal,
            Feature::ViewDashboard,
            user.as_ref().map(|u| u.id),
            ResourceKind::User,
            Access::View,
        )?;
        user.ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Creates the configured bootstrap administrator if the email is
    /// not yet registered. Returns the account when one was created.
    pub fn seed_admin(&self, seed: &SeedConfig) -> AppResult<Option<User>> {
        let Some(admin) = &seed.admin else {
            return Ok(None);
        };

        let email = normalize_email(&admin.email)?;
        if self.users.find_by_email(&email).is_some() {
            return Ok(None);
        }

        let password_hash = self.hasher.hash_password(&admin.password)?;
        let user = self.users.create(CreateUser {
            email,
            name: admin.name.clone(),
            password_hash,
            role: UserRole::Admin,
            status: UserStatus::Active,
        })?;

        info!(user_id = user.id, email = %user.email, "Bootstrap administrator created");
        Ok(Some(user))
    }
}

fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid || email.len() > 254 {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(email.to_string())
}
