//! Password policy applied at registration.

use expensehub_core::config::AuthConfig;
use expensehub_core::error::AppError;

const MAX_LENGTH: usize = 128;

/// Rejects passwords that are too short, too long, or lack a letter and a digit.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a candidate password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let length = password.chars().count();
        if length < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        if length > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at most {MAX_LENGTH} characters"
            )));
        }
        if !password.chars().any(char::is_alphabetic) || !password.chars().any(|c| c.is_ascii_digit())
        {
            return Err(AppError::validation(
                "Password must contain at least one letter and one digit",
            ));
        }
        Ok(())
    }
}
