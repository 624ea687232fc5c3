//! Account service
//!
//! Registration, login and user-existence checks.

use std::sync::Arc;

use crate::data::{Account, Database};
use crate::error::AppError;

/// Minimum password length accepted at registration
const MIN_PASSWORD_CHARS: usize = 4;

/// Account service
pub struct AccountService {
    db: Arc<Database>,
}

impl AccountService {
    /// Create new account service
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Register a new account
    ///
    /// # Arguments
    /// * `username` - Desired username, must be non-empty and unused
    /// * `password` - Plain-text password, minimum 4 characters
    ///
    /// # Errors
    /// `Validation` for a malformed username/password,
    /// `Conflict` if the username is already taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<Account, AppError> {
        if username.is_empty() {
            return Err(AppError::Validation("username cannot be empty".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AppError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_CHARS
            )));
        }

        if self.db.get_account_by_username(username).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "username is already taken: {}",
                username
            )));
        }

        let account = self
            .db
            .insert_account(username, password, chrono::Utc::now())
            .await?;

        tracing::info!(account_id = account.id, username = %account.username, "Account registered");

        Ok(account)
    }

    /// Log in with username and password
    ///
    /// The stored password must exactly equal the supplied one
    /// (case-sensitive, plain-text comparison). The caller cannot
    /// distinguish an unknown username from a wrong password.
    ///
    /// # Errors
    /// `Unauthorized` on any credential mismatch.
    pub async fn login(&self, username: &str, password: &str) -> Result<Account, AppError> {
        let account = self.db.get_account_by_username(username).await?;

        match account {
            Some(account) if account.password == password => Ok(account),
            _ => Err(AppError::Unauthorized),
        }
    }

    /// Check whether an account with this ID exists
    pub async fn user_exists(&self, account_id: i64) -> Result<bool, AppError> {
        Ok(self.db.get_account_by_id(account_id).await?.is_some())
    }
}
