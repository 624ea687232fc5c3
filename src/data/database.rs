//! SQLite database operations
//!
//! All database access goes through this module.
//! The six primitives here are the entire persistence contract:
//! key-based lookups, inserts, a single-column update, and deletes.

use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite, SqlitePool};
use std::path::Path;

use super::models::*;
use crate::error::AppError;

/// Database connection pool wrapper.
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    // =========================================================================
    // Connection
    // =========================================================================

    /// Connect to SQLite database
    ///
    /// Creates the database file if it doesn't exist.
    /// Runs pending migrations automatically.
    ///
    /// # Arguments
    /// * `path` - Path to SQLite database file
    ///
    /// # Errors
    /// Returns error if connection or migration fails
    pub async fn connect(path: &Path) -> Result<Self, AppError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Database(sqlx::Error::Io(e)))?;
        }

        // Create connection string
        let connection_string = format!("sqlite:{}?mode=rwc", path.display());

        // Create connection pool
        let pool = SqlitePool::connect(&connection_string).await?;

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Migration failed: {}", e);
                AppError::Internal(anyhow::anyhow!("Migration failed: {}", e))
            })?;

        tracing::info!("Database connected and migrated successfully");

        Ok(Self { pool })
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Get account by ID
    pub async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    /// Get account by username (exact, case-sensitive match)
    pub async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    /// Insert a new account and return it with its assigned ID
    pub async fn insert_account(
        &self,
        username: &str,
        password: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Account, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (username, password, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(username)
        .bind(password)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Account {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            password: password.to_string(),
            created_at,
        })
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Get message by ID
    pub async fn get_message(&self, id: i64) -> Result<Option<Message>, AppError> {
        let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(message)
    }

    /// Get every stored message, in store order
    pub async fn get_all_messages(&self) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>("SELECT * FROM messages")
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }

    /// Get all messages posted by one account
    pub async fn get_messages_by_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE posted_by = ?")
            .bind(account_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }

    /// Insert a new message and return it with its assigned ID
    pub async fn insert_message(
        &self,
        text: &str,
        posted_by: i64,
        posted_at: DateTime<Utc>,
    ) -> Result<Message, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (text, posted_by, posted_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(text)
        .bind(posted_by)
        .bind(posted_at)
        .execute(&self.pool)
        .await?;

        Ok(Message {
            id: result.last_insert_rowid(),
            text: text.to_string(),
            posted_by,
            posted_at,
        })
    }

    /// Update a message's text by ID.
    ///
    /// # Returns
    /// `true` if updated, `false` if no matching message row exists.
    pub async fn update_message_text(&self, id: i64, text: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE messages SET text = ? WHERE id = ?")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Delete message by ID
    pub async fn delete_message(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
