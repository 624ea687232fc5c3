//! Message service
//!
//! CRUD over short text messages: validation, author-existence
//! checks, and the store calls behind them.

use std::sync::Arc;

use crate::data::{Database, Message};
use crate::error::AppError;

/// Maximum message length in characters
const MAX_MESSAGE_CHARS: usize = 255;

fn validate_message_text(text: &str) -> Result<(), AppError> {
    if text.is_empty() {
        return Err(AppError::Validation(
            "message text cannot be empty".to_string(),
        ));
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "message text must be at most {} characters",
            MAX_MESSAGE_CHARS
        )));
    }
    Ok(())
}

/// Message service
pub struct MessageService {
    db: Arc<Database>,
}

impl MessageService {
    /// Create new message service
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create a new message
    ///
    /// # Arguments
    /// * `text` - Message body, 1-255 characters
    /// * `posted_by` - Author account ID, must exist
    ///
    /// # Errors
    /// `Validation` if the text is malformed or the author is unknown.
    pub async fn create_message(&self, text: &str, posted_by: i64) -> Result<Message, AppError> {
        validate_message_text(text)?;

        if self.db.get_account_by_id(posted_by).await?.is_none() {
            return Err(AppError::Validation(format!(
                "posted_by does not reference an existing account: {}",
                posted_by
            )));
        }

        let message = self
            .db
            .insert_message(text, posted_by, chrono::Utc::now())
            .await?;

        tracing::info!(message_id = message.id, posted_by, "Message created");

        Ok(message)
    }

    /// Get every stored message, in store order
    pub async fn get_all_messages(&self) -> Result<Vec<Message>, AppError> {
        self.db.get_all_messages().await
    }

    /// Get message by ID, or None if absent
    pub async fn get_message(&self, id: i64) -> Result<Option<Message>, AppError> {
        self.db.get_message(id).await
    }

    /// Delete message by ID
    ///
    /// # Returns
    /// The message as it was before deletion, or None (no effect)
    /// if no message with that ID exists.
    pub async fn delete_message(&self, id: i64) -> Result<Option<Message>, AppError> {
        let message = self.db.get_message(id).await?;

        if message.is_some() {
            self.db.delete_message(id).await?;
            tracing::info!(message_id = id, "Message deleted");
        }

        Ok(message)
    }

    /// Update a message's text
    ///
    /// Only the text field changes; id, author and timestamp are
    /// left untouched.
    ///
    /// # Returns
    /// The updated message, or None if no message with that ID exists.
    ///
    /// # Errors
    /// `Validation` if the new text is malformed.
    pub async fn update_message_text(
        &self,
        id: i64,
        new_text: &str,
    ) -> Result<Option<Message>, AppError> {
        validate_message_text(new_text)?;

        if !self.db.update_message_text(id, new_text).await? {
            return Ok(None);
        }

        self.db.get_message(id).await
    }

    /// Get all messages posted by one account, possibly empty
    pub async fn get_messages_by_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Message>, AppError> {
        self.db.get_messages_by_account(account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Account;

    use tempfile::TempDir;

    async fn create_test_db() -> (Arc<Database>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("service-message.db");
        let db = Database::connect(&db_path).await.unwrap();
        (Arc::new(db), temp_dir)
    }

    async fn create_test_account(db: &Database) -> Account {
        db.insert_account("alice", "pass1", chrono::Utc::now())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_message_persists_with_id() {
        let (db, _temp_dir) = create_test_db().await;
        let account = create_test_account(&db).await;
        let service = MessageService::new(db);

        let message = service.create_message("hello", account.id).await.unwrap();
        assert!(message.id > 0);
        assert_eq!(message.text, "hello");
        assert_eq!(message.posted_by, account.id);

        let stored = service.get_message(message.id).await.unwrap().unwrap();
        assert_eq!(stored.text, "hello");
    }

    #[tokio::test]
    async fn create_message_rejects_bad_text() {
        let (db, _temp_dir) = create_test_db().await;
        let account = create_test_account(&db).await;
        let service = MessageService::new(db);

        let empty = service.create_message("", account.id).await.unwrap_err();
        assert!(matches!(empty, AppError::Validation(_)));

        let too_long = "x".repeat(256);
        let error = service
            .create_message(&too_long, account.id)
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));

        // 255 characters is the boundary and must succeed
        let at_limit = "x".repeat(255);
        let message = service.create_message(&at_limit, account.id).await.unwrap();
        assert_eq!(message.text.chars().count(), 255);
    }

    #[tokio::test]
    async fn create_message_rejects_unknown_author() {
        let (db, _temp_dir) = create_test_db().await;
        let service = MessageService::new(db);

        let error = service.create_message("hello", 42).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_message_returns_predelete_state_once() {
        let (db, _temp_dir) = create_test_db().await;
        let account = create_test_account(&db).await;
        let service = MessageService::new(db);

        let message = service.create_message("bye", account.id).await.unwrap();

        let deleted = service.delete_message(message.id).await.unwrap();
        assert!(deleted.is_some());
        assert_eq!(deleted.unwrap().text, "bye");

        // Second delete reports no effect
        let again = service.delete_message(message.id).await.unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn update_message_text_changes_only_text() {
        let (db, _temp_dir) = create_test_db().await;
        let account = create_test_account(&db).await;
        let service = MessageService::new(db);

        let message = service.create_message("before", account.id).await.unwrap();

        let updated = service
            .update_message_text(message.id, "after")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, message.id);
        assert_eq!(updated.text, "after");
        assert_eq!(updated.posted_by, message.posted_by);
        assert_eq!(updated.posted_at, message.posted_at);

        let empty = service
            .update_message_text(message.id, "")
            .await
            .unwrap_err();
        assert!(matches!(empty, AppError::Validation(_)));

        // Original text unchanged after a rejected update
        let stored = service.get_message(message.id).await.unwrap().unwrap();
        assert_eq!(stored.text, "after");

        let missing = service.update_message_text(9999, "text").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn messages_by_account_filters_on_author() {
        let (db, _temp_dir) = create_test_db().await;
        let alice = create_test_account(&db).await;
        let bob = db
            .insert_account("bob", "pass2", chrono::Utc::now())
            .await
            .unwrap();
        let service = MessageService::new(db);

        service.create_message("one", alice.id).await.unwrap();
        service.create_message("two", alice.id).await.unwrap();
        service.create_message("three", bob.id).await.unwrap();

        let alice_messages = service.get_messages_by_account(alice.id).await.unwrap();
        assert_eq!(alice_messages.len(), 2);
        assert!(alice_messages.iter().all(|m| m.posted_by == alice.id));

        let nobody = service.get_messages_by_account(9999).await.unwrap();
        assert!(nobody.is_empty());
    }
}
