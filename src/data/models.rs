//! Data models
//!
//! Rust structs representing database entities.
//! IDs are assigned by SQLite on insert; timestamps use chrono.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Accounts are created by registration and never deleted.
/// The password is stored and compared in plain text (preserved
/// legacy behavior of this API).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// A short text message authored by an account
///
/// `posted_by` referred to an existing account at creation time.
/// `text` is the only field mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub text: String,
    /// Author account ID
    pub posted_by: i64,
    pub posted_at: DateTime<Utc>,
}
