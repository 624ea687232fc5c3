//! Request DTOs
//!
//! Bodies mirror the Account/Message JSON fields. Fields are
//! optional so a missing field reports a 400 through validation
//! rather than a deserialization rejection.

use serde::Deserialize;

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Message creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub text: Option<String>,
    pub posted_by: Option<i64>,
}

/// Message text update request body
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub text: Option<String>,
}
