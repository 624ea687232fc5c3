//! API layer
//!
//! HTTP handlers for the account and message endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

mod accounts;
mod dto;
mod messages;

pub use dto::*;

/// Create the API router
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route(
            "/messages",
            get(messages::get_all_messages).post(messages::create_message),
        )
        .route(
            "/messages/:id",
            get(messages::get_message)
                .delete(messages::delete_message)
                .patch(messages::update_message),
        )
        .route(
            "/accounts/:id/messages",
            get(messages::get_messages_by_account),
        )
}
