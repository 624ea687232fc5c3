//! Message endpoints
//!
//! The legacy API contract is preserved here: an unknown message ID
//! on read/delete answers 200 with an empty body rather than 404,
//! and successful delete/update answer the JSON number of rows
//! modified.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::dto::{CreateMessageRequest, UpdateMessageRequest};
use crate::data::Message;
use crate::error::AppError;
use crate::service::MessageService;
use crate::AppState;

/// GET /messages
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, AppError> {
    let service = MessageService::new(state.db.clone());
    let messages = service.get_all_messages().await?;

    Ok(Json(messages))
}

/// POST /messages
///
/// 200 with the stored message, 400 on bad text or unknown author.
pub async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<Json<Message>, AppError> {
    let text = body.text.unwrap_or_default();
    let Some(posted_by) = body.posted_by else {
        return Err(AppError::Validation("postedBy is required".to_string()));
    };

    let service = MessageService::new(state.db.clone());
    let message = service.create_message(&text, posted_by).await?;

    Ok(Json(message))
}

/// GET /messages/:id
///
/// 200 with the message, or 200 with an empty body if absent.
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let service = MessageService::new(state.db.clone());

    match service.get_message(id).await? {
        Some(message) => Ok(Json(message).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// DELETE /messages/:id
///
/// 200 with the number of rows deleted (1), or 200 with an empty
/// body if no such message exists.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let service = MessageService::new(state.db.clone());

    match service.delete_message(id).await? {
        Some(_) => Ok(Json(1).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// PATCH /messages/:id
///
/// 200 with the number of rows updated (1), 400 on bad text or an
/// unknown message ID.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateMessageRequest>,
) -> Result<Response, AppError> {
    let text = body.text.unwrap_or_default();

    let service = MessageService::new(state.db.clone());

    match service.update_message_text(id, &text).await? {
        Some(_) => Ok(Json(1).into_response()),
        // Unknown IDs answer 400, matching the legacy contract.
        None => Ok(StatusCode::BAD_REQUEST.into_response()),
    }
}

/// GET /accounts/:id/messages
///
/// Always 200, possibly with an empty list.
pub async fn get_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Vec<Message>>, AppError> {
    let service = MessageService::new(state.db.clone());
    let messages = service.get_messages_by_account(account_id).await?;

    Ok(Json(messages))
}
