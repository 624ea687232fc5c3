//! Account endpoints

use axum::{extract::State, response::Json};

use super::dto::{LoginRequest, RegisterRequest};
use crate::data::Account;
use crate::error::AppError;
use crate::service::AccountService;
use crate::AppState;

/// POST /register
///
/// 200 with the created account, 400 on bad input,
/// 409 on a duplicate username.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<Account>, AppError> {
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let service = AccountService::new(state.db.clone());
    let account = service.register(&username, &password).await?;

    Ok(Json(account))
}

/// POST /login
///
/// 200 with the account on a credential match, 401 otherwise.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Account>, AppError> {
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let service = AccountService::new(state.db.clone());
    let account = service.login(&username, &password).await?;

    Ok(Json(account))
}
