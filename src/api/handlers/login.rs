/*
 * Responsibility
 * - POST /login
 * - username で引いて digest を照合し、token を発行する
 *
 * 「user が居ない」と「password が違う」はどちらも同じ 401 メッセージに
 * 潰す (どちらが間違っていたかを教えない)。
 */
use axum::{Json, extract::State};
use tracing::info;

use crate::{
    api::dto::login::{LoginRequest, LoginResponse},
    error::AppError,
    repos::user_repo,
    services::auth::password,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let username = req.username.as_deref().unwrap_or_default();

    let user = user_repo::find_by_username(&state.db, username)
        .await?
        .ok_or_else(|| AppError::unauthorized("invalid username or password"))?;

    let supplied = req.password.as_deref().unwrap_or_default();
    if !password::verify_password(supplied, &user.password_hash)? {
        return Err(AppError::unauthorized("invalid username or password"));
    }

    let token = state.tokens.issue(&user.username, user.id)?;

    info!(username = %user.username, "login");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
