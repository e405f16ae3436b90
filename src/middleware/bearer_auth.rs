/*
 * Responsibility
 * - Bearer トークンの検証 (ヘッダ抽出 → 検証 → 拒否)
 * - 成功時に、解決済みの AuthCtx を request extensions に載せる
 * - 認可 (所有者チェックなど) は handler 側の責務
 */
//! `Authorization: Bearer <token>` を検証し、AuthCtx を extensions に入れる。
//!
//! token は stateless なので、発行後に削除されたユーザーの成り済ましは
//! 署名検証だけでは弾けない。ここで毎回 users テーブルに対して解決する。

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::repos::user_repo;
use crate::state::AppState;

pub async fn bearer_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("token missing"))?;

    let token = auth
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("token missing"))?;

    let verified = match state.tokens.verify(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                "token verification failed"
            );
            return Err(AppError::unauthorized("token invalid"));
        }
    };

    tracing::debug!(username = %verified.username, "token verified");

    let user = user_repo::get(&state.db, verified.user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("token invalid"))?;

    let auth_ctx = AuthCtx::new(user.id, user.username, user.name);

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
