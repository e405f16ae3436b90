/*
 * Responsibility
 * - /blogs 系 handler
 * - Path の :blog_id は公開 ID → extractor で復号して内部 ID に変換して受け取る
 * - 認可が必要な操作 (create/delete) は AuthCtx を参照する
 *
 * likes の加算 (PUT) は reference の挙動どおり認証なし・所有者チェックなし。
 * 勝手に「直さない」こと。
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::blogs::{BlogOwnerResponse, BlogResponse, CreateBlogRequest},
        extractors::{AuthCtxExtractor, PublicBlogId},
    },
    error::AppError,
    repos::blog_repo,
    state::AppState,
};

fn row_to_response(state: &AppState, row: blog_repo::BlogWithOwnerRow) -> Result<BlogResponse, AppError> {
    let public_id = state.id_codec.encode(row.blog_id)?;

    Ok(BlogResponse {
        id: public_id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user: BlogOwnerResponse {
            id: row.user_id,
            username: row.username,
            name: row.name,
        },
    })
}

pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let rows = blog_repo::list_with_owners(&state.db).await?;

    let mut res = Vec::with_capacity(rows.len());
    for row in rows {
        res.push(row_to_response(&state, row)?);
    }

    Ok(Json(res))
}

pub async fn create_blog(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Json(req): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let row = blog_repo::create(
        &state.db,
        req.title.as_deref().unwrap_or_default(),
        req.author.as_deref(),
        req.url.as_deref().unwrap_or_default(),
        req.likes(),
        auth.user_id,
    )
    .await?;

    // owner は認証済みユーザーそのものなので join し直さない
    let public_id = state.id_codec.encode(row.blog_id)?;
    let res = BlogResponse {
        id: public_id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user: BlogOwnerResponse {
            id: auth.user_id,
            username: auth.username,
            name: auth.name,
        },
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_likes(
    State(state): State<AppState>,
    blog_id: PublicBlogId,
) -> Result<Json<BlogResponse>, AppError> {
    let row = blog_repo::increment_likes(&state.db, blog_id.id)
        .await?
        .ok_or(AppError::not_found("blog"))?;

    let row = blog_repo::get_with_owner(&state.db, row.blog_id)
        .await?
        .ok_or(AppError::not_found("blog"))?;

    Ok(Json(row_to_response(&state, row)?))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    blog_id: PublicBlogId,
) -> Result<StatusCode, AppError> {
    let row = blog_repo::get(&state.db, blog_id.id)
        .await?
        .ok_or(AppError::not_found("blog"))?;

    if row.user_id != auth.user_id {
        return Err(AppError::unauthorized("not authorized"));
    }

    blog_repo::delete(&state.db, blog_id.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /blogs (id なし) は明示的に 400 を返す
pub async fn delete_blog_missing_id() -> AppError {
    AppError::bad_request("id missing from path")
}
