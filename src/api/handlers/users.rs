/*
 * Responsibility
 * - /users 系 handler
 * - Json を DTO で受け、validation → digest 生成 → repo 呼び出し
 * - レスポンスに digest を出さない (UserRow 自体が持っていない)
 */
use std::collections::HashMap;

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    api::dto::users::{CreateUserRequest, OwnedBlogResponse, UserResponse},
    error::AppError,
    repos::{blog_repo, user_repo},
    services::auth::password,
    state::AppState,
};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user_repo::list(&state.db).await?;
    let blogs = blog_repo::list(&state.db).await?;

    // 所有 blog を owner ごとにまとめて展開する
    let mut by_owner: HashMap<Uuid, Vec<OwnedBlogResponse>> = HashMap::new();
    for blog in blogs {
        let public_id = state.id_codec.encode(blog.blog_id)?;
        by_owner.entry(blog.user_id).or_default().push(OwnedBlogResponse {
            id: public_id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
        });
    }

    let res = users
        .into_iter()
        .map(|u| UserResponse {
            blogs: by_owner.remove(&u.id).unwrap_or_default(),
            id: u.id,
            username: u.username,
            name: u.name,
        })
        .collect();

    Ok(Json(res))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let digest = password::hash_password(req.password.as_deref().unwrap_or_default())?;

    // username の重複は INSERT の一意制約違反として返ってくる
    let row = user_repo::create(
        &state.db,
        req.username.as_deref().unwrap_or_default(),
        req.name.as_deref(),
        &digest,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: row.id,
            username: row.username,
            name: row.name,
            blogs: Vec::new(),
        }),
    ))
}
