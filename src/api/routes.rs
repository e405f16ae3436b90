/*
 * Responsibility
 * - /api 配下の URL 構造を定義
 * - Bearer が必要な操作 (blog の create/delete) にだけ route_layer を適用する
 *
 * route_layer は「それまでに登録した method」にしか掛からないので、
 * 認証必須の method → layer → 公開 method の順で並べている。
 */
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};

use crate::middleware::bearer_auth::bearer_auth;
use crate::state::AppState;

use crate::api::handlers::{
    blogs::{create_blog, delete_blog, delete_blog_missing_id, list_blogs, update_likes},
    health::health,
    login::login,
    users::{create_user, list_users},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let require_auth = from_fn_with_state(state, bearer_auth);

    Router::new()
        .route("/health", get(health))
        .route(
            "/blogs",
            post(create_blog)
                .route_layer(require_auth.clone())
                .get(list_blogs)
                .delete(delete_blog_missing_id),
        )
        .route(
            "/blogs/{blog_id}",
            delete(delete_blog)
                .route_layer(require_auth)
                .put(update_likes),
        )
        .route("/users", get(list_users).post(create_user))
        .route("/login", post(login))
}
