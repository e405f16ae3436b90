/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - db: PgPool, id_codec: IdCodec, tokens: TokenService
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{auth::token_service::TokenService, id_codec::IdCodec};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub id_codec: IdCodec,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: sqlx::PgPool, id_codec: IdCodec, tokens: Arc<TokenService>) -> Self {
        Self {
            db,
            id_codec,
            tokens,
        }
    }
}
