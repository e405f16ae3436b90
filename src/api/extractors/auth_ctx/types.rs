/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - token の検証と user の解決は middleware::auth 側の責務
 * - ここは「型（契約）」として固定化する。共有の可変 context は持たない
 */

use uuid::Uuid;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// middleware が users テーブルで解決済みのユーザーをそのまま運ぶ。
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

impl AuthCtx {
    pub fn new(user_id: Uuid, username: String, name: Option<String>) -> Self {
        Self {
            user_id,
            username,
            name,
        }
    }
}
