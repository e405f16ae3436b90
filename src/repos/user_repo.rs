/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - PgPool を受け取り CRUD を提供
 * - DB エラーは RepoError/AppError に変換しやすい形で返す
 *
 * "passwordHash" は CredentialRow (login 経路) だけが読む。
 * 一覧/解決系の UserRow には最初から含めない。
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    #[sqlx(rename = "userName")]
    pub username: String,
    pub name: Option<String>,
}

/// login の照合にだけ使う行 (digest 付き)
#[derive(Debug, FromRow)]
pub struct CredentialRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    #[sqlx(rename = "userName")]
    pub username: String,
    pub name: Option<String>,
    #[sqlx(rename = "passwordHash")]
    pub password_hash: String,
}

pub async fn list(db: &PgPool) -> Result<Vec<UserRow>, RepoError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "userName", name
        FROM users
        ORDER BY "createdAt" DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    username: &str,
    name: Option<&str>,
    password_hash: &str,
) -> Result<UserRow, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users ("userName", name, "passwordHash")
        VALUES ($1, $2, $3)
        RETURNING "userId", "userName", name
        "#,
    )
    .bind(username)
    .bind(name)
    .bind(password_hash)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "userName", name
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn find_by_username(
    db: &PgPool,
    username: &str,
) -> Result<Option<CredentialRow>, RepoError> {
    let row = sqlx::query_as::<_, CredentialRow>(
        r#"
        SELECT "userId", "userName", name, "passwordHash"
        FROM users
        WHERE "userName" = $1
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
