/*
 * Responsibility
 * - blogs テーブル向け SQLx 操作
 * - "userId" の FK 前提で所有者を保持 (owner 不在の blog は作れない)
 * - likes の加算は UPDATE ... SET likes = likes + 1 の一文で行う
 *   (read-modify-write しないので並行 PUT でも加算は失われない)
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct BlogRow {
    #[sqlx(rename = "blogId")]
    pub blog_id: i64,

    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,

    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
}

/// 一覧/取得で owner を展開した行 (users と JOIN 済み)
#[derive(Debug, Clone, FromRow)]
pub struct BlogWithOwnerRow {
    #[sqlx(rename = "blogId")]
    pub blog_id: i64,

    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,

    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
    #[sqlx(rename = "userName")]
    pub username: String,
    pub name: Option<String>,
}

pub async fn list_with_owners(db: &PgPool) -> Result<Vec<BlogWithOwnerRow>, RepoError> {
    let rows = sqlx::query_as::<_, BlogWithOwnerRow>(
        r#"
        SELECT
            b."blogId", b.title, b.author, b.url, b.likes,
            b."userId", u."userName", u.name
        FROM blogs b
        JOIN users u ON u."userId" = b."userId"
        ORDER BY b."blogId"
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list(db: &PgPool) -> Result<Vec<BlogRow>, RepoError> {
    let rows = sqlx::query_as::<_, BlogRow>(
        r#"
        SELECT "blogId", title, author, url, likes, "userId"
        FROM blogs
        ORDER BY "blogId"
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    title: &str,
    author: Option<&str>,
    url: &str,
    likes: i64,
    user_id: Uuid,
) -> Result<BlogRow, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        INSERT INTO blogs (title, author, url, likes, "userId")
        VALUES ($1, $2, $3, $4, $5)
        RETURNING "blogId", title, author, url, likes, "userId"
        "#,
    )
    .bind(title)
    .bind(author)
    .bind(url)
    .bind(likes)
    .bind(user_id)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, blog_id: i64) -> Result<Option<BlogRow>, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        SELECT "blogId", title, author, url, likes, "userId"
        FROM blogs
        WHERE "blogId" = $1
        "#,
    )
    .bind(blog_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn get_with_owner(
    db: &PgPool,
    blog_id: i64,
) -> Result<Option<BlogWithOwnerRow>, RepoError> {
    let row = sqlx::query_as::<_, BlogWithOwnerRow>(
        r#"
        SELECT
            b."blogId", b.title, b.author, b.url, b.likes,
            b."userId", u."userName", u.name
        FROM blogs b
        JOIN users u ON u."userId" = b."userId"
        WHERE b."blogId" = $1
        "#,
    )
    .bind(blog_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn increment_likes(db: &PgPool, blog_id: i64) -> Result<Option<BlogRow>, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        UPDATE blogs
        SET likes = likes + 1
        WHERE "blogId" = $1
        RETURNING "blogId", title, author, url, likes, "userId"
        "#,
    )
    .bind(blog_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, blog_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM blogs
        WHERE "blogId" = $1
        "#,
    )
    .bind(blog_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
