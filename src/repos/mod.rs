/*
 * Responsibility
 * - DB アクセス層の公開インターフェース (re-export)
 */
pub mod blog_repo;
pub mod error;
pub mod user_repo;
