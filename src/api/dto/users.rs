/*
 * Responsibility
 * - Users の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 *
 * uniqueness は DB の一意制約で検出する (repos::error::RepoError::Conflict)。
 * ここは形式チェックのみ。
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let username = match self.username.as_deref() {
            Some(u) if !u.trim().is_empty() => u,
            _ => return Err("username or password missing"),
        };
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err("username or password missing"),
        };

        if username.chars().count() < 3 {
            return Err("username must be at least 3 characters long");
        }
        if password.chars().count() < 3 {
            return Err("password must be at least 3 characters long");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<OwnedBlogResponse>,
}

/// users 一覧で展開する所有 blog (owner 側の逆参照)
#[derive(Debug, Serialize)]
pub struct OwnedBlogResponse {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, password: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            username: username.map(String::from),
            name: None,
            password: password.map(String::from),
        }
    }

    #[test]
    fn three_character_username_and_password_are_accepted() {
        assert!(request(Some("abc"), Some("pwd")).validate().is_ok());
    }

    #[test]
    fn missing_username_or_password_share_one_message() {
        assert_eq!(
            request(None, Some("sekret")).validate(),
            Err("username or password missing")
        );
        assert_eq!(
            request(Some("root"), None).validate(),
            Err("username or password missing")
        );
    }

    #[test]
    fn short_username_is_rejected() {
        assert_eq!(
            request(Some("ab"), Some("sekret")).validate(),
            Err("username must be at least 3 characters long")
        );
    }

    #[test]
    fn short_password_is_rejected() {
        assert_eq!(
            request(Some("root"), Some("pw")).validate(),
            Err("password must be at least 3 characters long")
        );
    }
}
