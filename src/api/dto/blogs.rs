/*
 * Responsibility
 * - Blogs の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 *
 * title/url は「欠けていたら 400」を JSON deserialize エラーではなく
 * validation エラーとして返したいので Option で受ける。
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl CreateBlogRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let title_missing = self.title.as_deref().is_none_or(|t| t.trim().is_empty());
        let url_missing = self.url.as_deref().is_none_or(|u| u.trim().is_empty());
        if title_missing || url_missing {
            return Err("title or url missing");
        }
        Ok(())
    }

    /// likes 未指定は 0 で保存する
    pub fn likes(&self) -> i64 {
        self.likes.unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user: BlogOwnerResponse,
}

/// 一覧/取得で展開する owner 情報 (digest は絶対に含めない)
#[derive(Debug, Serialize)]
pub struct BlogOwnerResponse {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: Option<&str>, url: Option<&str>) -> CreateBlogRequest {
        CreateBlogRequest {
            title: title.map(String::from),
            author: None,
            url: url.map(String::from),
            likes: None,
        }
    }

    #[test]
    fn title_and_url_present_is_valid() {
        assert!(request(Some("t"), Some("http://localhost")).validate().is_ok());
    }

    #[test]
    fn missing_title_or_url_is_rejected() {
        assert_eq!(
            request(None, Some("http://localhost")).validate(),
            Err("title or url missing")
        );
        assert_eq!(request(Some("t"), None).validate(), Err("title or url missing"));
        assert_eq!(request(Some("t"), Some("  ")).validate(), Err("title or url missing"));
    }

    #[test]
    fn likes_default_to_zero() {
        let mut req = request(Some("t"), Some("u"));
        assert_eq!(req.likes(), 0);
        req.likes = Some(7);
        assert_eq!(req.likes(), 7);
    }
}
