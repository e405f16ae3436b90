/*
 * Responsibility
 * - Login の request/response DTO
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let username_missing = self.username.as_deref().is_none_or(|u| u.trim().is_empty());
        let password_missing = self.password.as_deref().is_none_or(|p| p.is_empty());
        if username_missing || password_missing {
            return Err("username or password missing");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_present_is_valid() {
        let req = LoginRequest {
            username: Some("root".into()),
            password: Some("sekret".into()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_field_is_rejected() {
        let req = LoginRequest {
            username: Some("root".into()),
            password: None,
        };
        assert_eq!(req.validate(), Err("username or password missing"));
    }
}
