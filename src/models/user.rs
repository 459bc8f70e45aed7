// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Account row; never serialized directly because of the password hash
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

/// Registration form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password1: String,

    #[validate(must_match = "password1")]
    pub password2: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Issued session token
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: Uuid,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Public part of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_joined: self.date_joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(p1: &str, p2: &str) -> RegisterRequest {
        RegisterRequest {
            username: "acutebird".to_string(),
            email: "email@example.org".to_string(),
            password1: p1.to_string(),
            password2: p2.to_string(),
        }
    }

    #[test]
    fn test_register_passwords_must_match() {
        assert!(register(":LSKDjfsd89s", ":LSKDjfsd89s").validate().is_ok());

        let errors = register(":LSKDjfsd89s", "other-password").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password2"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let errors = register("short", "short").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password1"));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let mut req = register(":LSKDjfsd89s", ":LSKDjfsd89s");
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }
}
