// src/models/profile.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Photographer profile, one per user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub user_id: i64,
    pub camera_type: String,
    pub genre: String,
    pub is_professional: bool,
    pub hireable: bool,
    pub website: String,
}

/// Profile edit form; also updates the name and email on the account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[serde(default)]
    #[validate(length(max = 30))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128))]
    pub camera_type: String,

    #[serde(default)]
    #[validate(length(max = 128))]
    pub genre: String,

    #[serde(default)]
    pub is_professional: bool,

    #[serde(default)]
    pub hireable: bool,

    #[serde(default)]
    #[validate(length(max = 128))]
    pub website: String,
}

/// Profile page
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub camera_type: String,
    pub genre: String,
    pub is_professional: bool,
    pub hireable: bool,
    pub website: String,
    pub photo_count: i64,
    pub album_count: i64,
}

/// Row for the active-profiles listing
#[derive(Debug, Serialize, FromRow)]
pub struct ActiveProfile {
    pub username: String,
    pub camera_type: String,
    pub genre: String,
    pub is_professional: bool,
    pub hireable: bool,
    pub website: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileFormView {
    pub template: &'static str,
    pub form: ProfileForm,
    pub errors: super::FieldErrors,
}

impl Profile {
    pub fn to_form(&self, user: &super::User) -> ProfileForm {
        ProfileForm {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            camera_type: self.camera_type.clone(),
            genre: self.genre.clone(),
            is_professional: self.is_professional,
            hireable: self.hireable,
            website: self.website.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_limits_camera_type() {
        let mut form: ProfileForm = serde_json::from_str("{}").unwrap();
        assert!(form.validate().is_ok());

        form.camera_type = "x".repeat(129);
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("camera_type"));
    }
}
