// src/models/photo.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::Publication;
use crate::config::Config;

/// Photo uploaded by a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub published: Publication,
    /// Media path of the stored image, relative to MEDIA_URL
    pub image: Option<String>,
    pub date_uploaded: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub date_published: Option<DateTime<Utc>>,
    /// Loaded separately from photo_tags
    #[sqlx(skip)]
    pub tags: Vec<String>,
}

/// Submitted add/edit photo form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhotoForm {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub published: Publication,

    #[validate(length(min = 1, max = 255))]
    pub image: Option<String>,

    /// A comma-separated list of tags
    #[serde(default)]
    pub tags: String,
}

/// Photo as shown on the photo detail and library views
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub published: Publication,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub date_uploaded: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub date_published: Option<DateTime<Utc>>,
}

/// Fields exposed by the read API
#[derive(Debug, Clone, Serialize)]
pub struct PhotoApiItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date_uploaded: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub date_published: Option<DateTime<Utc>>,
    pub published: Publication,
}

/// Photo form as rendered, with field errors after a rejected submission
#[derive(Debug, Serialize)]
pub struct PhotoFormView {
    pub template: &'static str,
    pub form: PhotoForm,
    pub published_choices: Vec<&'static str>,
    pub errors: super::FieldErrors,
}

/// Selectable photo in album forms
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PhotoChoice {
    pub id: i64,
    pub title: String,
}

impl Photo {
    pub fn to_response(&self, config: &Config) -> PhotoResponse {
        PhotoResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            published: self.published,
            image_url: self.image.as_deref().map(|path| config.media_path(path)),
            tags: self.tags.clone(),
            date_uploaded: self.date_uploaded,
            date_modified: self.date_modified,
            date_published: self.date_published,
        }
    }

    pub fn to_api_item(&self) -> PhotoApiItem {
        PhotoApiItem {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            date_uploaded: self.date_uploaded,
            date_modified: self.date_modified,
            date_published: self.date_published,
            published: self.published,
        }
    }

    /// Pre-fill an edit form from the stored photo
    pub fn to_form(&self) -> PhotoForm {
        PhotoForm {
            title: self.title.clone(),
            description: self.description.clone(),
            published: self.published,
            image: self.image.clone(),
            tags: self.tags.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_photo() -> Photo {
        let now = Utc::now();
        Photo {
            id: 3,
            user_id: 1,
            title: "image1".to_string(),
            description: "The first photo.".to_string(),
            published: Publication::Public,
            image: Some("albums/image1.jpg".to_string()),
            date_uploaded: now,
            date_modified: now,
            date_published: Some(now),
            tags: vec!["sea".to_string(), "blue".to_string()],
        }
    }

    #[test]
    fn test_response_builds_media_url() {
        let resp = sample_photo().to_response(&Config::for_tests());
        assert_eq!(resp.image_url.as_deref(), Some("/media/albums/image1.jpg"));
        assert_eq!(resp.tags, vec!["sea", "blue"]);
    }

    #[test]
    fn test_api_item_has_no_owner_or_image() {
        let value = serde_json::to_value(sample_photo().to_api_item()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert!(!keys.contains(&"user_id"));
        assert!(!keys.contains(&"image"));
        assert_eq!(value["published"], "Public");
        assert_eq!(value["title"], "image1");
    }

    #[test]
    fn test_form_requires_title() {
        let form: PhotoForm = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(form.validate().is_err());

        let form: PhotoForm = serde_json::from_str(r#"{"title": "ok"}"#).unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.published, Publication::Public);
    }

    #[test]
    fn test_edit_form_joins_tags() {
        assert_eq!(sample_photo().to_form().tags, "sea, blue");
    }
}
