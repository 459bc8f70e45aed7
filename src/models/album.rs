// src/models/album.rs
// DOCUMENTATION: Album records, forms and view DTOs
// PURPOSE: An album groups a user's photos and may name one of them as its cover

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{PhotoChoice, PhotoResponse, Publication};

/// Album row from the albums table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Album {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub published: Publication,
    pub cover_id: Option<i64>,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub date_published: Option<DateTime<Utc>>,
}

/// Submitted add/edit album form
/// DOCUMENTATION: `photos` and `cover` are photo ids; cross-field rules
/// live in services::album_form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AlbumForm {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub published: Publication,

    #[serde(default)]
    pub photos: Vec<i64>,

    #[serde(default)]
    pub cover: Option<i64>,
}

/// Album entry on the library page
#[derive(Debug, Clone, Serialize)]
pub struct AlbumSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub published: Publication,
    pub cover_id: Option<i64>,
    /// True when the library should show a placeholder instead of a cover
    pub no_cover: bool,
    pub date_created: DateTime<Utc>,
}

/// Album detail view
#[derive(Debug, Serialize)]
pub struct AlbumDetailResponse {
    #[serde(flatten)]
    pub album: AlbumSummary,
    pub date_modified: DateTime<Utc>,
    pub date_published: Option<DateTime<Utc>>,
    pub photos: Vec<PhotoResponse>,
}

/// Album form as rendered: the submitted or stored values, the photos
/// the user may choose from, and any field errors
#[derive(Debug, Serialize)]
pub struct AlbumFormView {
    pub template: &'static str,
    pub form: AlbumForm,
    pub photo_choices: Vec<PhotoChoice>,
    pub published_choices: Vec<&'static str>,
    pub errors: super::FieldErrors,
}

impl Album {
    pub fn to_summary(&self) -> AlbumSummary {
        AlbumSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            published: self.published,
            cover_id: self.cover_id,
            no_cover: self.cover_id.is_none(),
            date_created: self.date_created,
        }
    }

    /// Pre-fill an edit form from the stored album and its photo ids
    pub fn to_form(&self, photo_ids: Vec<i64>) -> AlbumForm {
        AlbumForm {
            title: self.title.clone(),
            description: self.description.clone(),
            published: self.published,
            photos: photo_ids,
            cover: self.cover_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(cover_id: Option<i64>) -> Album {
        let now = Utc::now();
        Album {
            id: 1,
            user_id: 1,
            title: "Blue Pictures".to_string(),
            description: "A test album.".to_string(),
            published: Publication::Public,
            cover_id,
            date_created: now,
            date_modified: now,
            date_published: None,
        }
    }

    #[test]
    fn test_summary_flags_missing_cover() {
        assert!(album(None).to_summary().no_cover);
        assert!(!album(Some(4)).to_summary().no_cover);
    }

    #[test]
    fn test_form_defaults() {
        let form: AlbumForm = serde_json::from_str(r#"{"title": "good album"}"#).unwrap();
        assert!(form.photos.is_empty());
        assert_eq!(form.cover, None);
        assert_eq!(form.published, Publication::Public);
    }

    #[test]
    fn test_to_form_keeps_cover() {
        let form = album(Some(4)).to_form(vec![4, 5]);
        assert_eq!(form.cover, Some(4));
        assert_eq!(form.photos, vec![4, 5]);
    }
}
