// src/services/album_form.rs
// DOCUMENTATION: Album composition validation
// PURPOSE: Turn a submitted AlbumForm into a ValidatedAlbum, the only shape
// AlbumRepository accepts for writes

use std::collections::HashSet;
use validator::Validate;

use crate::models::{add_error, field_errors, AlbumForm, FieldErrors, Publication};

pub const COVER_NOT_IN_PHOTOS: &str = "Cover not in album's photos.";

/// Album state that passed validation
///
/// Fields are private: every photo belongs to the submitting user and the
/// cover, if any, is one of `photo_ids`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAlbum {
    title: String,
    description: String,
    published: Publication,
    photo_ids: Vec<i64>,
    cover_id: Option<i64>,
}

impl ValidatedAlbum {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn published(&self) -> Publication {
        self.published
    }

    pub fn photo_ids(&self) -> &[i64] {
        &self.photo_ids
    }

    pub fn cover_id(&self) -> Option<i64> {
        self.cover_id
    }
}

/// Validate an album submission against the photos the user owns
///
/// Photo ids outside `owned` are dropped without an error, the same as a
/// choice that was never offered. A cover that is not among the remaining
/// photos fails with a `cover` field error.
pub fn validate_album(form: &AlbumForm, owned: &HashSet<i64>) -> Result<ValidatedAlbum, FieldErrors> {
    let mut errors = match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => field_errors(&e),
    };

    let mut seen = HashSet::new();
    let photo_ids: Vec<i64> = form
        .photos
        .iter()
        .copied()
        .filter(|id| owned.contains(id) && seen.insert(*id))
        .collect();

    if photo_ids.len() < form.photos.len() {
        log::debug!(
            "Dropped {} unavailable photo choices from album submission",
            form.photos.len() - photo_ids.len()
        );
    }

    if let Some(cover) = form.cover {
        if !photo_ids.contains(&cover) {
            add_error(&mut errors, "cover", COVER_NOT_IN_PHOTOS);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedAlbum {
        title: form.title.clone(),
        description: form.description.clone(),
        published: form.published,
        photo_ids,
        cover_id: form.cover,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(photos: Vec<i64>, cover: Option<i64>) -> AlbumForm {
        AlbumForm {
            title: "good album".to_string(),
            description: "this is an album".to_string(),
            published: Publication::Public,
            photos,
            cover,
        }
    }

    fn owned(ids: &[i64]) -> HashSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_no_cover_skips_cover_check() {
        let album = validate_album(&form(vec![], None), &owned(&[1, 2])).unwrap();
        assert_eq!(album.cover_id(), None);
        assert!(album.photo_ids().is_empty());
        assert_eq!(album.title(), "good album");
    }

    #[test]
    fn test_cover_in_photos_accepted() {
        let album = validate_album(&form(vec![1, 2], Some(2)), &owned(&[1, 2, 3])).unwrap();
        assert_eq!(album.cover_id(), Some(2));
        assert!(album.photo_ids().contains(&album.cover_id().unwrap()));
    }

    #[test]
    fn test_cover_outside_photos_rejected() {
        let errors = validate_album(&form(vec![1], Some(2)), &owned(&[1, 2])).unwrap_err();
        assert_eq!(errors["cover"], vec![COVER_NOT_IN_PHOTOS]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_foreign_photos_silently_dropped() {
        let album = validate_album(&form(vec![1, 9, 2], None), &owned(&[1, 2])).unwrap();
        assert_eq!(album.photo_ids(), &[1, 2]);
    }

    #[test]
    fn test_foreign_cover_rejected_even_if_submitted_as_photo() {
        let errors = validate_album(&form(vec![1, 9], Some(9)), &owned(&[1, 2])).unwrap_err();
        assert!(errors.contains_key("cover"));
    }

    #[test]
    fn test_duplicate_photo_ids_collapsed() {
        let album = validate_album(&form(vec![2, 2, 1], Some(1)), &owned(&[1, 2])).unwrap();
        assert_eq!(album.photo_ids(), &[2, 1]);
    }

    #[test]
    fn test_title_and_cover_errors_reported_together() {
        let mut bad = form(vec![], Some(1));
        bad.title = String::new();
        let errors = validate_album(&bad, &owned(&[1])).unwrap_err();
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("cover"));
    }
}
