// src/services/photo_service.rs
// DOCUMENTATION: Business logic for photos
// PURPOSE: Intermediary between handlers and PhotoRepository; every access
// to a single photo is scoped to its owner

use crate::db::PhotoRepository;
use crate::errors::GalleryError;
use crate::models::{field_errors, FormOutcome, Photo, PhotoApiItem, PhotoForm};
use crate::services::{access, tags};
use sqlx::PgPool;
use validator::Validate;

pub struct PhotoService;

impl PhotoService {
    /// Resolve a photo owned by `user_id`
    pub async fn get_owned(pool: &PgPool, id: i64, user_id: i64) -> Result<Photo, GalleryError> {
        let found = PhotoRepository::find(pool, id).await?;
        access::resolve(found, id, user_id)
    }

    /// Create a photo from a submitted form
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        form: PhotoForm,
    ) -> Result<FormOutcome<Photo>, GalleryError> {
        if let Err(e) = form.validate() {
            return Ok(FormOutcome::Invalid(field_errors(&e)));
        }

        let tag_names = tags::parse_tags(&form.tags);

        let mut tx = pool
            .begin()
            .await
            .map_err(|e| GalleryError::database("Begin transaction failed", e))?;
        let mut photo = PhotoRepository::insert(&mut tx, user_id, &form).await?;
        PhotoRepository::set_tags(&mut tx, photo.id, &tag_names).await?;
        tx.commit()
            .await
            .map_err(|e| GalleryError::database("Commit photo failed", e))?;

        photo.tags = tag_names;
        Ok(FormOutcome::Saved(photo))
    }

    /// Edit a photo; fails with NotFound unless `user_id` owns it
    pub async fn update(
        pool: &PgPool,
        id: i64,
        user_id: i64,
        form: PhotoForm,
    ) -> Result<FormOutcome<Photo>, GalleryError> {
        let existing = Self::get_owned(pool, id, user_id).await?;

        if let Err(e) = form.validate() {
            return Ok(FormOutcome::Invalid(field_errors(&e)));
        }

        let tag_names = tags::parse_tags(&form.tags);

        let mut tx = pool
            .begin()
            .await
            .map_err(|e| GalleryError::database("Begin transaction failed", e))?;
        let mut photo = PhotoRepository::update(&mut tx, existing.id, &form).await?;
        PhotoRepository::set_tags(&mut tx, photo.id, &tag_names).await?;
        tx.commit()
            .await
            .map_err(|e| GalleryError::database("Commit photo failed", e))?;

        log::info!("Updated photo {}", photo.id);
        photo.tags = tag_names;
        Ok(FormOutcome::Saved(photo))
    }

    /// Delete a photo; fails with NotFound unless `user_id` owns it
    pub async fn delete(pool: &PgPool, id: i64, user_id: i64) -> Result<(), GalleryError> {
        let photo = Self::get_owned(pool, id, user_id).await?;
        PhotoRepository::delete(pool, photo.id, user_id).await
    }

    pub async fn tagged(pool: &PgPool, user_id: i64, tag: &str) -> Result<Vec<Photo>, GalleryError> {
        PhotoRepository::list_by_tag(pool, user_id, tag.trim()).await
    }

    /// Read API listing of the user's photos
    pub async fn api_list(pool: &PgPool, user_id: i64) -> Result<Vec<PhotoApiItem>, GalleryError> {
        let photos = PhotoRepository::list_all_for_user(pool, user_id).await?;
        Ok(photos.iter().map(|p| p.to_api_item()).collect())
    }
}
