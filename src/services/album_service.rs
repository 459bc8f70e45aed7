// src/services/album_service.rs
// DOCUMENTATION: Business logic for albums
// PURPOSE: Owner-scoped album access, form rendering with per-user photo
// choices, and validated saves

use crate::config::Config;
use crate::db::{AlbumRepository, PhotoRepository};
use crate::errors::GalleryError;
use crate::models::{
    published_choices, Album, AlbumDetailResponse, AlbumForm, AlbumFormView, FieldErrors,
    FormOutcome,
};
use crate::services::{access, album_form};
use sqlx::PgPool;

pub struct AlbumService;

impl AlbumService {
    /// Resolve an album owned by `user_id`
    pub async fn get_owned(pool: &PgPool, id: i64, user_id: i64) -> Result<Album, GalleryError> {
        let found = AlbumRepository::find(pool, id).await?;
        access::resolve(found, id, user_id)
    }

    pub async fn detail(
        pool: &PgPool,
        config: &Config,
        id: i64,
        user_id: i64,
    ) -> Result<AlbumDetailResponse, GalleryError> {
        let album = Self::get_owned(pool, id, user_id).await?;
        let photos = PhotoRepository::list_in_album(pool, album.id).await?;

        Ok(AlbumDetailResponse {
            album: album.to_summary(),
            date_modified: album.date_modified,
            date_published: album.date_published,
            photos: photos.iter().map(|p| p.to_response(config)).collect(),
        })
    }

    /// Render an album form; the photo choices only ever list the user's own photos
    pub async fn render_form(
        pool: &PgPool,
        user_id: i64,
        template: &'static str,
        form: AlbumForm,
        errors: FieldErrors,
    ) -> Result<AlbumFormView, GalleryError> {
        let photo_choices = PhotoRepository::choices_for_user(pool, user_id).await?;
        Ok(AlbumFormView {
            template,
            form,
            photo_choices,
            published_choices: published_choices(),
            errors,
        })
    }

    /// Current values of an owned album as an edit form
    pub async fn edit_form(pool: &PgPool, id: i64, user_id: i64) -> Result<AlbumForm, GalleryError> {
        let album = Self::get_owned(pool, id, user_id).await?;
        let photo_ids = AlbumRepository::photo_ids(pool, album.id).await?;
        Ok(album.to_form(photo_ids))
    }

    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        form: &AlbumForm,
    ) -> Result<FormOutcome<Album>, GalleryError> {
        let owned = PhotoRepository::ids_for_user(pool, user_id).await?;
        match album_form::validate_album(form, &owned) {
            Ok(valid) => Ok(FormOutcome::Saved(
                AlbumRepository::create(pool, user_id, &valid).await?,
            )),
            Err(errors) => {
                log::debug!("Rejected new album for user {}: {:?}", user_id, errors);
                Ok(FormOutcome::Invalid(errors))
            }
        }
    }

    /// Edit an album; fails with NotFound unless `user_id` owns it
    pub async fn update(
        pool: &PgPool,
        id: i64,
        user_id: i64,
        form: &AlbumForm,
    ) -> Result<FormOutcome<Album>, GalleryError> {
        let album = Self::get_owned(pool, id, user_id).await?;
        let owned = PhotoRepository::ids_for_user(pool, user_id).await?;
        match album_form::validate_album(form, &owned) {
            Ok(valid) => Ok(FormOutcome::Saved(
                AlbumRepository::update(pool, album.id, &valid).await?,
            )),
            Err(errors) => {
                log::debug!("Rejected edit of album {}: {:?}", album.id, errors);
                Ok(FormOutcome::Invalid(errors))
            }
        }
    }

    /// Delete an album; its photos are kept
    pub async fn delete(pool: &PgPool, id: i64, user_id: i64) -> Result<(), GalleryError> {
        let album = Self::get_owned(pool, id, user_id).await?;
        AlbumRepository::delete(pool, album.id, user_id).await
    }
}
