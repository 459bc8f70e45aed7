// src/services/library_service.rs
// DOCUMENTATION: The library page: a user's photos and albums, each paginated

use crate::config::Config;
use crate::db::{AlbumRepository, PhotoRepository};
use crate::errors::GalleryError;
use crate::models::{AlbumSummary, PhotoResponse};
use crate::services::pagination::{resolve_page, Page};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Raw query values; parsed leniently by the paginator
#[derive(Debug, Default, Deserialize)]
pub struct LibraryQuery {
    pub photo_page: Option<String>,
    pub album_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub template: &'static str,
    pub photos: Page<PhotoResponse>,
    pub albums: Page<AlbumSummary>,
}

pub struct LibraryService;

impl LibraryService {
    pub async fn library(
        pool: &PgPool,
        config: &Config,
        user_id: i64,
        query: &LibraryQuery,
    ) -> Result<LibraryResponse, GalleryError> {
        let photo_total = PhotoRepository::count_for_user(pool, user_id).await?;
        let photo_window = resolve_page(query.photo_page.as_deref(), photo_total, config.page_size);
        let photos = PhotoRepository::list_for_user(
            pool,
            user_id,
            photo_window.per_page,
            photo_window.offset,
        )
        .await?;

        let album_total = AlbumRepository::count_for_user(pool, user_id).await?;
        let album_window = resolve_page(query.album_page.as_deref(), album_total, config.page_size);
        let albums = AlbumRepository::list_for_user(
            pool,
            user_id,
            album_window.per_page,
            album_window.offset,
        )
        .await?;

        log::debug!(
            "Library for user {}: photo page {}/{}, album page {}/{}",
            user_id,
            photo_window.number,
            photo_window.num_pages,
            album_window.number,
            album_window.num_pages
        );

        Ok(LibraryResponse {
            template: "library",
            photos: Page {
                items: photos.iter().map(|p| p.to_response(config)).collect(),
                window: photo_window,
            },
            albums: Page {
                items: albums.iter().map(|a| a.to_summary()).collect(),
                window: album_window,
            },
        })
    }
}
