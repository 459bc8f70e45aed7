// src/db/album_repository.rs
// DOCUMENTATION: Album database operations
// PURPOSE: Albums are written only from a ValidatedAlbum, and the album row
// plus its photo set are replaced in one transaction

use crate::errors::GalleryError;
use crate::models::Album;
use crate::services::album_form::ValidatedAlbum;
use sqlx::{PgConnection, PgPool};

pub struct AlbumRepository;

impl AlbumRepository {
    /// Create an album with its photo set and cover
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        album: &ValidatedAlbum,
    ) -> Result<Album, GalleryError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| GalleryError::database("Begin transaction failed", e))?;

        let created = sqlx::query_as::<_, Album>(
            r#"
            INSERT INTO albums (
                user_id, title, description, published, cover_id,
                date_created, date_modified, date_published
            )
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW(), CASE WHEN $6 THEN NOW() END)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(album.title())
        .bind(album.description())
        .bind(album.published())
        .bind(album.cover_id())
        .bind(album.published().stamps_publish_date())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| GalleryError::database("Create album failed", e))?;

        Self::replace_photos(&mut tx, created.id, album.photo_ids()).await?;

        tx.commit()
            .await
            .map_err(|e| GalleryError::database("Commit album failed", e))?;

        log::info!(
            "Created album {} for user {} with {} photos",
            created.id,
            user_id,
            album.photo_ids().len()
        );
        Ok(created)
    }

    /// Overwrite an album's fields, photo set and cover
    pub async fn update(pool: &PgPool, id: i64, album: &ValidatedAlbum) -> Result<Album, GalleryError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| GalleryError::database("Begin transaction failed", e))?;

        let updated = sqlx::query_as::<_, Album>(
            r#"
            UPDATE albums
            SET title = $1,
                description = $2,
                published = $3,
                cover_id = $4,
                date_modified = NOW(),
                date_published = CASE
                    WHEN $5 AND date_published IS NULL THEN NOW()
                    ELSE date_published
                END
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(album.title())
        .bind(album.description())
        .bind(album.published())
        .bind(album.cover_id())
        .bind(album.published().stamps_publish_date())
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| GalleryError::database("Update album failed", e))?;

        Self::replace_photos(&mut tx, id, album.photo_ids()).await?;

        tx.commit()
            .await
            .map_err(|e| GalleryError::database("Commit album failed", e))?;

        log::info!("Updated album {}", id);
        Ok(updated)
    }

    async fn replace_photos(
        conn: &mut PgConnection,
        album_id: i64,
        photo_ids: &[i64],
    ) -> Result<(), GalleryError> {
        sqlx::query("DELETE FROM album_photos WHERE album_id = $1")
            .bind(album_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| GalleryError::database("Clear album photos failed", e))?;

        if photo_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO album_photos (album_id, photo_id)
            SELECT $1, UNNEST($2::bigint[])
            "#,
        )
        .bind(album_id)
        .bind(photo_ids)
        .execute(&mut *conn)
        .await
        .map_err(|e| GalleryError::database("Add album photos failed", e))?;

        Ok(())
    }

    /// Fetch an album by id regardless of owner
    pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Album>, GalleryError> {
        sqlx::query_as::<_, Album>("SELECT * FROM albums WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| GalleryError::database("Fetch album failed", e))
    }

    pub async fn photo_ids(pool: &PgPool, album_id: i64) -> Result<Vec<i64>, GalleryError> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT photo_id FROM album_photos WHERE album_id = $1 ORDER BY photo_id ASC",
        )
        .bind(album_id)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List album photo ids failed", e))?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn count_for_user(pool: &PgPool, user_id: i64) -> Result<i64, GalleryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM albums WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .map_err(|e| GalleryError::database("Count albums failed", e))?;
        Ok(count)
    }

    pub async fn list_for_user(
        pool: &PgPool,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Album>, GalleryError> {
        sqlx::query_as::<_, Album>(
            r#"
            SELECT * FROM albums
            WHERE user_id = $1
            ORDER BY date_created ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List albums failed", e))
    }

    pub async fn delete(pool: &PgPool, id: i64, user_id: i64) -> Result<(), GalleryError> {
        let rows = sqlx::query("DELETE FROM albums WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| GalleryError::database("Delete album failed", e))?
            .rows_affected();

        if rows == 0 {
            return Err(GalleryError::NotFound(format!("Album {}", id)));
        }

        log::info!("Deleted album {}", id);
        Ok(())
    }
}
