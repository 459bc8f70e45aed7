// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: CRUD for photos and their tag sets. Lookups by id are not
// owner-filtered here; callers pass results through services::access::resolve

use crate::errors::GalleryError;
use crate::models::{Photo, PhotoChoice, PhotoForm};
use sqlx::{PgConnection, PgPool};
use std::collections::{HashMap, HashSet};

pub struct PhotoRepository;

impl PhotoRepository {
    /// Insert a photo owned by `user_id`
    pub async fn insert(
        conn: &mut PgConnection,
        user_id: i64,
        form: &PhotoForm,
    ) -> Result<Photo, GalleryError> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO photos (
                user_id, title, description, published, image,
                date_uploaded, date_modified, date_published
            )
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW(), CASE WHEN $6 THEN NOW() END)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&form.title)
        .bind(&form.description)
        .bind(form.published)
        .bind(&form.image)
        .bind(form.published.stamps_publish_date())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| GalleryError::database("Create photo failed", e))?;

        log::info!("Created photo {} for user {}", photo.id, user_id);
        Ok(photo)
    }

    /// Overwrite the editable fields of a photo
    /// DOCUMENTATION: date_published is stamped the first time the photo is
    /// saved as Public and kept afterwards
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        form: &PhotoForm,
    ) -> Result<Photo, GalleryError> {
        sqlx::query_as::<_, Photo>(
            r#"
            UPDATE photos
            SET title = $1,
                description = $2,
                published = $3,
                image = COALESCE($4, image),
                date_modified = NOW(),
                date_published = CASE
                    WHEN $5 AND date_published IS NULL THEN NOW()
                    ELSE date_published
                END
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&form.title)
        .bind(&form.description)
        .bind(form.published)
        .bind(&form.image)
        .bind(form.published.stamps_publish_date())
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| GalleryError::database("Update photo failed", e))
    }

    /// Replace the tag set of a photo
    pub async fn set_tags(
        conn: &mut PgConnection,
        photo_id: i64,
        tags: &[String],
    ) -> Result<(), GalleryError> {
        sqlx::query("DELETE FROM photo_tags WHERE photo_id = $1")
            .bind(photo_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| GalleryError::database("Clear photo tags failed", e))?;

        for (position, tag) in tags.iter().enumerate() {
            let (tag_id,): (i64,) = sqlx::query_as(
                r#"
                INSERT INTO tags (name) VALUES ($1)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(tag)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| GalleryError::database("Upsert tag failed", e))?;

            sqlx::query("INSERT INTO photo_tags (photo_id, tag_id, position) VALUES ($1, $2, $3)")
                .bind(photo_id)
                .bind(tag_id)
                .bind(position as i32)
                .execute(&mut *conn)
                .await
                .map_err(|e| GalleryError::database("Attach tag failed", e))?;
        }

        Ok(())
    }

    /// Fetch a photo by id regardless of owner
    pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Photo>, GalleryError> {
        let photo = sqlx::query_as::<_, Photo>("SELECT * FROM photos WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| GalleryError::database("Fetch photo failed", e))?;

        match photo {
            Some(photo) => Ok(Self::with_tags(pool, vec![photo]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn count_for_user(pool: &PgPool, user_id: i64) -> Result<i64, GalleryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM photos WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .map_err(|e| GalleryError::database("Count photos failed", e))?;
        Ok(count)
    }

    /// One page of a user's photos, oldest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Photo>, GalleryError> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT * FROM photos
            WHERE user_id = $1
            ORDER BY date_uploaded ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List photos failed", e))?;

        Self::with_tags(pool, photos).await
    }

    /// Every photo of a user, for the read API
    pub async fn list_all_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Photo>, GalleryError> {
        sqlx::query_as::<_, Photo>(
            "SELECT * FROM photos WHERE user_id = $1 ORDER BY date_uploaded ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List photos failed", e))
    }

    pub async fn list_by_tag(pool: &PgPool, user_id: i64, tag: &str) -> Result<Vec<Photo>, GalleryError> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT p.* FROM photos p
            JOIN photo_tags pt ON pt.photo_id = p.id
            JOIN tags t ON t.id = pt.tag_id
            WHERE p.user_id = $1 AND t.name = $2
            ORDER BY p.date_uploaded ASC, p.id ASC
            "#,
        )
        .bind(user_id)
        .bind(tag)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List photos by tag failed", e))?;

        Self::with_tags(pool, photos).await
    }

    pub async fn list_in_album(pool: &PgPool, album_id: i64) -> Result<Vec<Photo>, GalleryError> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT p.* FROM photos p
            JOIN album_photos ap ON ap.photo_id = p.id
            WHERE ap.album_id = $1
            ORDER BY p.date_uploaded ASC, p.id ASC
            "#,
        )
        .bind(album_id)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List album photos failed", e))?;

        Self::with_tags(pool, photos).await
    }

    /// Photos a user may pick for an album
    pub async fn choices_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<PhotoChoice>, GalleryError> {
        sqlx::query_as::<_, PhotoChoice>(
            "SELECT id, title FROM photos WHERE user_id = $1 ORDER BY date_uploaded ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List photo choices failed", e))
    }

    pub async fn ids_for_user(pool: &PgPool, user_id: i64) -> Result<HashSet<i64>, GalleryError> {
        let rows: Vec<(i64,)> = sqlx::query_as("SELECT id FROM photos WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(|e| GalleryError::database("List photo ids failed", e))?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Delete a photo; album memberships go with it and covers are cleared
    pub async fn delete(pool: &PgPool, id: i64, user_id: i64) -> Result<(), GalleryError> {
        let rows = sqlx::query("DELETE FROM photos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| GalleryError::database("Delete photo failed", e))?
            .rows_affected();

        if rows == 0 {
            return Err(GalleryError::NotFound(format!("Photo {}", id)));
        }

        log::info!("Deleted photo {}", id);
        Ok(())
    }

    /// Fill in `tags` for a batch of photos with one query
    async fn with_tags(pool: &PgPool, mut photos: Vec<Photo>) -> Result<Vec<Photo>, GalleryError> {
        if photos.is_empty() {
            return Ok(photos);
        }

        let ids: Vec<i64> = photos.iter().map(|p| p.id).collect();
        let rows: Vec<(i64, i32, String)> = sqlx::query_as(
            r#"
            SELECT pt.photo_id, pt.position, t.name
            FROM photo_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.photo_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("Fetch photo tags failed", e))?;

        let mut by_photo = group_tags(rows);
        for photo in photos.iter_mut() {
            photo.tags = by_photo.remove(&photo.id).unwrap_or_default();
        }

        Ok(photos)
    }
}

/// Group (photo_id, position, name) rows into per-photo tag lists in entry order
fn group_tags(mut rows: Vec<(i64, i32, String)>) -> HashMap<i64, Vec<String>> {
    rows.sort_by(|a, b| (a.0, a.1, &a.2).cmp(&(b.0, b.1, &b.2)));

    let mut by_photo: HashMap<i64, Vec<String>> = HashMap::new();
    for (photo_id, _, name) in rows {
        by_photo.entry(photo_id).or_default().push(name);
    }
    by_photo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tags::parse_tags;

    #[test]
    fn test_group_tags_keeps_entry_order() {
        let entered = parse_tags("sea, blue, autumn");
        let mut rows: Vec<(i64, i32, String)> = entered
            .iter()
            .enumerate()
            .map(|(i, name)| (7, i as i32, name.clone()))
            .collect();
        rows.push((8, 0, "zebra".to_string()));
        rows.reverse();

        let grouped = group_tags(rows);
        assert_eq!(grouped[&7], entered);
        assert_eq!(grouped[&8], vec!["zebra"]);
    }
}
