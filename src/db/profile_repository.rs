// src/db/profile_repository.rs
// DOCUMENTATION: Profile database operations

use crate::errors::GalleryError;
use crate::models::{ActiveProfile, Profile, ProfileForm};
use sqlx::{PgConnection, PgPool};

pub struct ProfileRepository;

impl ProfileRepository {
    /// Create the default (empty) profile for a new user
    pub async fn create_default(conn: &mut PgConnection, user_id: i64) -> Result<Profile, GalleryError> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (user_id) VALUES ($1) RETURNING *",
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| GalleryError::database("Create profile failed", e))
    }

    pub async fn get_for_user(pool: &PgPool, user_id: i64) -> Result<Profile, GalleryError> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| GalleryError::database("Fetch profile failed", e))?
            .ok_or_else(|| {
                log::error!("User {} has no profile", user_id);
                GalleryError::NotFound(format!("Profile for user {}", user_id))
            })
    }

    pub async fn update(
        conn: &mut PgConnection,
        user_id: i64,
        form: &ProfileForm,
    ) -> Result<Profile, GalleryError> {
        sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET camera_type = $1,
                genre = $2,
                is_professional = $3,
                hireable = $4,
                website = $5
            WHERE user_id = $6
            RETURNING *
            "#,
        )
        .bind(&form.camera_type)
        .bind(&form.genre)
        .bind(form.is_professional)
        .bind(form.hireable)
        .bind(&form.website)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| GalleryError::database("Update profile failed", e))
    }

    /// Profiles whose user is active
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ActiveProfile>, GalleryError> {
        sqlx::query_as::<_, ActiveProfile>(
            r#"
            SELECT u.username, p.camera_type, p.genre, p.is_professional, p.hireable, p.website
            FROM profiles p
            JOIN users u ON u.id = p.user_id
            WHERE u.is_active = true
            ORDER BY u.username ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| GalleryError::database("List active profiles failed", e))
    }
}
