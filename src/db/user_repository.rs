// src/db/user_repository.rs
// DOCUMENTATION: User and session database operations
// PURPOSE: Accounts, login sessions and account field updates

use crate::errors::GalleryError;
use crate::models::User;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    /// Insert a new account
    /// DOCUMENTATION: Runs on the caller's connection so registration can
    /// create the profile in the same transaction
    pub async fn insert(
        conn: &mut PgConnection,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, GalleryError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                log::info!("Registration with taken username: {}", username);
                GalleryError::AlreadyExists(format!("username '{}'", username))
            }
            other => GalleryError::database("Create user failed", other),
        })
    }

    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, GalleryError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await
            .map_err(|e| GalleryError::database("Fetch user failed", e))
    }

    /// Resolve a bearer token to its active, unexpired user
    pub async fn find_by_session(pool: &PgPool, token: Uuid) -> Result<Option<User>, GalleryError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1 AND s.expires_at > NOW() AND u.is_active = true
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await
        .map_err(|e| GalleryError::database("Session lookup failed", e))
    }

    pub async fn create_session(
        pool: &PgPool,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<Uuid, GalleryError> {
        let token = Uuid::new_v4();
        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(token)
            .bind(user_id)
            .bind(expires_at)
            .execute(pool)
            .await
            .map_err(|e| GalleryError::database("Create session failed", e))?;

        // Opportunistic cleanup of this user's stale sessions
        sqlx::query("DELETE FROM sessions WHERE user_id = $1 AND expires_at <= NOW()")
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| GalleryError::database("Session cleanup failed", e))?;

        Ok(token)
    }

    pub async fn delete_session(pool: &PgPool, token: Uuid) -> Result<(), GalleryError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await
            .map_err(|e| GalleryError::database("Delete session failed", e))?;
        Ok(())
    }

    pub async fn update_account(
        conn: &mut PgConnection,
        user_id: i64,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), GalleryError> {
        sqlx::query(
            r#"
            UPDATE users
            SET first_name = $1, last_name = $2, email = $3
            WHERE id = $4
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| GalleryError::database("Update user failed", e))?;
        Ok(())
    }
}
