// src/services/account_service.rs
// DOCUMENTATION: Registration, login sessions and profiles
// PURPOSE: New users get their profile from an explicit post-creation hook
// run inside the registration transaction

use crate::config::Config;
use crate::db::{AlbumRepository, PhotoRepository, ProfileRepository, UserRepository};
use crate::errors::GalleryError;
use crate::models::{
    add_error, field_errors, ActiveProfile, FormOutcome, LoginRequest, Profile, ProfileForm,
    ProfileResponse, RegisterRequest, SessionResponse, User,
};
use crate::services::password;
use chrono::{DateTime, Duration, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;
use validator::Validate;

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub struct AccountService;

/// Expiry of a session opened at `now`; an unrepresentable TTL is an error
fn session_expiry(now: DateTime<Utc>, ttl_hours: i64) -> Result<DateTime<Utc>, GalleryError> {
    Duration::try_hours(ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            log::error!("Session TTL of {} hours is out of range", ttl_hours);
            GalleryError::InternalError
        })
}

impl AccountService {
    /// Register a user and create its profile
    pub async fn register(
        pool: &PgPool,
        req: &RegisterRequest,
    ) -> Result<FormOutcome<User>, GalleryError> {
        if let Err(e) = req.validate() {
            return Ok(FormOutcome::Invalid(field_errors(&e)));
        }

        let password_hash = password::hash_password(&req.password1)?;

        let mut tx = pool
            .begin()
            .await
            .map_err(|e| GalleryError::database("Begin transaction failed", e))?;

        let user = match UserRepository::insert(&mut tx, &req.username, &req.email, &password_hash).await {
            Ok(user) => user,
            Err(GalleryError::AlreadyExists(_)) => {
                let mut errors = Default::default();
                add_error(&mut errors, "username", USERNAME_TAKEN);
                return Ok(FormOutcome::Invalid(errors));
            }
            Err(e) => return Err(e),
        };

        Self::on_user_created(&mut tx, &user).await?;

        tx.commit()
            .await
            .map_err(|e| GalleryError::database("Commit registration failed", e))?;

        log::info!("Registered user {} ({})", user.username, user.id);
        Ok(FormOutcome::Saved(user))
    }

    /// Post-creation hook for every new user
    async fn on_user_created(conn: &mut PgConnection, user: &User) -> Result<(), GalleryError> {
        ProfileRepository::create_default(conn, user.id).await?;
        log::debug!("Created profile for user {}", user.id);
        Ok(())
    }

    /// Check credentials and open a session
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        req: &LoginRequest,
    ) -> Result<SessionResponse, GalleryError> {
        if let Err(e) = req.validate() {
            return Err(GalleryError::ValidationError(e.to_string()));
        }

        let user = UserRepository::find_by_username(pool, &req.username)
            .await?
            .filter(|u| u.is_active)
            .filter(|u| password::verify_password(&req.password, &u.password_hash))
            .ok_or_else(|| {
                log::warn!("Failed login for username '{}'", req.username);
                GalleryError::Unauthorized
            })?;

        let expires_at = session_expiry(Utc::now(), config.session_ttl_hours)?;
        let token = UserRepository::create_session(pool, user.id, expires_at).await?;

        log::info!("User {} logged in", user.username);
        Ok(SessionResponse {
            token,
            username: user.username,
            expires_at,
        })
    }

    pub async fn logout(pool: &PgPool, token: Uuid) -> Result<(), GalleryError> {
        UserRepository::delete_session(pool, token).await
    }

    pub async fn profile(pool: &PgPool, user: &User) -> Result<ProfileResponse, GalleryError> {
        let profile = ProfileRepository::get_for_user(pool, user.id).await?;
        let photo_count = PhotoRepository::count_for_user(pool, user.id).await?;
        let album_count = AlbumRepository::count_for_user(pool, user.id).await?;

        Ok(ProfileResponse {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            camera_type: profile.camera_type,
            genre: profile.genre,
            is_professional: profile.is_professional,
            hireable: profile.hireable,
            website: profile.website,
            photo_count,
            album_count,
        })
    }

    pub async fn profile_form(pool: &PgPool, user: &User) -> Result<ProfileForm, GalleryError> {
        let profile = ProfileRepository::get_for_user(pool, user.id).await?;
        Ok(profile.to_form(user))
    }

    /// Save the profile and the account name/email together
    pub async fn update_profile(
        pool: &PgPool,
        user: &User,
        form: &ProfileForm,
    ) -> Result<FormOutcome<Profile>, GalleryError> {
        if let Err(e) = form.validate() {
            return Ok(FormOutcome::Invalid(field_errors(&e)));
        }

        let mut tx = pool
            .begin()
            .await
            .map_err(|e| GalleryError::database("Begin transaction failed", e))?;
        UserRepository::update_account(&mut tx, user.id, &form.first_name, &form.last_name, &form.email)
            .await?;
        let profile = ProfileRepository::update(&mut tx, user.id, form).await?;
        tx.commit()
            .await
            .map_err(|e| GalleryError::database("Commit profile failed", e))?;

        log::info!("Updated profile for user {}", user.id);
        Ok(FormOutcome::Saved(profile))
    }

    pub async fn active_profiles(pool: &PgPool) -> Result<Vec<ActiveProfile>, GalleryError> {
        ProfileRepository::list_active(pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expiry_adds_ttl() {
        let now = Utc::now();
        assert_eq!(session_expiry(now, 336).unwrap(), now + Duration::hours(336));
    }

    #[test]
    fn test_session_expiry_rejects_huge_ttl() {
        let err = session_expiry(Utc::now(), i64::MAX).unwrap_err();
        assert!(matches!(err, GalleryError::InternalError));
    }
}
