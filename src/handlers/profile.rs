// src/handlers/profile.rs
// DOCUMENTATION: Profile page, profile edit form and active profiles listing

use crate::errors::GalleryError;
use crate::handlers::auth::CurrentUser;
use crate::models::{FieldErrors, FormOutcome, ProfileForm, ProfileFormView};
use crate::services::AccountService;
use actix_web::{http::header, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /profile/
pub async fn profile(
    current: CurrentUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, GalleryError> {
    let profile = AccountService::profile(pool.get_ref(), &current.user).await?;
    Ok(HttpResponse::Ok().json(json!({
        "template": "profile",
        "profile": profile,
    })))
}

/// GET /profile/edit/
pub async fn edit_profile_form(
    current: CurrentUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, GalleryError> {
    let form = AccountService::profile_form(pool.get_ref(), &current.user).await?;
    Ok(HttpResponse::Ok().json(ProfileFormView {
        template: "edit_profile",
        form,
        errors: FieldErrors::new(),
    }))
}

/// POST /profile/edit/
pub async fn edit_profile(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    body: web::Json<ProfileForm>,
) -> Result<impl Responder, GalleryError> {
    let form = body.into_inner();
    match AccountService::update_profile(pool.get_ref(), &current.user, &form).await? {
        FormOutcome::Saved(_) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, "/profile/"))
            .finish()),
        FormOutcome::Invalid(errors) => Ok(HttpResponse::Ok().json(ProfileFormView {
            template: "edit_profile",
            form,
            errors,
        })),
    }
}

/// GET /profile/active/
pub async fn active_profiles(pool: web::Data<PgPool>) -> Result<impl Responder, GalleryError> {
    let profiles = AccountService::active_profiles(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "template": "active_profiles",
        "profiles": profiles,
    })))
}

/// Configuration for profile routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .route("/", web::get().to(profile))
            .route("/edit/", web::get().to(edit_profile_form))
            .route("/edit/", web::post().to(edit_profile))
            .route("/active/", web::get().to(active_profiles)),
    );
}
