// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photo views and forms
// PURPOSE: Parse requests, call PhotoService, render JSON views

use crate::config::Config;
use crate::errors::GalleryError;
use crate::handlers::auth::CurrentUser;
use crate::handlers::{not_found_view, redirect_to_library};
use crate::models::{published_choices, FieldErrors, FormOutcome, PhotoForm, PhotoFormView};
use crate::services::PhotoService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

fn form_view(template: &'static str, form: PhotoForm, errors: FieldErrors) -> PhotoFormView {
    PhotoFormView {
        template,
        form,
        published_choices: published_choices(),
        errors,
    }
}

fn blank_form() -> PhotoForm {
    PhotoForm {
        title: String::new(),
        description: String::new(),
        published: Default::default(),
        image: None,
        tags: String::new(),
    }
}

/// GET /images/photos/{id}/
/// Missing and foreign photos both render the not-found view
pub async fn photo_detail(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    match PhotoService::get_owned(pool.get_ref(), path.into_inner(), current.id()).await {
        Ok(photo) => Ok(HttpResponse::Ok().json(json!({
            "template": "photo",
            "photo": photo.to_response(config.get_ref()),
        }))),
        Err(GalleryError::NotFound(_)) => Ok(not_found_view("photo_not_found", "Photo not found")),
        Err(e) => Err(e),
    }
}

/// GET /images/photos/add/
pub async fn add_photo_form(_current: CurrentUser) -> impl Responder {
    HttpResponse::Ok().json(form_view("add_photo", blank_form(), FieldErrors::new()))
}

/// POST /images/photos/add/
pub async fn add_photo(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    body: web::Json<PhotoForm>,
) -> Result<impl Responder, GalleryError> {
    let form = body.into_inner();
    match PhotoService::create(pool.get_ref(), current.id(), form.clone()).await? {
        FormOutcome::Saved(_) => Ok(redirect_to_library()),
        FormOutcome::Invalid(errors) => Ok(HttpResponse::Ok().json(form_view("add_photo", form, errors))),
    }
}

/// GET /images/photos/{id}/edit/
pub async fn edit_photo_form(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    let photo = PhotoService::get_owned(pool.get_ref(), path.into_inner(), current.id()).await?;
    Ok(HttpResponse::Ok().json(form_view("edit_photo", photo.to_form(), FieldErrors::new())))
}

/// POST /images/photos/{id}/edit/
pub async fn edit_photo(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<PhotoForm>,
) -> Result<impl Responder, GalleryError> {
    let form = body.into_inner();
    match PhotoService::update(pool.get_ref(), path.into_inner(), current.id(), form.clone()).await? {
        FormOutcome::Saved(_) => Ok(redirect_to_library()),
        FormOutcome::Invalid(errors) => Ok(HttpResponse::Ok().json(form_view("edit_photo", form, errors))),
    }
}

/// GET /images/photos/{id}/delete/
/// Confirmation view
pub async fn delete_photo_confirm(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    let photo = PhotoService::get_owned(pool.get_ref(), path.into_inner(), current.id()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "template": "photo_confirm_delete",
        "photo": photo.to_response(config.get_ref()),
    })))
}

/// POST /images/photos/{id}/delete/
pub async fn delete_photo(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    PhotoService::delete(pool.get_ref(), path.into_inner(), current.id()).await?;
    Ok(redirect_to_library())
}

/// Configuration for photo routes, mounted under /images
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/photos/add/", web::get().to(add_photo_form))
        .route("/photos/add/", web::post().to(add_photo))
        .route("/photos/{id}/", web::get().to(photo_detail))
        .route("/photos/{id}/edit/", web::get().to(edit_photo_form))
        .route("/photos/{id}/edit/", web::post().to(edit_photo))
        .route("/photos/{id}/delete/", web::get().to(delete_photo_confirm))
        .route("/photos/{id}/delete/", web::post().to(delete_photo));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_renders_choices() {
        let view = form_view("add_photo", blank_form(), FieldErrors::new());
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["template"], "add_photo");
        assert_eq!(value["form"]["published"], "Public");
        assert_eq!(value["published_choices"].as_array().unwrap().len(), 3);
        assert!(value["errors"].as_object().unwrap().is_empty());
    }
}
