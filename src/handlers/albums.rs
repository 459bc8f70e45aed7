// src/handlers/albums.rs
// DOCUMENTATION: HTTP handlers for album views and forms
// PURPOSE: A rejected album form comes back as 200 with its errors; a saved
// one redirects to the library

use crate::config::Config;
use crate::errors::GalleryError;
use crate::handlers::auth::CurrentUser;
use crate::handlers::{not_found_view, redirect_to_library};
use crate::models::{AlbumForm, FieldErrors, FormOutcome, Publication};
use crate::services::AlbumService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /images/album/{id}/
pub async fn album_detail(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    match AlbumService::detail(pool.get_ref(), config.get_ref(), path.into_inner(), current.id()).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(json!({
            "template": "album",
            "album": detail,
        }))),
        Err(GalleryError::NotFound(_)) => Ok(not_found_view("album_not_found", "Album not found")),
        Err(e) => Err(e),
    }
}

/// GET /images/album/add/
pub async fn add_album_form(
    current: CurrentUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, GalleryError> {
    let blank = AlbumForm {
        title: String::new(),
        description: String::new(),
        published: Publication::default(),
        photos: Vec::new(),
        cover: None,
    };
    let view = AlbumService::render_form(pool.get_ref(), current.id(), "add_album", blank, FieldErrors::new()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /images/album/add/
pub async fn add_album(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    body: web::Json<AlbumForm>,
) -> Result<impl Responder, GalleryError> {
    let form = body.into_inner();
    match AlbumService::create(pool.get_ref(), current.id(), &form).await? {
        FormOutcome::Saved(_) => Ok(redirect_to_library()),
        FormOutcome::Invalid(errors) => {
            let view = AlbumService::render_form(pool.get_ref(), current.id(), "add_album", form, errors).await?;
            Ok(HttpResponse::Ok().json(view))
        }
    }
}

/// GET /images/album/{id}/edit/
pub async fn edit_album_form(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    let form = AlbumService::edit_form(pool.get_ref(), path.into_inner(), current.id()).await?;
    let view = AlbumService::render_form(pool.get_ref(), current.id(), "edit_album", form, FieldErrors::new()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /images/album/{id}/edit/
pub async fn edit_album(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    body: web::Json<AlbumForm>,
) -> Result<impl Responder, GalleryError> {
    let form = body.into_inner();
    match AlbumService::update(pool.get_ref(), path.into_inner(), current.id(), &form).await? {
        FormOutcome::Saved(_) => Ok(redirect_to_library()),
        FormOutcome::Invalid(errors) => {
            let view = AlbumService::render_form(pool.get_ref(), current.id(), "edit_album", form, errors).await?;
            Ok(HttpResponse::Ok().json(view))
        }
    }
}

/// GET /images/album/{id}/delete/
pub async fn delete_album_confirm(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    let album = AlbumService::get_owned(pool.get_ref(), path.into_inner(), current.id()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "template": "album_confirm_delete",
        "album": album.to_summary(),
    })))
}

/// POST /images/album/{id}/delete/
pub async fn delete_album(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, GalleryError> {
    AlbumService::delete(pool.get_ref(), path.into_inner(), current.id()).await?;
    Ok(redirect_to_library())
}

/// Configuration for album routes, mounted under /images
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/album/add/", web::get().to(add_album_form))
        .route("/album/add/", web::post().to(add_album))
        .route("/album/{id}/", web::get().to(album_detail))
        .route("/album/{id}/edit/", web::get().to(edit_album_form))
        .route("/album/{id}/edit/", web::post().to(edit_album))
        .route("/album/{id}/delete/", web::get().to(delete_album_confirm))
        .route("/album/{id}/delete/", web::post().to(delete_album));
}
