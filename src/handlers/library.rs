// src/handlers/library.rs
// DOCUMENTATION: Library and tag listings

use crate::config::Config;
use crate::errors::GalleryError;
use crate::handlers::auth::CurrentUser;
use crate::services::{LibraryQuery, LibraryService, PhotoService};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /images/library/?photo_page=N&album_page=M
pub async fn library(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    query: web::Query<LibraryQuery>,
) -> Result<impl Responder, GalleryError> {
    let page = LibraryService::library(pool.get_ref(), config.get_ref(), current.id(), &query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /images/tag/{tag}/
/// The tag may itself contain slashes
pub async fn tagged_photos(
    current: CurrentUser,
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let tag = path.into_inner();
    let photos = PhotoService::tagged(pool.get_ref(), current.id(), &tag).await?;

    Ok(HttpResponse::Ok().json(json!({
        "template": "tag",
        "tag": tag,
        "photos": photos.iter().map(|p| p.to_response(config.get_ref())).collect::<Vec<_>>(),
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/library/", web::get().to(library))
        .route("/tag/{tag:.+}/", web::get().to(tagged_photos));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    #[actix_web::test]
    async fn test_tag_route_matches_slashes() {
        let app = actix_test::init_service(
            App::new().service(web::scope("/images").configure(config)),
        )
        .await;

        // Unauthenticated requests reach the handler's extractor, so a
        // matched route answers 401 and an unmatched one 404
        for uri in ["/images/tag/sea/", "/images/tag/black/white/"] {
            let req = actix_test::TestRequest::get().uri(uri).to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }
}
