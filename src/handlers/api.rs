// src/handlers/api.rs
// DOCUMENTATION: Read-only JSON API
// PURPOSE: List the requesting user's photos

use crate::errors::GalleryError;
use crate::handlers::auth::CurrentUser;
use crate::services::PhotoService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /api/photos/ and GET /api/photos.json
pub async fn photo_list(
    current: CurrentUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, GalleryError> {
    let photos = PhotoService::api_list(pool.get_ref(), current.id()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/photos/", web::get().to(photo_list))
            .route("/photos.json", web::get().to(photo_list)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_api_requires_login() {
        let app = test::init_service(App::new().configure(config)).await;

        for uri in ["/api/photos/", "/api/photos.json"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }
}
