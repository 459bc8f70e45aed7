// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Route configuration and the small view helpers shared by handlers

pub mod albums;
pub mod api;
pub mod auth;
pub mod health;
pub mod library;
pub mod photos;
pub mod profile;

use crate::errors::GalleryError;
use actix_web::{error::JsonPayloadError, http::header, web, HttpRequest, HttpResponse};
use serde_json::json;

pub use api::config as api_config;
pub use auth::config as accounts_config;
pub use health::config as health_config;
pub use profile::config as profile_config;

pub const LIBRARY_URL: &str = "/images/library/";

/// Photo, album, library and tag routes under /images
pub fn images_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/images")
            .configure(library::config)
            .configure(photos::config)
            .configure(albums::config),
    );
}

/// Successful form submissions go back to the library
pub fn redirect_to_library() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, LIBRARY_URL))
        .finish()
}

/// Dedicated "not found" view, rendered with 200 like any other page
pub fn not_found_view(template: &'static str, message: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "template": template,
        "message": message,
    }))
}

/// Malformed JSON bodies become INVALID_INPUT errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        log::debug!("Rejected request body: {}", err);
        GalleryError::InvalidInput(err.to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    #[test]
    fn test_redirect_points_at_library() {
        let resp = redirect_to_library();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), LIBRARY_URL);
    }

    #[test]
    fn test_not_found_view_is_not_an_error_status() {
        assert_eq!(not_found_view("photo_not_found", "Photo not found").status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_library_requires_login() {
        let app = actix_test::init_service(App::new().configure(images_config)).await;
        let req = actix_test::TestRequest::get().uri("/images/library/?photo_page=2").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_album_edit_by_anonymous_is_rejected() {
        let app = actix_test::init_service(
            App::new().app_data(json_config()).configure(images_config),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/images/album/1/edit/")
            .set_json(serde_json::json!({"title": "stolen", "photos": [1], "cover": 1}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
