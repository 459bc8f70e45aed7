// src/handlers/health.rs
// DOCUMENTATION: Health check and home page

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "imager",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "template": "home",
        "links": {
            "register": "/accounts/register/",
            "login": "/accounts/login/",
            "library": "/images/library/",
            "profile": "/profile/",
        }
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/", web::get().to(home));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_ok() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "imager");
    }

    #[actix_web::test]
    async fn test_home_links_to_register_and_login() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["links"]["register"], "/accounts/register/");
        assert_eq!(body["links"]["login"], "/accounts/login/");
    }
}
