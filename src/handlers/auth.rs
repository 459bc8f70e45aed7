// src/handlers/auth.rs
// DOCUMENTATION: Account handlers and the authenticated-user extractor
// PURPOSE: Resolve `Authorization: Bearer <token>` to a User for every
// owner-scoped route

use crate::config::Config;
use crate::db::UserRepository;
use crate::errors::GalleryError;
use crate::models::{FormOutcome, LoginRequest, RegisterRequest, User};
use crate::services::AccountService;
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

/// The user making the request, with the session token it presented
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub token: Uuid,
}

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.user.id
    }
}

impl FromRequest for CurrentUser {
    type Error = GalleryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<PgPool>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let token = token.ok_or(GalleryError::Unauthorized)?;
            let pool = pool.ok_or_else(|| {
                log::error!("PgPool missing from app data");
                GalleryError::InternalError
            })?;

            let user = UserRepository::find_by_session(pool.get_ref(), token)
                .await?
                .ok_or_else(|| {
                    log::debug!("Unknown or expired session token");
                    GalleryError::Unauthorized
                })?;

            Ok(CurrentUser { user, token })
        })
    }
}

/// Extract a well-formed bearer token from the Authorization header
fn bearer_token(req: &HttpRequest) -> Option<Uuid> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    parse_bearer(value)
}

fn parse_bearer(value: &str) -> Option<Uuid> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Uuid::parse_str(token.trim()).ok()
}

/// POST /accounts/register/
pub async fn register(
    pool: web::Data<PgPool>,
    body: web::Json<RegisterRequest>,
) -> Result<impl Responder, GalleryError> {
    match AccountService::register(pool.get_ref(), &body).await? {
        FormOutcome::Saved(user) => Ok(HttpResponse::Created().json(user.to_response())),
        FormOutcome::Invalid(errors) => Ok(HttpResponse::Ok().json(json!({
            "template": "registration_form",
            "username": body.username,
            "email": body.email,
            "errors": errors,
        }))),
    }
}

/// POST /accounts/login/
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, GalleryError> {
    let session = AccountService::login(pool.get_ref(), config.get_ref(), &body).await?;
    Ok(HttpResponse::Ok().json(session))
}

/// POST /accounts/logout/
pub async fn logout(
    current: CurrentUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, GalleryError> {
    AccountService::logout(pool.get_ref(), current.token).await?;
    log::info!("User {} logged out", current.user.username);
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for account routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .route("/register/", web::post().to(register))
            .route("/login/", web::post().to(login))
            .route("/logout/", web::post().to(logout)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    #[test]
    fn test_parse_bearer() {
        let token = Uuid::new_v4();
        assert_eq!(parse_bearer(&format!("Bearer {}", token)), Some(token));
        assert_eq!(parse_bearer(&format!("bearer  {} ", token)), Some(token));
        assert_eq!(parse_bearer(&format!("Token {}", token)), None);
        assert_eq!(parse_bearer("Bearer not-a-uuid"), None);
        assert_eq!(parse_bearer("Bearer"), None);
    }

    #[actix_web::test]
    async fn test_logout_without_token_is_unauthorized() {
        let app = actix_test::init_service(App::new().configure(config)).await;
        let req = actix_test::TestRequest::post().uri("/accounts/logout/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
