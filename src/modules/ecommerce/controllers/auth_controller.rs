use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::modules::ecommerce::fixtures;
use crate::modules::ecommerce::services::CheckoutService;
use crate::modules::flows::models::FlowSession;
use crate::modules::flows::services::Endpoint;

/// Start the auth-service login; always redirects to the fixed callback
/// GET /checkout/auth-service/v1/auth/login
pub async fn login() -> HttpResponse {
    HttpResponse::Ok().json(fixtures::login())
}

/// Exchange the callback code for an auth token
/// POST /checkout/auth-service/v1/auth/token
pub async fn exchange_token(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
    body: Option<web::Json<Value>>,
) -> HttpResponse {
    service.serve(Endpoint::AuthToken, session, None, body.as_deref())
}

/// Configure auth service routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/checkout/auth-service/v1/auth/login").route(web::get().to(login)),
    )
    .service(
        web::resource("/checkout/auth-service/v1/auth/token").route(web::post().to(exchange_token)),
    );
}
