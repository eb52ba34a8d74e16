use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::ecommerce::CheckoutService;

pub const SERVICE_NAME: &str = "checkout-mock";

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    pub scenario_engine: String,
    pub application: String,
}

/// GET /health - Liveness probe
/// Returns 200 whenever the process can answer; the scenario engine check is
/// informational
pub async fn health_check(service: Option<web::Data<Arc<CheckoutService>>>) -> impl Responder {
    let scenario_engine = match service {
        Some(service) if service.is_complete() => "healthy",
        Some(_) => "incomplete",
        None => "not_configured",
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: SERVICE_NAME.to_string(),
        checks: HealthChecks {
            scenario_engine: scenario_engine.to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}
