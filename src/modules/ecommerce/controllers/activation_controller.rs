use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::modules::ecommerce::services::CheckoutService;
use crate::modules::flows::models::FlowSession;
use crate::modules::flows::services::Endpoint;

/// Activate a payment notice
/// POST /ecommerce/checkout/v1/transactions
pub async fn activate(
    service: web::Data<Arc<CheckoutService>>,
    body: web::Json<Value>,
) -> HttpResponse {
    service.activate(&body)
}

/// Poll whether the node assigned a payment id to an activation
/// GET /checkout/payments/v1/payment-activations/{paymentContextCode}
pub async fn activation_status(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
    path: web::Path<String>,
) -> HttpResponse {
    let payment_context_code = path.into_inner();
    service.serve(
        Endpoint::ActivationStatus,
        session,
        Some(&payment_context_code),
        None,
    )
}

/// Configure activation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ecommerce/checkout/v1/transactions").route(web::post().to(activate)),
    )
    .service(
        web::resource("/checkout/payments/v1/payment-activations/{paymentContextCode}")
            .route(web::get().to(activation_status)),
    );
}
