use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::modules::ecommerce::services::CheckoutService;
use crate::modules::flows::models::FlowSession;
use crate::modules::flows::services::Endpoint;

/// Header the frontend uses to forward the transaction it is paying
pub const TRANSACTION_ID_HEADER: &str = "x-transaction-id-from-client";

/// List payment methods available to the transaction
/// GET /ecommerce/checkout/v1/payment-methods
pub async fn list_payment_methods(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
) -> HttpResponse {
    service.serve(Endpoint::PaymentMethods, session, None, None)
}

/// Calculate PSP bundles and fees for a payment method
/// POST /ecommerce/checkout/v2/payment-methods/{id}/fees
pub async fn calculate_fees(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
    req: HttpRequest,
) -> HttpResponse {
    let transaction_id = req
        .headers()
        .get(TRANSACTION_ID_HEADER)
        .and_then(|value| value.to_str().ok());

    service.serve(Endpoint::CalculateFee, session, transaction_id, None)
}

/// Configure payment method routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ecommerce/checkout/v1/payment-methods")
            .route(web::get().to(list_payment_methods)),
    )
    .service(
        web::resource("/ecommerce/checkout/v2/payment-methods/{id}/fees")
            .route(web::post().to(calculate_fees)),
    );
}
