use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::modules::ecommerce::services::CheckoutService;
use crate::modules::flows::models::FlowSession;
use crate::modules::flows::services::Endpoint;

/// Check transaction status; advances the polling counter
/// GET /ecommerce/checkout/v2/transactions/{transactionId}
pub async fn get_transaction(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
    path: web::Path<String>,
) -> HttpResponse {
    let transaction_id = path.into_inner();
    service.serve(Endpoint::TransactionStatus, session, Some(&transaction_id), None)
}

/// Request authorization for a transaction
/// POST /ecommerce/checkout/v2/transactions/{transactionId}/auth-requests
pub async fn request_authorization(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
    path: web::Path<String>,
    body: Option<web::Json<Value>>,
) -> HttpResponse {
    let transaction_id = path.into_inner();
    service.serve(
        Endpoint::AuthRequest,
        session,
        Some(&transaction_id),
        body.as_deref(),
    )
}

/// Resume authorization after the 3DS2 challenge
/// POST /ecommerce/checkout/v1/transactions/{transactionId}/auth-requests/resume
pub async fn resume_authorization(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
    path: web::Path<String>,
) -> HttpResponse {
    let transaction_id = path.into_inner();
    service.serve(Endpoint::ResumeAuthorization, session, Some(&transaction_id), None)
}

/// Cancel a transaction on user request
/// DELETE /ecommerce/checkout/v1/transactions/{transactionId}
pub async fn cancel_transaction(
    service: web::Data<Arc<CheckoutService>>,
    session: FlowSession,
    path: web::Path<String>,
) -> HttpResponse {
    let transaction_id = path.into_inner();
    service.serve(Endpoint::CancelTransaction, session, Some(&transaction_id), None)
}

/// Configure transaction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ecommerce/checkout/v2/transactions/{transactionId}")
            .route(web::get().to(get_transaction)),
    )
    .service(
        web::resource("/ecommerce/checkout/v2/transactions/{transactionId}/auth-requests")
            .route(web::post().to(request_authorization)),
    )
    .service(
        web::resource("/ecommerce/checkout/v1/transactions/{transactionId}/auth-requests/resume")
            .route(web::post().to(resume_authorization)),
    )
    .service(
        web::resource("/ecommerce/checkout/v1/transactions/{transactionId}")
            .route(web::delete().to(cancel_transaction)),
    );
}
