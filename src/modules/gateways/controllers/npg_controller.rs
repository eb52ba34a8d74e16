use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::core::{AppError, ProblemJson};
use crate::modules::ecommerce::controllers::payment_method_controller::TRANSACTION_ID_HEADER;
use crate::modules::gateways::services::CardDataGateway;

/// Render any upstream failure with the fixed NPG problem body
fn npg_failure(err: AppError) -> HttpResponse {
    tracing::error!(error = %err, "NPG card-data call failed");
    HttpResponse::build(err.status_code()).json(ProblemJson::npg_invalid_body())
}

/// Create a hosted card form session on NPG
/// POST /ecommerce/checkout/v1/payment-methods/{id}/sessions
pub async fn create_session(
    gateway: web::Data<Arc<dyn CardDataGateway>>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let payment_method_id = path.into_inner();
    let merchant_url = {
        let info = req.connection_info();
        format!("{}://{}", info.scheme(), info.host())
    };
    tracing::info!(%payment_method_id, "Creating card form session");

    match gateway.create_form_session(&merchant_url).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(err) => npg_failure(err),
    }
}

/// Retrieve the card captured by a form session
/// GET /ecommerce/checkout/v1/payment-methods/{id}/sessions/{sessionId}
pub async fn get_session_card_data(
    gateway: web::Data<Arc<dyn CardDataGateway>>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    if !req.headers().contains_key(TRANSACTION_ID_HEADER) {
        tracing::info!("Card data requested without {}", TRANSACTION_ID_HEADER);
        let err = AppError::unauthorized(format!("Missing {} header", TRANSACTION_ID_HEADER));
        return err.error_response();
    }

    let (_, session_id) = path.into_inner();
    match gateway.retrieve_card_data(&session_id).await {
        Ok(card) => HttpResponse::Ok().json(card),
        Err(err) => npg_failure(err),
    }
}

/// Configure NPG session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ecommerce/checkout/v1/payment-methods/{id}/sessions")
            .route(web::post().to(create_session)),
    )
    .service(
        web::resource("/ecommerce/checkout/v1/payment-methods/{id}/sessions/{sessionId}")
            .route(web::get().to(get_session_card_data)),
    );
}
