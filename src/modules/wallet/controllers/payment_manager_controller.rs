use actix_web::{web, HttpResponse};

use crate::modules::wallet::fixtures;
use crate::modules::wallet::models::WalletEnvelope;

/// GET /getPaymentId
pub async fn get_payment_id() -> HttpResponse {
    HttpResponse::Ok().json(fixtures::payment_id())
}

/// GET /pp-restapi/v4/payments/{id}/actions/check
pub async fn check_payment(_path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(fixtures::payment_check())
}

/// POST /pp-restapi/v4/users/actions/start-session
pub async fn start_session() -> HttpResponse {
    HttpResponse::Ok().json(fixtures::start_session())
}

/// POST /pp-restapi/v4/users/actions/approve-terms
pub async fn approve_terms() -> HttpResponse {
    HttpResponse::Ok().json(fixtures::approve_terms())
}

/// Create a wallet from the submitted card
/// POST /pp-restapi/v4/wallet
pub async fn create_wallet(body: web::Json<WalletEnvelope>) -> HttpResponse {
    let wallet = fixtures::wallet(&body.data, fixtures::WALLET_ID);
    HttpResponse::Ok().json(WalletEnvelope { data: wallet })
}

/// Update the PSP of an existing wallet
/// PUT /pp-restapi/v4/wallet/{idWallet}
pub async fn update_wallet(
    path: web::Path<u64>,
    body: web::Json<WalletEnvelope>,
) -> HttpResponse {
    let wallet = fixtures::wallet(&body.data, path.into_inner());
    HttpResponse::Ok().json(WalletEnvelope { data: wallet })
}

/// GET /pp-restapi/v4/psps
pub async fn list_psps() -> HttpResponse {
    HttpResponse::Ok().json(fixtures::psps())
}

/// GET /api/checkout/payments/v1/browsers/current/info
pub async fn browser_info() -> HttpResponse {
    HttpResponse::Ok().json(fixtures::browser_info())
}

/// Configure payment manager routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/getPaymentId").route(web::get().to(get_payment_id)))
        .service(
            web::scope("/pp-restapi/v4")
                .route("/payments/{id}/actions/check", web::get().to(check_payment))
                .route("/users/actions/start-session", web::post().to(start_session))
                .route("/users/actions/approve-terms", web::post().to(approve_terms))
                .route("/wallet", web::post().to(create_wallet))
                .route("/wallet/{idWallet}", web::put().to(update_wallet))
                .route("/psps", web::get().to(list_psps)),
        )
        .service(
            web::resource("/api/checkout/payments/v1/browsers/current/info")
                .route(web::get().to(browser_info)),
        );
}
