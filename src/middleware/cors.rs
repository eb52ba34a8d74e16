use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Any origin may call the mock; methods and headers match what the
/// checkout frontend sends
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-transaction-id-from-client"),
        ])
        .max_age(3600)
}
