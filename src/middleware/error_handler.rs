use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};

use crate::core::ProblemJson;

/// `JsonConfig` error handler: malformed request bodies become a 400 ProblemJson
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let problem = ProblemJson::new("Bad Request")
        .with_status(StatusCode::BAD_REQUEST)
        .with_detail(err.to_string());
    let response = HttpResponse::BadRequest().json(problem);

    InternalError::from_response(err, response).into()
}
