use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use reqwest::Client;

use crate::config::ProxyConfig;
use crate::core::{AppError, ProblemJson, Result};

/// Relays unmatched requests to the configured backend
pub struct ProxyForwarder {
    client: Client,
    target: String,
}

impl ProxyForwarder {
    /// `None` when no passthrough target is configured
    pub fn from_config(config: &ProxyConfig) -> Result<Option<Self>> {
        let Some(target) = config.target.as_ref() else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build proxy client: {}", e)))?;

        Ok(Some(Self {
            client,
            target: target.trim_end_matches('/').to_string(),
        }))
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub async fn forward(&self, req: &HttpRequest, body: web::Bytes) -> Result<HttpResponse> {
        let path_and_query = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = format!("{}{}", self.target, path_and_query);

        let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
            .map_err(|e| AppError::validation(format!("Unsupported method: {}", e)))?;

        let mut upstream = self.client.request(method, &url).body(body.to_vec());
        if let Some(content_type) = req
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            upstream = upstream.header(reqwest::header::CONTENT_TYPE, content_type);
        }

        tracing::debug!(method = %req.method(), url = %url, "Forwarding unmatched request");
        let response = upstream
            .send()
            .await
            .map_err(|e| AppError::gateway(format!("Passthrough to {} failed: {}", self.target, e)))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| AppError::gateway(format!("Invalid upstream status: {}", e)))?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read passthrough body: {}", e)))?;

        let mut relay = HttpResponse::build(status);
        if let Some(content_type) = content_type {
            relay.content_type(content_type);
        }
        Ok(relay.body(bytes))
    }
}

/// App default service: passthrough or 404 ProblemJson
pub async fn default_service(
    req: HttpRequest,
    body: web::Bytes,
    forwarder: Option<web::Data<ProxyForwarder>>,
) -> HttpResponse {
    match forwarder {
        Some(forwarder) => match forwarder.forward(&req, body).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "Passthrough failed");
                err.error_response()
            }
        },
        None => {
            tracing::debug!(path = %req.path(), "No route and no passthrough target");
            HttpResponse::NotFound().json(
                ProblemJson::new("Not Found")
                    .with_status(StatusCode::NOT_FOUND)
                    .with_detail(format!("No mock route for {} {}", req.method(), req.path())),
            )
        }
    }
}
