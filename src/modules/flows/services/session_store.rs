use actix_web::{cookie::Cookie, dev::Payload, web, FromRequest, HttpRequest};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use std::future::{ready, Ready};

use crate::core::{AppError, Result};
use crate::modules::flows::models::{FlowCase, FlowSession};

type HmacSha256 = Hmac<Sha256>;

/// Cookie carrying the flow session token
pub const SESSION_COOKIE: &str = "checkout_mock_flow";

/// Issues and validates client-held flow session tokens.
///
/// Token format: `base64url(json)` `.` `hex(hmac_sha256(payload))`.
/// Nothing is kept server side; a token that fails validation reads as
/// the default session.
#[derive(Clone)]
pub struct FlowSessionStore {
    mac: HmacSha256,
}

impl FlowSessionStore {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret.as_ref())
            .map_err(|e| AppError::Configuration(format!("Invalid session secret: {}", e)))?;

        Ok(Self { mac })
    }

    /// Mint the first token of a flow
    pub fn start(&self, flow: FlowCase) -> String {
        self.issue(&FlowSession::start(flow))
    }

    /// Parse a token, failing closed to the default session
    pub fn read(&self, token: Option<&str>) -> FlowSession {
        token.and_then(|t| self.verify(t)).unwrap_or_default()
    }

    /// Token for the same flow with the attempt counter incremented
    pub fn advance(&self, token: Option<&str>) -> String {
        self.issue(&self.read(token).advanced())
    }

    pub fn issue(&self, session: &FlowSession) -> String {
        let payload = serde_json::json!({
            "flow": session.flow,
            "attempt": session.attempt,
        })
        .to_string();

        let encoded = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        let mut mac = self.mac.clone();
        mac.update(encoded.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        format!("{}.{}", encoded, signature)
    }

    /// Session carried by the request cookie, default when absent or invalid
    pub fn read_request(&self, req: &HttpRequest) -> FlowSession {
        let cookie = req.cookie(SESSION_COOKIE);
        self.read(cookie.as_ref().map(|c| c.value()))
    }

    pub fn cookie(&self, session: &FlowSession) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, self.issue(session))
            .path("/")
            .http_only(true)
            .finish()
    }

    fn verify(&self, token: &str) -> Option<FlowSession> {
        let (payload, signature) = token.split_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        if mac.verify_slice(&signature).is_err() {
            tracing::warn!("Flow session token signature mismatch, using default flow");
            return None;
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

impl fmt::Debug for FlowSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowSessionStore").finish_non_exhaustive()
    }
}

/// Extract the caller's flow session; never rejects a request
impl FromRequest for FlowSession {
    type Error = actix_web::Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .app_data::<web::Data<FlowSessionStore>>()
            .map(|store| store.read_request(req))
            .unwrap_or_default();

        ready(Ok(session))
    }
}
