use actix_web::HttpResponse;
use serde_json::Value;

use crate::modules::flows::models::FlowSession;
use crate::modules::flows::services::{
    resolve_flow, Endpoint, FlowSessionStore, IdentifierCodec, ScenarioRequest, ScenarioResponder,
};

/// Glue between HTTP handlers and the scenario engine: resolves the flow a
/// request belongs to, asks the responder for the scripted answer and
/// decides whether the session cookie is (re)issued.
pub struct CheckoutService {
    responder: ScenarioResponder,
    sessions: FlowSessionStore,
    rpt_ids: IdentifierCodec,
    transaction_ids: IdentifierCodec,
}

impl CheckoutService {
    pub fn new(responder: ScenarioResponder, sessions: FlowSessionStore) -> Self {
        Self {
            responder,
            sessions,
            rpt_ids: IdentifierCodec::rpt_id(),
            transaction_ids: IdentifierCodec::transaction_id(),
        }
    }

    /// Activation picks the flow from the first notice's rptId and, on
    /// success, starts a fresh session for it.
    pub fn activate(&self, payload: &Value) -> HttpResponse {
        let flow = self.rpt_ids.decode_from_payload(payload);
        let variant = flow.sub_variant();
        let transaction_id = self.transaction_ids.encode(flow, variant);

        let request = ScenarioRequest::new(flow, variant, &transaction_id).with_payload(payload);
        let response = self.responder.respond(Endpoint::Activation, &request);

        let cookie = if response.is_success() {
            tracing::debug!(
                %flow,
                family = ?flow.family(),
                transaction_id = %transaction_id,
                "Starting flow session"
            );
            Some(self.sessions.cookie(&FlowSession::start(flow)))
        } else {
            None
        };

        response.into_http(cookie)
    }

    /// Serve a scripted endpoint for a request that may carry an identifier
    pub fn serve(
        &self,
        endpoint: Endpoint,
        session: FlowSession,
        identifier: Option<&str>,
        payload: Option<&Value>,
    ) -> HttpResponse {
        let resolved = resolve_flow(&self.transaction_ids, session, identifier);

        let mut request = ScenarioRequest::from_resolved(&resolved, identifier.unwrap_or_default());
        if let Some(payload) = payload {
            request = request.with_payload(payload);
        }

        let response = self.responder.respond(endpoint, &request);

        // Polling always re-issues, so the counter never goes backwards
        let cookie = endpoint
            .is_polling()
            .then(|| self.sessions.cookie(&resolved.next_session()));

        response.into_http(cookie)
    }

    pub fn sessions(&self) -> &FlowSessionStore {
        &self.sessions
    }

    /// Every scripted endpoint has a fallback entry
    pub fn is_complete(&self) -> bool {
        Endpoint::ALL
            .into_iter()
            .all(|endpoint| self.responder.has_default(endpoint))
    }
}
