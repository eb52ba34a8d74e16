use actix_web::{cookie::Cookie, http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::core::ProblemJson;
use crate::modules::flows::models::{FlowCase, SubVariant};

use super::flow_resolver::ResolvedFlow;

/// Simulated endpoints that have scripted outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Activation,
    TransactionStatus,
    AuthRequest,
    ResumeAuthorization,
    CancelTransaction,
    PaymentMethods,
    CalculateFee,
    ActivationStatus,
    AuthToken,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::Activation,
        Endpoint::TransactionStatus,
        Endpoint::AuthRequest,
        Endpoint::ResumeAuthorization,
        Endpoint::CancelTransaction,
        Endpoint::PaymentMethods,
        Endpoint::CalculateFee,
        Endpoint::ActivationStatus,
        Endpoint::AuthToken,
    ];

    /// Polling endpoints advance the session attempt counter after answering
    pub fn is_polling(self) -> bool {
        matches!(self, Endpoint::TransactionStatus | Endpoint::ActivationStatus)
    }
}

/// Status and JSON body produced for one scripted call
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ScenarioResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self::new(status, value),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize scenario body");
                Self::problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemJson::new("Internal server error"),
                )
            }
        }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::json(StatusCode::OK, body)
    }

    pub fn problem(status: StatusCode, problem: ProblemJson) -> Self {
        Self::json(status, &problem)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn into_http(self, cookie: Option<Cookie<'static>>) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status);
        if let Some(cookie) = cookie {
            builder.cookie(cookie);
        }
        builder.json(self.body)
    }
}

/// Inputs a response builder may look at
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRequest<'a> {
    pub flow: FlowCase,
    pub variant: Option<SubVariant>,
    pub attempt: u32,
    pub transaction_id: &'a str,
    pub payload: Option<&'a Value>,
}

impl<'a> ScenarioRequest<'a> {
    pub fn new(flow: FlowCase, variant: Option<SubVariant>, transaction_id: &'a str) -> Self {
        Self {
            flow,
            variant,
            attempt: 0,
            transaction_id,
            payload: None,
        }
    }

    pub fn from_resolved(resolved: &ResolvedFlow, transaction_id: &'a str) -> Self {
        Self {
            flow: resolved.flow,
            variant: resolved.variant,
            attempt: resolved.attempt,
            transaction_id,
            payload: None,
        }
    }

    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    pub fn with_payload(mut self, payload: &'a Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Static inputs shared by every builder
#[derive(Debug, Clone)]
pub struct ResponderSettings {
    pub notification_base_url: String,
}

pub type ResponseBuilder =
    Box<dyn Fn(&ScenarioRequest<'_>, &ResponderSettings) -> ScenarioResponse + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DispatchKey {
    endpoint: Endpoint,
    flow: FlowCase,
    variant: Option<SubVariant>,
}

/// Collects builders before the table is frozen into a [`ScenarioResponder`]
pub struct DispatchTableBuilder {
    entries: HashMap<DispatchKey, ResponseBuilder>,
}

impl DispatchTableBuilder {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register the builder for `(endpoint, flow, variant)`
    pub fn register<F>(
        mut self,
        endpoint: Endpoint,
        flow: FlowCase,
        variant: Option<SubVariant>,
        builder: F,
    ) -> Self
    where
        F: Fn(&ScenarioRequest<'_>, &ResponderSettings) -> ScenarioResponse + Send + Sync + 'static,
    {
        let key = DispatchKey {
            endpoint,
            flow,
            variant,
        };
        if self.entries.insert(key, Box::new(builder)).is_some() {
            tracing::warn!(?endpoint, %flow, ?variant, "Scenario registered twice, last one wins");
        }
        self
    }

    /// Register the endpoint's fallback for flows it does not script
    pub fn default_for<F>(self, endpoint: Endpoint, builder: F) -> Self
    where
        F: Fn(&ScenarioRequest<'_>, &ResponderSettings) -> ScenarioResponse + Send + Sync + 'static,
    {
        self.register(endpoint, FlowCase::Ok, None, builder)
    }

    pub fn build(self, settings: ResponderSettings) -> ScenarioResponder {
        ScenarioResponder {
            table: self.entries,
            settings,
        }
    }
}

impl Default for DispatchTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable `(endpoint, flow, variant) -> builder` table.
///
/// Lookup order: exact key, then the flow without variant, then the
/// endpoint's default entry.
pub struct ScenarioResponder {
    table: HashMap<DispatchKey, ResponseBuilder>,
    settings: ResponderSettings,
}

impl ScenarioResponder {
    pub fn respond(&self, endpoint: Endpoint, request: &ScenarioRequest<'_>) -> ScenarioResponse {
        let response = match self.lookup(endpoint, request.flow, request.variant) {
            Some(builder) => builder(request, &self.settings),
            None => {
                tracing::error!(?endpoint, "No default scenario registered for endpoint");
                ScenarioResponse::problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemJson::new("Scenario not configured")
                        .with_status(StatusCode::INTERNAL_SERVER_ERROR),
                )
            }
        };

        tracing::info!(
            ?endpoint,
            flow = %request.flow,
            variant = ?request.variant,
            attempt = request.attempt,
            status = response.status.as_u16(),
            "Serving scripted response"
        );

        response
    }

    pub fn has_default(&self, endpoint: Endpoint) -> bool {
        self.lookup(endpoint, FlowCase::Ok, None).is_some()
    }

    pub fn settings(&self) -> &ResponderSettings {
        &self.settings
    }

    fn lookup(
        &self,
        endpoint: Endpoint,
        flow: FlowCase,
        variant: Option<SubVariant>,
    ) -> Option<&ResponseBuilder> {
        [
            DispatchKey { endpoint, flow, variant },
            DispatchKey { endpoint, flow, variant: None },
            DispatchKey { endpoint, flow: FlowCase::Ok, variant: None },
        ]
        .iter()
        .find_map(|key| self.table.get(key))
    }
}

impl fmt::Debug for ScenarioResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioResponder")
            .field("entries", &self.table.len())
            .field("settings", &self.settings)
            .finish()
    }
}

/// Serve `pending` for attempts `0..resolves_after`, `resolved` from then on
pub fn poll_until<P, R>(
    resolves_after: u32,
    pending: P,
    resolved: R,
) -> impl Fn(&ScenarioRequest<'_>, &ResponderSettings) -> ScenarioResponse + Send + Sync + 'static
where
    P: Fn(&ScenarioRequest<'_>, &ResponderSettings) -> ScenarioResponse + Send + Sync + 'static,
    R: Fn(&ScenarioRequest<'_>, &ResponderSettings) -> ScenarioResponse + Send + Sync + 'static,
{
    move |request, settings| {
        if request.attempt < resolves_after {
            pending(request, settings)
        } else {
            resolved(request, settings)
        }
    }
}
