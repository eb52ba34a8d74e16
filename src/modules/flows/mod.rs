//! Scenario engine: the flow catalog, the identifier codec that smuggles a
//! flow through domain identifiers, the client-held session token and the
//! dispatch table that turns `(endpoint, flow, attempt)` into a response.

pub mod models;
pub mod services;

pub use models::{FlowCase, FlowFamily, FlowSession, SubVariant};
pub use services::{
    resolve_flow, Endpoint, FlowSessionStore, IdentifierCodec, ResolvedFlow, ScenarioRequest,
    ScenarioResponder, ScenarioResponse,
};
