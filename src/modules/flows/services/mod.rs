pub mod flow_resolver;
pub mod identifier_codec;
pub mod responder;
pub mod session_store;
pub mod three_ds;

pub use flow_resolver::{resolve_flow, ResolvedFlow};
pub use identifier_codec::{FlowMarker, IdentifierCodec, IdentifierLayout, RPT_ID, TRANSACTION_ID};
pub use responder::{
    poll_until, DispatchTableBuilder, Endpoint, ResponderSettings, ScenarioRequest,
    ScenarioResponder, ScenarioResponse,
};
pub use session_store::{FlowSessionStore, SESSION_COOKIE};
