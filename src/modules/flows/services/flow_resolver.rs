use crate::modules::flows::models::{FlowCase, FlowSession, SubVariant};

use super::identifier_codec::IdentifierCodec;

/// Scenario a handler should serve, with the attempt counter to key polling on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFlow {
    pub flow: FlowCase,
    pub variant: Option<SubVariant>,
    pub attempt: u32,
}

impl ResolvedFlow {
    /// Session to hand back to the client after a polling response
    pub fn next_session(&self) -> FlowSession {
        FlowSession {
            flow: self.flow,
            attempt: self.attempt,
        }
        .advanced()
    }
}

/// Combine the identifier a request carries with its session token.
///
/// An identifier naming a non-default flow wins over the token; the token's
/// counter is only trusted when it belongs to that same flow. Without such an
/// identifier the token alone decides.
pub fn resolve_flow(
    codec: &IdentifierCodec,
    session: FlowSession,
    identifier: Option<&str>,
) -> ResolvedFlow {
    let marker = identifier.map(|id| codec.decode(id)).unwrap_or_default();

    if marker.flow != FlowCase::Ok {
        let attempt = if session.flow == marker.flow {
            session.attempt
        } else {
            0
        };

        return ResolvedFlow {
            flow: marker.flow,
            variant: marker.variant,
            attempt,
        };
    }

    ResolvedFlow {
        flow: session.flow,
        variant: session.flow.sub_variant(),
        attempt: session.attempt,
    }
}
