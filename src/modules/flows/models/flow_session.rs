use serde::{Deserialize, Serialize};

use super::flow_case::FlowCase;

/// Client-held state of one end-to-end flow.
///
/// Never stored on the server: it travels inside the signed session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FlowSession {
    pub flow: FlowCase,
    pub attempt: u32,
}

impl FlowSession {
    pub fn start(flow: FlowCase) -> Self {
        Self { flow, attempt: 0 }
    }

    /// Same flow, one more attempt. The counter never decrements.
    pub fn advanced(self) -> Self {
        Self {
            flow: self.flow,
            attempt: self.attempt.saturating_add(1),
        }
    }
}
