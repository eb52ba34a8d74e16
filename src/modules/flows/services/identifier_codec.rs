use serde_json::Value;

use crate::modules::flows::models::{FlowCase, SubVariant};

/// Width of the `FFVV` marker: two digits of flow code, two of variant code
pub const MARKER_LEN: usize = 4;

/// Digits cycled after the marker to reach the identifier's fixed length
const FILLER: &str = "0123456789";

/// Digit layout of one kind of domain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierLayout {
    pub name: &'static str,
    /// Digits written before the marker when encoding. Any digits are
    /// accepted in this position when decoding.
    pub lead: &'static str,
    pub total_len: usize,
    /// JSON pointer to the identifier inside a request body, if any
    pub payload_pointer: Option<&'static str>,
}

/// Payment notice reference: 11 digit domain fiscal code + 18 digit notice number
pub const RPT_ID: IdentifierLayout = IdentifierLayout {
    name: "rptId",
    lead: "77777777777",
    total_len: 29,
    payload_pointer: Some("/paymentNotices/0/rptId"),
};

/// Transaction id issued by activation
pub const TRANSACTION_ID: IdentifierLayout = IdentifierLayout {
    name: "transactionId",
    lead: "",
    total_len: 32,
    payload_pointer: None,
};

/// Scenario recovered from an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowMarker {
    pub flow: FlowCase,
    pub variant: Option<SubVariant>,
}

impl FlowMarker {
    pub fn new(flow: FlowCase, variant: Option<SubVariant>) -> Self {
        Self { flow, variant }
    }
}

/// Encodes scenarios into structurally valid identifiers and back
#[derive(Debug, Clone, Copy)]
pub struct IdentifierCodec {
    layout: IdentifierLayout,
}

impl IdentifierCodec {
    pub const fn new(layout: IdentifierLayout) -> Self {
        Self { layout }
    }

    pub const fn rpt_id() -> Self {
        Self::new(RPT_ID)
    }

    pub const fn transaction_id() -> Self {
        Self::new(TRANSACTION_ID)
    }

    pub fn layout(&self) -> &IdentifierLayout {
        &self.layout
    }

    /// Build the identifier carrying `(flow, variant)`; deterministic
    pub fn encode(&self, flow: FlowCase, variant: Option<SubVariant>) -> String {
        let mut identifier = String::with_capacity(self.layout.total_len);
        identifier.push_str(self.layout.lead);
        identifier.push_str(&format!(
            "{:02}{:02}",
            flow.code(),
            variant.map_or(0, SubVariant::code)
        ));

        let filler_len = self.layout.total_len.saturating_sub(identifier.len());
        identifier.extend(FILLER.chars().cycle().take(filler_len));
        identifier
    }

    /// Recover the scenario; foreign or malformed identifiers yield the default
    pub fn decode(&self, identifier: &str) -> FlowMarker {
        match self.try_decode(identifier) {
            Some(marker) => marker,
            None => {
                tracing::debug!(
                    layout = self.layout.name,
                    identifier = identifier,
                    "Identifier carries no known flow marker, using default flow"
                );
                FlowMarker::default()
            }
        }
    }

    /// Locate this layout's identifier inside a request body and decode its flow
    pub fn decode_from_payload(&self, payload: &Value) -> FlowCase {
        self.layout
            .payload_pointer
            .and_then(|pointer| payload.pointer(pointer))
            .and_then(Value::as_str)
            .map(|identifier| self.decode(identifier).flow)
            .unwrap_or_default()
    }

    fn try_decode(&self, identifier: &str) -> Option<FlowMarker> {
        if identifier.len() != self.layout.total_len
            || !identifier.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let start = self.layout.lead.len();
        let flow_code: u8 = identifier.get(start..start + 2)?.parse().ok()?;
        let variant_code: u8 = identifier.get(start + 2..start + MARKER_LEN)?.parse().ok()?;

        let flow = FlowCase::from_code(flow_code)?;
        let variant = match variant_code {
            0 => None,
            code => Some(SubVariant::from_code(code)?),
        };

        Some(FlowMarker { flow, variant })
    }
}
