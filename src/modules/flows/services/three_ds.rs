use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Fixed 3DS server transaction id advertised in every method payload
pub const THREE_DS_SERVER_TRANS_ID: &str = "97808490-b371-4f5f-bb9c-5f5de61107d0";

/// Body of the 3DS2 method step, before base64 encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodData {
    #[serde(rename = "threeDSMethodNotificationURL")]
    pub notification_url: String,

    #[serde(rename = "threeDSServerTransID")]
    pub server_trans_id: String,
}

/// Callback URL the ACS notifies once the method step completes
pub fn method_notification_url(base_url: &str, transaction_id: &str) -> String {
    let encoded_id = STANDARD.encode(transaction_id.as_bytes());
    format!(
        "{}/api/checkout/v1/transactions/{}/method",
        base_url.trim_end_matches('/'),
        encoded_id
    )
}

/// Build `threeDSMethodData`: base64 of the JSON document whose callback URL
/// itself carries base64 of the decimal transaction id
pub fn encode_method_data(base_url: &str, transaction_id: &str) -> Result<String> {
    let data = MethodData {
        notification_url: method_notification_url(base_url, transaction_id),
        server_trans_id: THREE_DS_SERVER_TRANS_ID.to_string(),
    };

    let json = serde_json::to_vec(&data)?;
    Ok(STANDARD.encode(json))
}
