use crate::core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote card-data service used by the card payment form
#[async_trait]
pub trait CardDataGateway: Send + Sync {
    /// Build a payment form session; `merchant_url` is the origin the form is served from
    async fn create_form_session(&self, merchant_url: &str) -> Result<CreateSessionResponse>;

    /// Fetch the card summary captured by a form session
    async fn retrieve_card_data(&self, session_id: &str) -> Result<SessionPaymentMethodResponse>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// A single hosted form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: String,
    pub class: String,
    pub id: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFormFields {
    pub payment_method: String,
    pub form: Vec<Field>,
}

/// Answer to a form session creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub payment_method_data: CardFormFields,
}

/// Card summary for a completed form session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPaymentMethodResponse {
    pub session_id: String,
    pub bin: String,
    pub expiring_date: String,
    pub last_four_digits: String,
    pub brand: String,
}
