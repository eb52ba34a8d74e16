use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIdResponse {
    pub id_payment: String,
}

/// Payment manager user as attached to a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_terms: Option<bool>,
    pub email: String,
    pub fiscal_code: String,
    pub notification_email: String,
    pub registered: bool,
    pub status: String,
    pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id_payment: String,
    pub session_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub data: User,
}

/// Wallet create/update envelope; the wallet itself is echoed back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletEnvelope {
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Psp {
    pub id: u64,
    pub id_psp: String,
    pub business_name: String,
    pub payment_type: String,
    pub fixed_cost: Amount,
    pub lingua: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    pub amount: u64,
    pub currency: String,
    pub decimal_digits: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PspListResponse {
    pub data: Vec<Psp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserInfo {
    pub accept: String,
    pub ip: String,
    pub useragent: String,
}
