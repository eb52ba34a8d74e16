use serde::{Deserialize, Serialize};

/// Transaction lifecycle states exposed by the checkout API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Activated,
    AuthorizationRequested,
    AuthorizationCompleted,
    NotifiedOk,
    NotifiedKo,
    CancellationRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientId {
    Checkout,
    CheckoutCart,
    Io,
}

/// 3DS2 step the client is expected to perform next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreeDsStep {
    Method,
    Challenge,
}

/// Single payment notice as sent by the client on activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNoticeInfo {
    pub rpt_id: String,
    pub amount: u64,
}

/// Activation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionRequest {
    pub payment_notices: Vec<PaymentNoticeInfo>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub pa_fiscal_code: String,
    pub digital_stamp: bool,
    pub transfer_category: String,
    pub transfer_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub payment_token: String,
    pub rpt_id: String,
    pub reason: String,
    pub amount: u64,
    pub transfer_list: Vec<Transfer>,
    #[serde(rename = "isAllCCP")]
    pub is_all_ccp: bool,
}

/// Activation success body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionResponse {
    pub transaction_id: String,
    pub payments: Vec<PaymentInfo>,
    pub status: TransactionStatus,
    pub auth_token: String,
    pub client_id: ClientId,
}

/// Gateway outcome attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayInfo {
    pub gateway: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_ds_step: Option<ThreeDsStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_ds_method_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_ds_method_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creq: Option<String>,
}

impl GatewayInfo {
    pub fn new(gateway: &str) -> Self {
        Self {
            gateway: gateway.to_string(),
            authorization_status: None,
            authorization_code: None,
            error_code: None,
            three_ds_step: None,
            three_ds_method_url: None,
            three_ds_method_data: None,
            acs_url: None,
            creq: None,
        }
    }
}

/// Status check body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub transaction_id: String,
    pub payments: Vec<PaymentInfo>,
    pub status: TransactionStatus,
    pub fee_total: u64,
    pub client_id: ClientId,
    pub auth_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_info: Option<GatewayInfo>,
}
