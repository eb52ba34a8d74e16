use serde::{Deserialize, Serialize};

/// Answer to an authorization request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResponse {
    pub authorization_url: String,
    pub authorization_request_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub abi: String,
    pub bundle_name: String,
    pub bundle_description: String,
    pub id_bundle: String,
    pub id_psp: String,
    pub id_channel: String,
    pub on_us: bool,
    pub payment_method: String,
    pub taxpayer_fee: u64,
    pub touchpoint: String,
}

/// Fee calculation body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateFeeResponse {
    pub payment_method_name: String,
    pub payment_method_description: String,
    pub payment_method_status: String,
    pub below_threshold: bool,
    pub bundles: Vec<Bundle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub payment_type_code: String,
    pub ranges: Vec<AmountRange>,
    pub asset: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsResponse {
    pub payment_methods: Vec<PaymentMethod>,
}

/// Answer of the activation poll once the node assigned a payment id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationStatusResponse {
    pub id_pagamento: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub url_redirect: String,
}

/// Auth code exchange request; fields are optional so a missing one can be
/// answered with the scripted problem instead of a parse error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    #[serde(default)]
    pub auth_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub auth_token: String,
}
