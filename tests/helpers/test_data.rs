// Test Data Factory
//
// Builds identifiers and request bodies that select a given flow.

use checkout_mock::flows::services::IdentifierCodec;
use checkout_mock::flows::FlowCase;
use serde_json::{json, Value};

pub const ACTIVATE_PATH: &str = "/ecommerce/checkout/v1/transactions";

/// Test data factory for flow-selecting identifiers and payloads
pub struct TestDataFactory;

impl TestDataFactory {
    /// Notice code that selects `flow` on activation
    pub fn rpt_id(flow: FlowCase) -> String {
        IdentifierCodec::rpt_id().encode(flow, None)
    }

    /// Transaction id the mock issues when `flow` is activated
    pub fn transaction_id(flow: FlowCase) -> String {
        IdentifierCodec::transaction_id().encode(flow, flow.sub_variant())
    }

    /// Activation body for a single notice
    pub fn activation_payload(flow: FlowCase) -> Value {
        json!({
            "paymentNotices": [
                { "rptId": Self::rpt_id(flow), "amount": 12000 }
            ],
            "email": "mario.rossi@example.com"
        })
    }

    pub fn auth_request_payload() -> Value {
        json!({
            "amount": 12000,
            "fee": 95,
            "paymentInstrumentId": "f25399bf-c56f-4bd2-adc9-7aef87410609",
            "pspId": "AGID_01",
            "language": "IT",
            "isAllCCP": false
        })
    }

    pub fn status_path(transaction_id: &str) -> String {
        format!("/ecommerce/checkout/v2/transactions/{}", transaction_id)
    }

    pub fn auth_request_path(transaction_id: &str) -> String {
        format!("/ecommerce/checkout/v2/transactions/{}/auth-requests", transaction_id)
    }

    pub fn resume_path(transaction_id: &str) -> String {
        format!(
            "/ecommerce/checkout/v1/transactions/{}/auth-requests/resume",
            transaction_id
        )
    }

    pub fn cancel_path(transaction_id: &str) -> String {
        format!("/ecommerce/checkout/v1/transactions/{}", transaction_id)
    }

    pub fn activation_poll_path(payment_context_code: &str) -> String {
        format!(
            "/checkout/payments/v1/payment-activations/{}",
            payment_context_code
        )
    }
}
