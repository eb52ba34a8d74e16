use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use super::gateway_trait::{
    CardDataGateway, CardFormFields, CreateSessionResponse, Field, SessionPaymentMethodResponse,
};
use crate::config::NpgConfig;
use crate::core::{AppError, Result};

const CORRELATION_ID_HEADER: &str = "Correlation-Id";
const API_KEY_HEADER: &str = "X-Api-key";

/// NPG (Nexi) card-data client.
///
/// Transport failures and bodies that are not JSON surface as
/// [`AppError::HttpClient`] / [`AppError::Json`] (500). A JSON body missing
/// required fields, or a non-2xx status, is a 500 for the order build and a
/// [`AppError::Gateway`] (502) for card data. Calls are never retried.
pub struct NpgClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NpgOrder {
    amount: String,
    currency: String,
    order_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NpgPaymentSession {
    action_type: String,
    amount: String,
    cancel_url: String,
    language: String,
    notification_url: String,
    payment_service: String,
    result_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NpgBuildOrderRequest {
    merchant_url: String,
    order: NpgOrder,
    payment_session: NpgPaymentSession,
    version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NpgBuildOrderResponse {
    session_id: String,
    fields: Vec<Field>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NpgCardData {
    bin: String,
    expiring_date: String,
    last_four_digits: String,
    circuit: String,
}

impl NpgClient {
    pub fn new(config: &NpgConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build NPG client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_order(merchant_url: &str) -> NpgBuildOrderRequest {
        NpgBuildOrderRequest {
            merchant_url: merchant_url.to_string(),
            order: NpgOrder {
                amount: "1000".to_string(),
                currency: "EUR".to_string(),
                order_id: "btid23838555".to_string(),
            },
            payment_session: NpgPaymentSession {
                action_type: "PAY".to_string(),
                amount: "1000".to_string(),
                cancel_url: "https://checkout.pagopa/cancel".to_string(),
                language: "ITA".to_string(),
                notification_url: "https://merchanturl.it".to_string(),
                payment_service: "CARDS".to_string(),
                result_url: "https://checkout.pagopa.it/esito".to_string(),
            },
            version: "2".to_string(),
        }
    }

    /// Read the body as JSON, then shape it. A body that is not JSON is a
    /// 500; a JSON body that does not fit `T` (or a non-2xx answer) is
    /// reported through `unusable`, so each operation picks its own status.
    async fn decode<T: DeserializeOwned>(
        response: Response,
        operation: &str,
        unusable: fn(String) -> AppError,
    ) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;

        let shaped: T = serde_json::from_value(json)
            .map_err(|e| unusable(format!("Unexpected NPG {} body: {}", operation, e)))?;

        if !status.is_success() {
            return Err(unusable(format!("NPG {} returned {}", operation, status)));
        }

        Ok(shaped)
    }
}

#[async_trait]
impl CardDataGateway for NpgClient {
    async fn create_form_session(&self, merchant_url: &str) -> Result<CreateSessionResponse> {
        let url = format!("{}/orders/build", self.base_url);
        let correlation_id = Uuid::new_v4();
        tracing::info!(%correlation_id, merchant_url, "Invoking NPG order build");

        let response = self
            .client
            .post(&url)
            .header(CORRELATION_ID_HEADER, correlation_id.to_string())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::build_order(merchant_url))
            .send()
            .await?;

        let order: NpgBuildOrderResponse =
            Self::decode(response, "order build", AppError::Internal).await?;

        Ok(CreateSessionResponse {
            session_id: order.session_id,
            payment_method_data: CardFormFields {
                payment_method: "CARDS".to_string(),
                form: order.fields,
            },
        })
    }

    async fn retrieve_card_data(&self, session_id: &str) -> Result<SessionPaymentMethodResponse> {
        let url = format!("{}/build/cardData", self.base_url);
        let correlation_id = Uuid::new_v4();
        tracing::info!(%correlation_id, session_id, "Invoking NPG card data");

        let response = self
            .client
            .get(&url)
            .query(&[("sessionId", session_id)])
            .header(CORRELATION_ID_HEADER, correlation_id.to_string())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let card: NpgCardData =
            Self::decode(response, "card data", AppError::Gateway).await?;

        Ok(SessionPaymentMethodResponse {
            session_id: session_id.to_string(),
            bin: card.bin,
            expiring_date: card.expiring_date,
            last_four_digits: card.last_four_digits,
            brand: card.circuit,
        })
    }

    fn name(&self) -> &str {
        "npg"
    }
}
