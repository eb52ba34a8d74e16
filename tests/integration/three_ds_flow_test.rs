// Integration tests for the card authorization branches
//
// Each VPOS/XPAY flow is activated, authorized and then walked through its
// status checks and challenge resume, as the checkout frontend does.

#[path = "../helpers/mod.rs"]
mod helpers;

use base64::{engine::general_purpose::STANDARD, Engine};
use checkout_mock::flows::services::three_ds::{MethodData, THREE_DS_SERVER_TRANS_ID};
use checkout_mock::flows::FlowCase;
use helpers::*;

/// Activate `flow` and return the issued transaction id
async fn activate(client: &mut FlowClient<'_>, flow: FlowCase) -> String {
    let reply = client
        .post(ACTIVATE_PATH, &TestDataFactory::activation_payload(flow))
        .await;
    assert_ok(&reply);

    reply.body["transactionId"]
        .as_str()
        .expect("transactionId in activation reply")
        .to_string()
}

#[actix_web::test]
async fn test_method_then_challenge_then_authorized() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateVposMethodChallengeAuth).await;

    let auth = client
        .post(
            &TestDataFactory::auth_request_path(&transaction_id),
            &TestDataFactory::auth_request_payload(),
        )
        .await;
    assert_ok(&auth);
    assert_eq!(
        auth.body["authorizationUrl"],
        format!(
            "http://localhost:8080/ecommerce-fe/gdi-check#transactionId={}",
            transaction_id
        )
    );

    let method = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_transaction_status(&method, "AUTHORIZATION_REQUESTED");
    assert_eq!(method.body["gatewayInfo"]["threeDsStep"], "METHOD");
    assert_session_issued(&method);

    let challenge = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_transaction_status(&challenge, "AUTHORIZATION_REQUESTED");
    assert_eq!(challenge.body["gatewayInfo"]["threeDsStep"], "CHALLENGE");
    assert!(challenge.body["gatewayInfo"]["acsUrl"].is_string());
    assert!(challenge.body["gatewayInfo"]["creq"].is_string());

    let resumed = client
        .post(&TestDataFactory::resume_path(&transaction_id), &serde_json::json!({}))
        .await;
    assert_transaction_status(&resumed, "NOTIFIED_OK");
    assert_eq!(resumed.body["gatewayInfo"]["authorizationStatus"], "AUTHORIZED");
}

#[actix_web::test]
async fn test_method_data_embeds_transaction_id() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateVposMethodAuth).await;

    let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_ok(&reply);

    let encoded = reply.body["gatewayInfo"]["threeDsMethodData"]
        .as_str()
        .expect("threeDsMethodData");
    let data: MethodData = serde_json::from_slice(&STANDARD.decode(encoded).unwrap()).unwrap();
    assert_eq!(data.server_trans_id, THREE_DS_SERVER_TRANS_ID);

    let segments: Vec<&str> = data.notification_url.rsplit('/').collect();
    assert_eq!(segments[0], "method");
    let embedded = String::from_utf8(STANDARD.decode(segments[1]).unwrap()).unwrap();
    assert_eq!(embedded, transaction_id);
}

#[actix_web::test]
async fn test_method_only_branch_stays_on_method_step() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateVposMethodDeny).await;

    for _ in 0..3 {
        let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;
        assert_eq!(reply.body["gatewayInfo"]["threeDsStep"], "METHOD");
    }

    let resumed = client
        .post(&TestDataFactory::resume_path(&transaction_id), &serde_json::json!({}))
        .await;
    assert_transaction_status(&resumed, "NOTIFIED_KO");
}

#[actix_web::test]
async fn test_direct_branches_resolve_immediately() {
    let srv = spawn_app();

    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateVposDirectAuth).await;
    let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_transaction_status(&reply, "NOTIFIED_OK");
    assert_eq!(reply.body["gatewayInfo"]["gateway"], "VPOS");
    assert_eq!(reply.body["gatewayInfo"]["authorizationStatus"], "AUTHORIZED");

    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateVposDirectDeny).await;
    let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_transaction_status(&reply, "NOTIFIED_KO");
    assert_eq!(reply.body["gatewayInfo"]["authorizationStatus"], "DENIED");
    assert_eq!(reply.body["gatewayInfo"]["errorCode"], "99");
}

#[actix_web::test]
async fn test_challenge_deny_branch() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateVposChallengeDeny).await;

    let challenge = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_eq!(challenge.body["gatewayInfo"]["threeDsStep"], "CHALLENGE");

    let resumed = client
        .post(&TestDataFactory::resume_path(&transaction_id), &serde_json::json!({}))
        .await;
    assert_transaction_status(&resumed, "NOTIFIED_KO");
    assert_eq!(resumed.body["gatewayInfo"]["authorizationStatus"], "DENIED");
}

#[actix_web::test]
async fn test_payment_not_found_branch() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateVposPaymentNotFound).await;

    let status = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_problem(&status, 404, "Payment not found");

    let resumed = client
        .post(&TestDataFactory::resume_path(&transaction_id), &serde_json::json!({}))
        .await;
    assert_problem(&resumed, 404, "Payment not found");
}

#[actix_web::test]
async fn test_xpay_branches() {
    let srv = spawn_app();

    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateXpayTransactionIdSuccess).await;
    let auth = client
        .post(
            &TestDataFactory::auth_request_path(&transaction_id),
            &TestDataFactory::auth_request_payload(),
        )
        .await;
    assert!(auth.body["authorizationUrl"]
        .as_str()
        .unwrap()
        .contains("/ecommerce-fe/esito#transactionId="));
    let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_transaction_status(&reply, "NOTIFIED_OK");
    assert_eq!(reply.body["gatewayInfo"]["gateway"], "XPAY");

    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateXpayTransactionIdNotFound).await;
    let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_problem(&reply, 404, "Transaction not found");
    assert_eq!(
        reply.body["detail"],
        format!("Transaction with id: {} not found", transaction_id)
    );
}

#[actix_web::test]
async fn test_transaction_id_alone_selects_branch() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let flow = FlowCase::ActivateVposMethodChallengeDeny;
    let transaction_id = TestDataFactory::transaction_id(flow);

    let first = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_eq!(first.body["gatewayInfo"]["threeDsStep"], "METHOD");

    // The cookie issued by the first check carries the counter forward
    let second = client.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_eq!(second.body["gatewayInfo"]["threeDsStep"], "CHALLENGE");
}

#[actix_web::test]
async fn test_transaction_id_beats_stale_session() {
    let srv = spawn_app();
    let stale = test_session_store().issue(&checkout_mock::flows::FlowSession {
        flow: FlowCase::ActivateVposMethodChallengeAuth,
        attempt: 7,
    });
    let mut client = FlowClient::new(&srv).with_token(stale);

    let transaction_id = TestDataFactory::transaction_id(FlowCase::ActivateVposMethodChallengeDeny);
    let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;

    // Different flow: the stale counter is ignored, so the first step is served
    assert_eq!(reply.body["gatewayInfo"]["threeDsStep"], "METHOD");
}
