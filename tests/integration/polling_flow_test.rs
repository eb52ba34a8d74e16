// Integration tests for polled endpoints
//
// Status checks and activation polls answer "pending" a fixed number of
// times per flow, counted through the session cookie, then resolve and stay
// resolved.

#[path = "../helpers/mod.rs"]
mod helpers;

use checkout_mock::flows::{FlowCase, FlowSession};
use helpers::*;

const PAYMENT_CONTEXT_CODE: &str = "f9b5e1a2c3d44e7f8a9b0c1d2e3f4a5b";

async fn activate(client: &mut FlowClient<'_>, flow: FlowCase) -> String {
    let reply = client
        .post(ACTIVATE_PATH, &TestDataFactory::activation_payload(flow))
        .await;
    assert_ok(&reply);
    reply.body["transactionId"].as_str().unwrap().to_string()
}

#[actix_web::test]
async fn test_xpay_retry_resolves_on_third_check() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::ActivateXpayTransactionIdSuccess2Retry).await;
    let path = TestDataFactory::status_path(&transaction_id);

    let first = client.get(&path).await;
    let second = client.get(&path).await;
    let third = client.get(&path).await;
    let fourth = client.get(&path).await;

    assert_transaction_status(&first, "AUTHORIZATION_REQUESTED");
    assert_transaction_status(&second, "AUTHORIZATION_REQUESTED");
    assert_transaction_status(&third, "NOTIFIED_OK");
    assert_transaction_status(&fourth, "NOTIFIED_OK");
    assert_eq!(third.body["gatewayInfo"]["gateway"], "XPAY");
}

#[actix_web::test]
async fn test_every_status_check_advances_session() {
    let srv = spawn_app();
    let store = test_session_store();
    let flow = FlowCase::ActivateXpayTransactionIdSuccess2Retry;
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, flow).await;

    for expected_attempt in 1..=4 {
        let reply = client.get(&TestDataFactory::status_path(&transaction_id)).await;
        let cookie = reply.session_cookie.as_ref().expect("status check issues a cookie");
        assert_eq!(
            store.read(Some(cookie.value())),
            FlowSession { flow, attempt: expected_attempt }
        );
    }
}

#[actix_web::test]
async fn test_replaying_old_cookie_replays_old_answer() {
    let srv = spawn_app();
    let flow = FlowCase::ActivateXpayTransactionIdSuccess2Retry;
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, flow).await;
    let fresh = client.cookie().cloned().expect("activation cookie");

    for _ in 0..3 {
        client.get(&TestDataFactory::status_path(&transaction_id)).await;
    }

    let mut replay = FlowClient::new(&srv).with_cookie(fresh);
    let reply = replay.get(&TestDataFactory::status_path(&transaction_id)).await;
    assert_transaction_status(&reply, "AUTHORIZATION_REQUESTED");
}

#[actix_web::test]
async fn test_activation_poll_third_attempt() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    activate(&mut client, FlowCase::PollActivationStatusThirdAttempt).await;
    let path = TestDataFactory::activation_poll_path(PAYMENT_CONTEXT_CODE);

    let first = client.get(&path).await;
    let second = client.get(&path).await;
    let third = client.get(&path).await;

    assert_status(&first, 404);
    assert_status(&second, 404);
    assert_ok(&third);
    assert_eq!(third.body["idPagamento"], "e1283f0e673b4789a2af87fd9b4043f4");
}

#[actix_web::test]
async fn test_activation_poll_first_attempt() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    activate(&mut client, FlowCase::PollActivationStatusFirstAttempt).await;

    let reply = client
        .get(&TestDataFactory::activation_poll_path(PAYMENT_CONTEXT_CODE))
        .await;

    assert_ok(&reply);
    assert_session_issued(&reply);
}

#[actix_web::test]
async fn test_polling_without_session_is_default_and_starts_one() {
    let srv = spawn_app();
    let store = test_session_store();
    let mut client = FlowClient::new(&srv);

    let reply = client
        .get(&TestDataFactory::activation_poll_path(PAYMENT_CONTEXT_CODE))
        .await;

    assert_ok(&reply);
    let cookie = reply.session_cookie.as_ref().unwrap();
    assert_eq!(
        store.read(Some(cookie.value())),
        FlowSession { flow: FlowCase::Ok, attempt: 1 }
    );
}

#[actix_web::test]
async fn test_non_polling_endpoints_leave_session_alone() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let transaction_id = activate(&mut client, FlowCase::OkTransactionUserCancel).await;

    let methods = client.get("/ecommerce/checkout/v1/payment-methods").await;
    let auth = client
        .post(
            &TestDataFactory::auth_request_path(&transaction_id),
            &TestDataFactory::auth_request_payload(),
        )
        .await;
    let cancel = client.delete(&TestDataFactory::cancel_path(&transaction_id)).await;

    assert_no_session_issued(&methods);
    assert_no_session_issued(&auth);
    assert_no_session_issued(&cancel);
}

#[actix_web::test]
async fn test_every_flow_resolves_within_its_depth() {
    let srv = spawn_app();

    for flow in FlowCase::ALL {
        let transaction_id = TestDataFactory::transaction_id(flow);
        let path = TestDataFactory::status_path(&transaction_id);
        let mut client = FlowClient::new(&srv);

        let answers: Vec<_> = {
            let mut answers = Vec::new();
            for _ in 0..=flow.resolves_after() + 2 {
                let reply = client.get(&path).await;
                answers.push((reply.status, reply.body));
            }
            answers
        };

        // Once resolved, the answer never changes
        let resolved = &answers[flow.resolves_after() as usize];
        for answer in &answers[flow.resolves_after() as usize..] {
            assert_eq!(answer, resolved, "{} changed after resolving", flow);
        }
    }
}

#[actix_web::test]
async fn test_tampered_cookie_falls_back_to_default() {
    let srv = spawn_app();
    let token = test_session_store().start(FlowCase::FailCalculateFee);
    let (payload, _) = token.split_once('.').unwrap();
    let forged = format!("{}.{}", payload, "0".repeat(64));
    let mut client = FlowClient::new(&srv).with_token(forged);

    let fees = client
        .post(
            "/ecommerce/checkout/v2/payment-methods/cards/fees",
            &serde_json::json!({}),
        )
        .await;

    assert_ok(&fees);
}
