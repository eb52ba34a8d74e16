// Integration tests for payment activation
//
// Activation reads the flow from the notice code, answers with the scripted
// outcome and starts the flow session only when activation succeeds.

#[path = "../helpers/mod.rs"]
mod helpers;

use checkout_mock::flows::services::IdentifierCodec;
use checkout_mock::flows::FlowCase;
use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn test_default_activation_issues_transaction_and_session() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);

    let reply = client
        .post(ACTIVATE_PATH, &TestDataFactory::activation_payload(FlowCase::Ok))
        .await;

    assert_ok(&reply);
    assert_session_issued(&reply);
    assert_eq!(reply.body["status"], "ACTIVATED");
    assert_eq!(reply.body["clientId"], "CHECKOUT");
    assert_eq!(reply.body["payments"][0]["amount"], 12000);
    assert_eq!(
        reply.body["payments"][0]["rptId"],
        TestDataFactory::rpt_id(FlowCase::Ok)
    );

    let transaction_id = reply.body["transactionId"].as_str().unwrap();
    assert_eq!(transaction_id.len(), 32);
    assert_eq!(
        IdentifierCodec::transaction_id().decode(transaction_id).flow,
        FlowCase::Ok
    );
}

#[actix_web::test]
async fn test_activation_faults_are_scripted() {
    let srv = spawn_app();
    let cases = [
        (FlowCase::FailActivate502PptSintassiXsd, 502, "PPT_SINTASSI_XSD"),
        (FlowCase::FailActivate504PptStazioneIntPaTimeout, 504, "PPT_STAZIONE_INT_PA_TIMEOUT"),
        (FlowCase::FailActivate409PptPagamentoInCorso, 409, "PPT_PAGAMENTO_IN_CORSO"),
        (FlowCase::FailActivate404PptDominioSconosciuto, 404, "PPT_DOMINIO_SCONOSCIUTO"),
    ];

    for (flow, status, fault) in cases {
        let mut client = FlowClient::new(&srv);
        let reply = client
            .post(ACTIVATE_PATH, &TestDataFactory::activation_payload(flow))
            .await;

        assert_status(&reply, status);
        assert_no_session_issued(&reply);
        assert_eq!(reply.body["faultCodeDetail"], fault);
        assert_eq!(reply.body["status"], status);
    }
}

#[actix_web::test]
async fn test_activation_encodes_flow_and_branch_into_transaction_id() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let flow = FlowCase::ActivateVposChallengeDeny;

    let reply = client
        .post(ACTIVATE_PATH, &TestDataFactory::activation_payload(flow))
        .await;

    assert_ok(&reply);
    let marker = IdentifierCodec::transaction_id().decode(reply.body["transactionId"].as_str().unwrap());
    assert_eq!(marker.flow, flow);
    assert_eq!(marker.variant, flow.sub_variant());
}

#[actix_web::test]
async fn test_foreign_notice_code_is_default_flow() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);
    let payload = json!({
        "paymentNotices": [{ "rptId": "302000100000009424", "amount": 100 }]
    });

    let reply = client.post(ACTIVATE_PATH, &payload).await;

    assert_ok(&reply);
    assert_eq!(
        IdentifierCodec::transaction_id()
            .decode(reply.body["transactionId"].as_str().unwrap())
            .flow,
        FlowCase::Ok
    );
}

#[actix_web::test]
async fn test_activation_without_notices_uses_default_payment() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);

    let reply = client.post(ACTIVATE_PATH, &json!({})).await;

    assert_ok(&reply);
    assert_eq!(reply.body["payments"][0]["rptId"], "77777777777302012387654312384");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request_problem() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);

    let reply = client
        .post_raw(ACTIVATE_PATH, "application/json", "{\"paymentNotices\": [")
        .await;

    assert_problem(&reply, 400, "Bad Request");
    assert_eq!(reply.body["status"], 400);
}

#[actix_web::test]
async fn test_activation_session_drives_later_calls() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);

    let activated = client
        .post(
            ACTIVATE_PATH,
            &TestDataFactory::activation_payload(FlowCase::FailCalculateFee),
        )
        .await;
    assert_ok(&activated);

    let fees = client
        .post("/ecommerce/checkout/v2/payment-methods/cards/fees", &json!({}))
        .await;
    assert_status(&fees, 404);
}

#[actix_web::test]
async fn test_reactivation_replaces_session() {
    let srv = spawn_app();
    let mut client = FlowClient::new(&srv);

    client
        .post(
            ACTIVATE_PATH,
            &TestDataFactory::activation_payload(FlowCase::FailCalculateFee),
        )
        .await;
    let reactivated = client
        .post(ACTIVATE_PATH, &TestDataFactory::activation_payload(FlowCase::Ok))
        .await;
    assert_session_issued(&reactivated);

    let fees = client
        .post("/ecommerce/checkout/v2/payment-methods/cards/fees", &json!({}))
        .await;
    assert_ok(&fees);
}
