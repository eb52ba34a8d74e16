use actix_web::http::StatusCode;
use serde_json::json;

use crate::modules::ecommerce::fixtures;
use crate::modules::ecommerce::models::{
    AuthRequest, GatewayInfo, NewTransactionRequest, ThreeDsStep, TransactionStatus,
};
use crate::modules::flows::models::{FlowCase, SubVariant};
use crate::modules::flows::services::three_ds::encode_method_data;
use crate::modules::flows::services::{
    poll_until, DispatchTableBuilder, Endpoint, ResponderSettings, ScenarioRequest,
    ScenarioResponder, ScenarioResponse,
};

type Request<'a, 'b> = &'a ScenarioRequest<'b>;

/// Build the full checkout dispatch table
pub fn build_responder(settings: ResponderSettings) -> ScenarioResponder {
    let table = DispatchTableBuilder::new();
    let table = activation_scenarios(table);
    let table = transaction_status_scenarios(table);
    let table = authorization_scenarios(table);
    let table = cancellation_scenarios(table);
    let table = fee_scenarios(table);
    let table = activation_poll_scenarios(table);
    let table = auth_token_scenarios(table);

    table.build(settings)
}

// Activation

fn activation_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    table
        .default_for(Endpoint::Activation, |req, _| activated(req))
        .register(
            Endpoint::Activation,
            FlowCase::FailActivate502PptSintassiXsd,
            None,
            |_, _| {
                activation_fault(
                    StatusCode::BAD_GATEWAY,
                    "Errore di sintassi XSD",
                    "GENERIC_ERROR",
                    "PPT_SINTASSI_XSD",
                )
            },
        )
        .register(
            Endpoint::Activation,
            FlowCase::FailActivate504PptStazioneIntPaTimeout,
            None,
            |_, _| {
                activation_fault(
                    StatusCode::GATEWAY_TIMEOUT,
                    "Timeout della stazione intermediario",
                    "GATEWAY_TIMEOUT",
                    "PPT_STAZIONE_INT_PA_TIMEOUT",
                )
            },
        )
        .register(
            Endpoint::Activation,
            FlowCase::FailActivate409PptPagamentoInCorso,
            None,
            |_, _| {
                activation_fault(
                    StatusCode::CONFLICT,
                    "Pagamento in corso",
                    "PAYMENT_ONGOING",
                    "PPT_PAGAMENTO_IN_CORSO",
                )
            },
        )
        .register(
            Endpoint::Activation,
            FlowCase::FailActivate404PptDominioSconosciuto,
            None,
            |_, _| {
                activation_fault(
                    StatusCode::NOT_FOUND,
                    "EC sconosciuto",
                    "PAYMENT_UNKNOWN",
                    "PPT_DOMINIO_SCONOSCIUTO",
                )
            },
        )
}

fn activated(req: Request) -> ScenarioResponse {
    let notices: Option<NewTransactionRequest> = req
        .payload
        .and_then(|payload| serde_json::from_value(payload.clone()).ok());

    ScenarioResponse::ok(&fixtures::new_transaction(req.transaction_id, notices.as_ref()))
}

fn activation_fault(status: StatusCode, title: &str, category: &str, detail: &str) -> ScenarioResponse {
    ScenarioResponse::problem(
        status,
        fixtures::activation_fault(status, title, category, detail),
    )
}

// Transaction status (3DS2 script)

fn transaction_status_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    use SubVariant::*;

    let xpay = FlowCase::ActivateXpayTransactionIdSuccess;
    let xpay_retry = FlowCase::ActivateXpayTransactionIdSuccess2Retry;

    let table = table
        .default_for(Endpoint::TransactionStatus, |req, _| {
            transaction(req, TransactionStatus::NotifiedOk, None)
        })
        .register(
            Endpoint::TransactionStatus,
            FlowCase::ActivateXpayTransactionIdNotFound,
            None,
            |req, _| transaction_not_found(req),
        )
        .register(Endpoint::TransactionStatus, xpay, Some(XpayOk), |req, _| {
            authorized(req, XpayOk)
        })
        .register(
            Endpoint::TransactionStatus,
            xpay_retry,
            Some(XpayMultiAttemptPolling),
            poll_until(
                xpay_retry.resolves_after(),
                |req, _| authorization_pending(req, XpayMultiAttemptPolling),
                |req, _| authorized(req, XpayMultiAttemptPolling),
            ),
        );

    vpos_status_scenarios(table)
}

fn vpos_status_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    use FlowCase::*;
    use SubVariant::*;

    let method_challenge_auth = ActivateVposMethodChallengeAuth;
    let method_challenge_deny = ActivateVposMethodChallengeDeny;

    table
        .register(
            Endpoint::TransactionStatus,
            ActivateVposDirectAuth,
            Some(VposDirectAuth),
            |req, _| authorized(req, VposDirectAuth),
        )
        .register(
            Endpoint::TransactionStatus,
            ActivateVposDirectDeny,
            Some(VposDirectDeny),
            |req, _| denied(req, VposDirectDeny),
        )
        .register(
            Endpoint::TransactionStatus,
            ActivateVposMethodAuth,
            Some(VposMethodAuth),
            |req, settings| method_step(req, settings),
        )
        .register(
            Endpoint::TransactionStatus,
            ActivateVposMethodDeny,
            Some(VposMethodDeny),
            |req, settings| method_step(req, settings),
        )
        .register(
            Endpoint::TransactionStatus,
            ActivateVposChallengeAuth,
            Some(VposChallengeAuth),
            |req, _| challenge_step(req),
        )
        .register(
            Endpoint::TransactionStatus,
            ActivateVposChallengeDeny,
            Some(VposChallengeDeny),
            |req, _| challenge_step(req),
        )
        .register(
            Endpoint::TransactionStatus,
            method_challenge_auth,
            Some(VposMethodChallengeAuth),
            poll_until(
                method_challenge_auth.resolves_after(),
                method_step,
                |req, _| challenge_step(req),
            ),
        )
        .register(
            Endpoint::TransactionStatus,
            method_challenge_deny,
            Some(VposMethodChallengeDeny),
            poll_until(
                method_challenge_deny.resolves_after(),
                method_step,
                |req, _| challenge_step(req),
            ),
        )
        .register(
            Endpoint::TransactionStatus,
            ActivateVposPaymentNotFound,
            None,
            |req, _| payment_not_found(req),
        )
}

fn transaction(req: Request, status: TransactionStatus, gateway: Option<GatewayInfo>) -> ScenarioResponse {
    ScenarioResponse::ok(&fixtures::transaction_info(req.transaction_id, status, gateway))
}

fn authorized(req: Request, variant: SubVariant) -> ScenarioResponse {
    let mut gateway = GatewayInfo::new(variant.gateway());
    gateway.authorization_status = Some("AUTHORIZED".to_string());
    if variant.gateway() == "VPOS" {
        gateway.authorization_code = Some(fixtures::VPOS_AUTHORIZATION_CODE.to_string());
    }

    transaction(req, TransactionStatus::NotifiedOk, Some(gateway))
}

fn denied(req: Request, variant: SubVariant) -> ScenarioResponse {
    let mut gateway = GatewayInfo::new(variant.gateway());
    gateway.authorization_status = Some("DENIED".to_string());
    gateway.error_code = Some("99".to_string());

    transaction(req, TransactionStatus::NotifiedKo, Some(gateway))
}

fn authorization_pending(req: Request, variant: SubVariant) -> ScenarioResponse {
    transaction(
        req,
        TransactionStatus::AuthorizationRequested,
        Some(GatewayInfo::new(variant.gateway())),
    )
}

fn method_step(req: Request, settings: &ResponderSettings) -> ScenarioResponse {
    let method_data = match encode_method_data(&settings.notification_base_url, req.transaction_id) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build 3DS method data");
            return ScenarioResponse::problem(
                StatusCode::INTERNAL_SERVER_ERROR,
                fixtures::internal_server_error(),
            );
        }
    };

    let mut gateway = GatewayInfo::new("VPOS");
    gateway.three_ds_step = Some(ThreeDsStep::Method);
    gateway.three_ds_method_url = Some(fixtures::VPOS_METHOD_URL.to_string());
    gateway.three_ds_method_data = Some(method_data);

    transaction(req, TransactionStatus::AuthorizationRequested, Some(gateway))
}

fn challenge_step(req: Request) -> ScenarioResponse {
    let mut gateway = GatewayInfo::new("VPOS");
    gateway.three_ds_step = Some(ThreeDsStep::Challenge);
    gateway.acs_url = Some(fixtures::VPOS_ACS_URL.to_string());
    gateway.creq = Some(fixtures::VPOS_CREQ.to_string());

    transaction(req, TransactionStatus::AuthorizationRequested, Some(gateway))
}

fn transaction_not_found(req: Request) -> ScenarioResponse {
    ScenarioResponse::problem(
        StatusCode::NOT_FOUND,
        fixtures::transaction_not_found(req.transaction_id),
    )
}

fn payment_not_found(req: Request) -> ScenarioResponse {
    ScenarioResponse::problem(
        StatusCode::NOT_FOUND,
        fixtures::payment_not_found(req.transaction_id),
    )
}

// Authorization request and 3DS resume

fn authorization_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    use FlowCase::*;
    use SubVariant::*;

    let table = table
        .default_for(Endpoint::AuthRequest, authorization_requested)
        .register(
            Endpoint::AuthRequest,
            FailAuthRequestTransactionIdAlreadyProcessed,
            None,
            |req, _| {
                ScenarioResponse::problem(
                    StatusCode::CONFLICT,
                    fixtures::transaction_already_processed(req.transaction_id),
                )
            },
        )
        .register(
            Endpoint::AuthRequest,
            FailAuthRequestTransactionIdNotFound,
            None,
            |req, _| transaction_not_found(req),
        );

    let table = table
        .default_for(Endpoint::ResumeAuthorization, |req, _| {
            transaction(req, TransactionStatus::NotifiedOk, None)
        })
        .register(
            Endpoint::ResumeAuthorization,
            ActivateXpayTransactionIdNotFound,
            None,
            |req, _| transaction_not_found(req),
        )
        .register(
            Endpoint::ResumeAuthorization,
            ActivateVposPaymentNotFound,
            None,
            |req, _| payment_not_found(req),
        );

    let resumed = [
        (ActivateXpayTransactionIdSuccess, XpayOk),
        (ActivateXpayTransactionIdSuccess2Retry, XpayMultiAttemptPolling),
        (ActivateVposDirectAuth, VposDirectAuth),
        (ActivateVposMethodAuth, VposMethodAuth),
        (ActivateVposChallengeAuth, VposChallengeAuth),
        (ActivateVposMethodChallengeAuth, VposMethodChallengeAuth),
        (ActivateVposDirectDeny, VposDirectDeny),
        (ActivateVposMethodDeny, VposMethodDeny),
        (ActivateVposChallengeDeny, VposChallengeDeny),
        (ActivateVposMethodChallengeDeny, VposMethodChallengeDeny),
    ];

    resumed.into_iter().fold(table, |table, (flow, variant)| {
        table.register(
            Endpoint::ResumeAuthorization,
            flow,
            Some(variant),
            move |req, _| {
                if is_deny(variant) {
                    denied(req, variant)
                } else {
                    authorized(req, variant)
                }
            },
        )
    })
}

fn is_deny(variant: SubVariant) -> bool {
    matches!(
        variant,
        SubVariant::VposDirectDeny
            | SubVariant::VposMethodDeny
            | SubVariant::VposChallengeDeny
            | SubVariant::VposMethodChallengeDeny
    )
}

fn authorization_requested(req: Request, settings: &ResponderSettings) -> ScenarioResponse {
    let base = settings.notification_base_url.trim_end_matches('/');
    let page = match req.variant.map(SubVariant::gateway) {
        Some("VPOS") => "gdi-check",
        _ => "esito",
    };
    let url = format!("{}/ecommerce-fe/{}#transactionId={}", base, page, req.transaction_id);

    ScenarioResponse::ok(&fixtures::authorization(url))
}

// User cancel

fn cancellation_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    table
        .default_for(Endpoint::CancelTransaction, |_, _| cancelled())
        .register(
            Endpoint::CancelTransaction,
            FlowCase::OkTransactionUserCancel,
            None,
            |_, _| cancelled(),
        )
        .register(
            Endpoint::CancelTransaction,
            FlowCase::IdNotFoundTransactionUserCancel,
            None,
            |req, _| transaction_not_found(req),
        )
        .register(
            Endpoint::CancelTransaction,
            FlowCase::InternalServerErrorTransactionUserCancel,
            None,
            |_, _| {
                ScenarioResponse::problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    fixtures::internal_server_error(),
                )
            },
        )
}

fn cancelled() -> ScenarioResponse {
    ScenarioResponse::new(StatusCode::ACCEPTED, json!({}))
}

// Payment methods and fees

fn fee_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    table
        .default_for(Endpoint::PaymentMethods, |_, _| {
            ScenarioResponse::ok(&fixtures::payment_methods())
        })
        .default_for(Endpoint::CalculateFee, |_, _| {
            ScenarioResponse::ok(&fixtures::calculate_fee(false))
        })
        .register(
            Endpoint::CalculateFee,
            FlowCase::OkAbovethresholdCalculateFee,
            None,
            |_, _| ScenarioResponse::ok(&fixtures::calculate_fee(false)),
        )
        .register(
            Endpoint::CalculateFee,
            FlowCase::OkBelowthresholdCalculateFee,
            None,
            |_, _| ScenarioResponse::ok(&fixtures::calculate_fee(true)),
        )
        .register(
            Endpoint::CalculateFee,
            FlowCase::FailCalculateFee,
            None,
            |_, _| ScenarioResponse::problem(StatusCode::NOT_FOUND, fixtures::bundles_not_found()),
        )
}

// Activation poll

fn activation_poll_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    let third = FlowCase::PollActivationStatusThirdAttempt;
    let first = FlowCase::PollActivationStatusFirstAttempt;

    table
        .default_for(Endpoint::ActivationStatus, |_, _| activation_resolved())
        .register(
            Endpoint::ActivationStatus,
            third,
            None,
            poll_until(third.resolves_after(), |_, _| activation_pending(), |_, _| {
                activation_resolved()
            }),
        )
        .register(
            Endpoint::ActivationStatus,
            first,
            None,
            poll_until(first.resolves_after(), |_, _| activation_pending(), |_, _| {
                activation_resolved()
            }),
        )
}

fn activation_pending() -> ScenarioResponse {
    ScenarioResponse::problem(StatusCode::NOT_FOUND, fixtures::activation_pending())
}

fn activation_resolved() -> ScenarioResponse {
    ScenarioResponse::ok(&fixtures::activation_status())
}

// Auth service token exchange

fn auth_token_scenarios(table: DispatchTableBuilder) -> DispatchTableBuilder {
    table
        .default_for(Endpoint::AuthToken, |req, _| {
            let exchange: AuthRequest = req
                .payload
                .and_then(|payload| serde_json::from_value(payload.clone()).ok())
                .unwrap_or_default();
            let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());

            if present(&exchange.auth_code) && present(&exchange.state) {
                ScenarioResponse::ok(&fixtures::auth_token())
            } else {
                ScenarioResponse::problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    fixtures::missing_auth_code(),
                )
            }
        })
        .register(Endpoint::AuthToken, FlowCase::FailPostAuthToken, None, |_, _| {
            ScenarioResponse::problem(
                StatusCode::INTERNAL_SERVER_ERROR,
                fixtures::missing_auth_code(),
            )
        })
}
