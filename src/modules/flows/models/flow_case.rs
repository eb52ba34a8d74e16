use serde::{Deserialize, Serialize};
use std::fmt;

/// Groups of flow cases that script the same part of the checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowFamily {
    Default,
    ActivationError,
    CardAuthorization,
    FeeCalculation,
    UserCancel,
    AuthRequestError,
    AuthToken,
    Polling,
}

/// Closed catalog of test scenarios.
///
/// Each case has a stable two digit code; the code is what travels inside
/// payment references and transaction ids. Codes must never be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowCase {
    /// Every endpoint answers with its success shape
    #[default]
    Ok,

    /// Activation answers 502 PPT_SINTASSI_XSD
    FailActivate502PptSintassiXsd,
    /// Activation answers 504 PPT_STAZIONE_INT_PA_TIMEOUT
    FailActivate504PptStazioneIntPaTimeout,
    /// Activation answers 409 PPT_PAGAMENTO_IN_CORSO
    FailActivate409PptPagamentoInCorso,
    /// Activation answers 404 PPT_DOMINIO_SCONOSCIUTO
    FailActivate404PptDominioSconosciuto,

    /// Status check on the issued transaction answers 404
    ActivateXpayTransactionIdNotFound,
    /// Status check resolves to NOTIFIED_OK through XPAY
    ActivateXpayTransactionIdSuccess,
    /// Status check is pending twice, then NOTIFIED_OK
    ActivateXpayTransactionIdSuccess2Retry,

    /// 3DS2 frictionless authorization
    ActivateVposDirectAuth,
    /// 3DS2 method step, then authorization
    ActivateVposMethodAuth,
    /// 3DS2 challenge step, then authorization
    ActivateVposChallengeAuth,
    /// 3DS2 method step, challenge step, then authorization
    ActivateVposMethodChallengeAuth,
    /// 3DS2 frictionless denial
    ActivateVposDirectDeny,
    /// 3DS2 method step, then denial
    ActivateVposMethodDeny,
    /// 3DS2 challenge step, then denial
    ActivateVposChallengeDeny,
    /// 3DS2 method step, challenge step, then denial
    ActivateVposMethodChallengeDeny,
    /// 3DS2 lookups answer 404 payment not found
    ActivateVposPaymentNotFound,

    /// Fee calculation returns bundles above the threshold
    OkAbovethresholdCalculateFee,
    /// Fee calculation returns bundles below the threshold
    OkBelowthresholdCalculateFee,
    /// Fee calculation answers 404 no bundles
    FailCalculateFee,

    /// User cancellation answers 404
    IdNotFoundTransactionUserCancel,
    /// User cancellation answers 202
    OkTransactionUserCancel,
    /// User cancellation answers 500
    InternalServerErrorTransactionUserCancel,

    /// Authorization request answers 409 already processed
    FailAuthRequestTransactionIdAlreadyProcessed,
    /// Authorization request answers 404 transaction not found
    FailAuthRequestTransactionIdNotFound,

    /// Auth token exchange answers 500
    FailPostAuthToken,

    /// Activation poll is pending twice, then resolves
    PollActivationStatusThirdAttempt,
    /// Activation poll resolves on the first call
    PollActivationStatusFirstAttempt,
}

/// Secondary tag selecting one concrete authorization branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubVariant {
    XpayOk,
    XpayMultiAttemptPolling,
    VposDirectAuth,
    VposMethodAuth,
    VposChallengeAuth,
    VposMethodChallengeAuth,
    VposDirectDeny,
    VposMethodDeny,
    VposChallengeDeny,
    VposMethodChallengeDeny,
    VposPaymentNotFound,
}

impl FlowCase {
    pub const ALL: [FlowCase; 28] = [
        FlowCase::Ok,
        FlowCase::FailActivate502PptSintassiXsd,
        FlowCase::FailActivate504PptStazioneIntPaTimeout,
        FlowCase::FailActivate409PptPagamentoInCorso,
        FlowCase::FailActivate404PptDominioSconosciuto,
        FlowCase::ActivateXpayTransactionIdNotFound,
        FlowCase::ActivateXpayTransactionIdSuccess,
        FlowCase::ActivateXpayTransactionIdSuccess2Retry,
        FlowCase::ActivateVposDirectAuth,
        FlowCase::ActivateVposMethodAuth,
        FlowCase::ActivateVposChallengeAuth,
        FlowCase::ActivateVposMethodChallengeAuth,
        FlowCase::ActivateVposDirectDeny,
        FlowCase::ActivateVposMethodDeny,
        FlowCase::ActivateVposChallengeDeny,
        FlowCase::ActivateVposMethodChallengeDeny,
        FlowCase::ActivateVposPaymentNotFound,
        FlowCase::OkAbovethresholdCalculateFee,
        FlowCase::OkBelowthresholdCalculateFee,
        FlowCase::FailCalculateFee,
        FlowCase::IdNotFoundTransactionUserCancel,
        FlowCase::OkTransactionUserCancel,
        FlowCase::InternalServerErrorTransactionUserCancel,
        FlowCase::FailAuthRequestTransactionIdAlreadyProcessed,
        FlowCase::FailAuthRequestTransactionIdNotFound,
        FlowCase::FailPostAuthToken,
        FlowCase::PollActivationStatusThirdAttempt,
        FlowCase::PollActivationStatusFirstAttempt,
    ];

    /// Stable numeric code carried by identifiers
    pub fn code(self) -> u8 {
        match self {
            FlowCase::Ok => 0,
            FlowCase::FailActivate502PptSintassiXsd => 1,
            FlowCase::FailActivate504PptStazioneIntPaTimeout => 2,
            FlowCase::FailActivate409PptPagamentoInCorso => 3,
            FlowCase::FailActivate404PptDominioSconosciuto => 4,
            FlowCase::ActivateXpayTransactionIdNotFound => 10,
            FlowCase::ActivateXpayTransactionIdSuccess => 11,
            FlowCase::ActivateXpayTransactionIdSuccess2Retry => 12,
            FlowCase::ActivateVposDirectAuth => 20,
            FlowCase::ActivateVposMethodAuth => 21,
            FlowCase::ActivateVposChallengeAuth => 22,
            FlowCase::ActivateVposMethodChallengeAuth => 23,
            FlowCase::ActivateVposDirectDeny => 24,
            FlowCase::ActivateVposMethodDeny => 25,
            FlowCase::ActivateVposChallengeDeny => 26,
            FlowCase::ActivateVposMethodChallengeDeny => 27,
            FlowCase::ActivateVposPaymentNotFound => 28,
            FlowCase::OkAbovethresholdCalculateFee => 30,
            FlowCase::OkBelowthresholdCalculateFee => 31,
            FlowCase::FailCalculateFee => 32,
            FlowCase::IdNotFoundTransactionUserCancel => 40,
            FlowCase::OkTransactionUserCancel => 41,
            FlowCase::InternalServerErrorTransactionUserCancel => 42,
            FlowCase::FailAuthRequestTransactionIdAlreadyProcessed => 50,
            FlowCase::FailAuthRequestTransactionIdNotFound => 51,
            FlowCase::FailPostAuthToken => 60,
            FlowCase::PollActivationStatusThirdAttempt => 70,
            FlowCase::PollActivationStatusFirstAttempt => 71,
        }
    }

    /// Reverse lookup; codes outside the catalog yield `None`
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|flow| flow.code() == code)
    }

    pub fn family(self) -> FlowFamily {
        match self {
            FlowCase::Ok => FlowFamily::Default,
            FlowCase::FailActivate502PptSintassiXsd
            | FlowCase::FailActivate504PptStazioneIntPaTimeout
            | FlowCase::FailActivate409PptPagamentoInCorso
            | FlowCase::FailActivate404PptDominioSconosciuto => FlowFamily::ActivationError,
            FlowCase::ActivateXpayTransactionIdNotFound
            | FlowCase::ActivateXpayTransactionIdSuccess
            | FlowCase::ActivateXpayTransactionIdSuccess2Retry
            | FlowCase::ActivateVposDirectAuth
            | FlowCase::ActivateVposMethodAuth
            | FlowCase::ActivateVposChallengeAuth
            | FlowCase::ActivateVposMethodChallengeAuth
            | FlowCase::ActivateVposDirectDeny
            | FlowCase::ActivateVposMethodDeny
            | FlowCase::ActivateVposChallengeDeny
            | FlowCase::ActivateVposMethodChallengeDeny
            | FlowCase::ActivateVposPaymentNotFound => FlowFamily::CardAuthorization,
            FlowCase::OkAbovethresholdCalculateFee
            | FlowCase::OkBelowthresholdCalculateFee
            | FlowCase::FailCalculateFee => FlowFamily::FeeCalculation,
            FlowCase::IdNotFoundTransactionUserCancel
            | FlowCase::OkTransactionUserCancel
            | FlowCase::InternalServerErrorTransactionUserCancel => FlowFamily::UserCancel,
            FlowCase::FailAuthRequestTransactionIdAlreadyProcessed
            | FlowCase::FailAuthRequestTransactionIdNotFound => FlowFamily::AuthRequestError,
            FlowCase::FailPostAuthToken => FlowFamily::AuthToken,
            FlowCase::PollActivationStatusThirdAttempt
            | FlowCase::PollActivationStatusFirstAttempt => FlowFamily::Polling,
        }
    }

    /// Authorization branch selected at activation time
    pub fn sub_variant(self) -> Option<SubVariant> {
        match self {
            FlowCase::ActivateXpayTransactionIdSuccess => Some(SubVariant::XpayOk),
            FlowCase::ActivateXpayTransactionIdSuccess2Retry => {
                Some(SubVariant::XpayMultiAttemptPolling)
            }
            FlowCase::ActivateVposDirectAuth => Some(SubVariant::VposDirectAuth),
            FlowCase::ActivateVposMethodAuth => Some(SubVariant::VposMethodAuth),
            FlowCase::ActivateVposChallengeAuth => Some(SubVariant::VposChallengeAuth),
            FlowCase::ActivateVposMethodChallengeAuth => Some(SubVariant::VposMethodChallengeAuth),
            FlowCase::ActivateVposDirectDeny => Some(SubVariant::VposDirectDeny),
            FlowCase::ActivateVposMethodDeny => Some(SubVariant::VposMethodDeny),
            FlowCase::ActivateVposChallengeDeny => Some(SubVariant::VposChallengeDeny),
            FlowCase::ActivateVposMethodChallengeDeny => Some(SubVariant::VposMethodChallengeDeny),
            FlowCase::ActivateVposPaymentNotFound => Some(SubVariant::VposPaymentNotFound),
            _ => None,
        }
    }

    /// Number of polling calls answered as pending before the scripted
    /// outcome (or next step) is served. Zero means the first call resolves.
    pub fn resolves_after(self) -> u32 {
        match self {
            FlowCase::ActivateXpayTransactionIdSuccess2Retry => 2,
            FlowCase::PollActivationStatusThirdAttempt => 2,
            FlowCase::ActivateVposMethodChallengeAuth
            | FlowCase::ActivateVposMethodChallengeDeny => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for FlowCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:02})", self, self.code())
    }
}

impl SubVariant {
    pub const ALL: [SubVariant; 11] = [
        SubVariant::XpayOk,
        SubVariant::XpayMultiAttemptPolling,
        SubVariant::VposDirectAuth,
        SubVariant::VposMethodAuth,
        SubVariant::VposChallengeAuth,
        SubVariant::VposMethodChallengeAuth,
        SubVariant::VposDirectDeny,
        SubVariant::VposMethodDeny,
        SubVariant::VposChallengeDeny,
        SubVariant::VposMethodChallengeDeny,
        SubVariant::VposPaymentNotFound,
    ];

    /// Stable numeric code; zero is reserved for "no variant"
    pub fn code(self) -> u8 {
        match self {
            SubVariant::XpayOk => 1,
            SubVariant::XpayMultiAttemptPolling => 2,
            SubVariant::VposDirectAuth => 11,
            SubVariant::VposMethodAuth => 12,
            SubVariant::VposChallengeAuth => 13,
            SubVariant::VposMethodChallengeAuth => 14,
            SubVariant::VposDirectDeny => 15,
            SubVariant::VposMethodDeny => 16,
            SubVariant::VposChallengeDeny => 17,
            SubVariant::VposMethodChallengeDeny => 18,
            SubVariant::VposPaymentNotFound => 19,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.code() == code)
    }

    /// Gateway name reported in transaction gateway info
    pub fn gateway(self) -> &'static str {
        match self {
            SubVariant::XpayOk | SubVariant::XpayMultiAttemptPolling => "XPAY",
            _ => "VPOS",
        }
    }
}
