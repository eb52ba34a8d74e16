// Legacy payment manager literals. None of these depend on the flow.

use serde_json::{json, Map, Value};

use crate::modules::ecommerce::fixtures::PAYMENT_ID;

use super::models::{
    Amount, BrowserInfo, PaymentIdResponse, Psp, PspListResponse, Session, User, UserResponse,
};

pub const SESSION_TOKEN: &str = "7c5G9d5o6W1v8p6S3a4z3N1c8q3A9p9c2M6p0v8D4t9c3G1s2c0N7w4o2K5o6q9P6i0p9H1d4z7G0a8n0L7a6n2J3c0n1S8h6j7G5w8u4G0s0b3U3x4n0V0d2m0E7m8e";
pub const WALLET_ID: u64 = 58;

const EMAIL: &str = "john.doe@gmail.com";
const FISCAL_CODE: &str = "JHNDOE00A01F205N";
const PAYER_NAME: &str = "John Doe";

fn session_user(accept_terms: Option<bool>) -> User {
    User {
        accept_terms,
        email: EMAIL.to_string(),
        fiscal_code: FISCAL_CODE.to_string(),
        notification_email: EMAIL.to_string(),
        registered: false,
        status: "ANONYMOUS".to_string(),
        user_id: 39624,
    }
}

pub fn payment_id() -> PaymentIdResponse {
    PaymentIdResponse {
        id_payment: PAYMENT_ID.to_string(),
    }
}

pub fn payment_check() -> Value {
    let detail = |beneficiary: &str, domain: &str, amount: u64| {
        json!({
            "CCP": PAYMENT_ID,
            "IUV": "02016723749670000",
            "codicePagatore": FISCAL_CODE,
            "enteBeneficiario": beneficiary,
            "idDominio": domain,
            "importo": amount,
            "nomePagatore": PAYER_NAME,
            "tipoPagatore": "F"
        })
    };

    json!({
        "data": {
            "amount": { "amount": 12000, "currency": "EUR", "decimalDigits": 2 },
            "bolloDigitale": false,
            "detailsList": [
                detail("EC_TE", "77777777777", 100),
                detail("Comune di Milano", "01199250158", 20)
            ],
            "fiscalCode": FISCAL_CODE,
            "iban": "IT57N0760114800000011050036",
            "id": 203436,
            "idPayment": PAYMENT_ID,
            "isCancelled": false,
            "origin": "WALLET_APP",
            "receiver": "EC_TE",
            "subject": "TARI/TEFA 2021",
            "urlRedirectEc": format!("http://pagopamock.pagopa.hq/esito.php?idSession={}", PAYMENT_ID)
        }
    })
}

pub fn start_session() -> Session {
    Session {
        id_payment: PAYMENT_ID.to_string(),
        session_token: SESSION_TOKEN.to_string(),
        user: session_user(Some(true)),
    }
}

pub fn approve_terms() -> UserResponse {
    UserResponse {
        data: session_user(None),
    }
}

pub fn psps() -> PspListResponse {
    let psp = |id: u64, id_psp: &str, name: &str, cost: u64| Psp {
        id,
        id_psp: id_psp.to_string(),
        business_name: name.to_string(),
        payment_type: "CP".to_string(),
        fixed_cost: Amount {
            amount: cost,
            currency: "EUR".to_string(),
            decimal_digits: 2,
        },
        lingua: "IT".to_string(),
    };

    PspListResponse {
        data: vec![
            psp(1, "AGID_01", "Banca di prova", 95),
            psp(2, "BCITITMM", "Intesa Sanpaolo", 150),
        ],
    }
}

/// Echo the submitted wallet with the server-assigned fields filled in
pub fn wallet(sent: &Value, id_wallet: u64) -> Value {
    let mut wallet = match sent {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    wallet.insert("idWallet".to_string(), json!(id_wallet));
    wallet.entry("favourite").or_insert(json!(false));
    wallet.entry("pspEditable").or_insert(json!(true));

    let catalog = psps().data;
    if !wallet.contains_key("idPsp") {
        if let Some(first) = catalog.first() {
            wallet.insert("idPsp".to_string(), json!(first.id));
        }
    }
    if !wallet.contains_key("psp") {
        let chosen = wallet.get("idPsp").and_then(Value::as_u64);
        if let Some(psp) = catalog.into_iter().find(|psp| Some(psp.id) == chosen) {
            wallet.insert("psp".to_string(), json!(psp));
        }
    }

    Value::Object(wallet)
}

pub fn browser_info() -> BrowserInfo {
    BrowserInfo {
        accept: "*/*".to_string(),
        ip: "97.13.428.11".to_string(),
        useragent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:95.0) Gecko/20100101 Firefox/95.0"
            .to_string(),
    }
}
