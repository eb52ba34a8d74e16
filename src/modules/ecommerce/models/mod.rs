pub mod checkout;
pub mod transaction;

pub use checkout::{
    ActivationStatusResponse, AmountRange, AuthRequest, AuthResponse, AuthorizationResponse,
    Bundle, CalculateFeeResponse, LoginResponse, PaymentMethod, PaymentMethodsResponse,
};
pub use transaction::{
    ClientId, GatewayInfo, NewTransactionRequest, NewTransactionResponse, PaymentInfo,
    PaymentNoticeInfo, ThreeDsStep, TransactionInfo, TransactionStatus, Transfer,
};
