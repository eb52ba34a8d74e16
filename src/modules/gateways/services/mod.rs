pub mod gateway_trait;
pub mod npg;

pub use gateway_trait::{
    CardDataGateway, CardFormFields, CreateSessionResponse, Field, SessionPaymentMethodResponse,
};
pub use npg::NpgClient;
