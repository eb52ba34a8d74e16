pub mod checkout_service;
pub mod scenarios;

pub use checkout_service::CheckoutService;
pub use scenarios::build_responder;
