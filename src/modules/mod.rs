pub mod ecommerce;
pub mod flows;
pub mod gateways;
pub mod health;
pub mod proxy;
pub mod wallet;
