//! Simulated checkout API: activation, status polling, 3DS2 authorization,
//! cancellation, payment methods, fees and the auth service.

pub mod controllers;
pub mod fixtures;
pub mod models;
pub mod services;

pub use services::{build_responder, CheckoutService};
