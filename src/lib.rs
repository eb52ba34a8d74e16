//! Checkout Mock
//!
//! Deterministic test double of a multi-step checkout payment API. The
//! scenario a request follows is encoded in the identifiers the client sends
//! (notice codes, transaction ids) and in a signed session cookie, so test
//! suites can drive any success or failure path without server-side state.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::ecommerce;
pub use modules::flows;
pub use modules::gateways;
