//! Static fixtures of the legacy payment manager and wallet API.

pub mod controllers;
pub mod fixtures;
pub mod models;

pub use controllers::configure;
