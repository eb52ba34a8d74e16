//! Fallback for requests no mock route handles: forward them to a real
//! backend when one is configured, otherwise answer 404.

pub mod forwarder;

pub use forwarder::{default_service, ProxyForwarder};
