//! Adapter for the remote NPG card-data service. Unlike the scripted
//! endpoints these routes make a live upstream call.

pub mod controllers;
pub mod services;

pub use controllers::configure;
pub use services::{CardDataGateway, NpgClient};
