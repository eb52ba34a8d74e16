pub mod npg_controller;

pub use npg_controller::configure;
