pub mod payment_manager_controller;

pub use payment_manager_controller::configure;
