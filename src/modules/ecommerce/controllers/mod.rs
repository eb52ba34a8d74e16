pub mod activation_controller;
pub mod auth_controller;
pub mod payment_method_controller;
pub mod transaction_controller;

use actix_web::web;

/// Register every checkout route
pub fn configure(cfg: &mut web::ServiceConfig) {
    activation_controller::configure(cfg);
    transaction_controller::configure(cfg);
    payment_method_controller::configure(cfg);
    auth_controller::configure(cfg);
}
