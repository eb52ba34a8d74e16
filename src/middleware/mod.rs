pub mod cors;
pub mod delay;
pub mod error_handler;
pub mod request_id;

pub use cors::cors;
pub use delay::EndpointDelay;
pub use error_handler::json_error_handler;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
