pub mod error;
pub mod problem;

pub use error::{AppError, Result};
pub use problem::ProblemJson;
