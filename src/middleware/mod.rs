mod auth;
mod error_handler;

pub use auth::profile_middleware;
pub use error_handler::log_errors;
