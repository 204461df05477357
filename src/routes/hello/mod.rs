mod handler;
mod model;

pub use handler::hello;
pub use model::{HelloResponse, greeting};
