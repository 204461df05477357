use std::sync::Arc;

use cache::KeyValueStore;
use config::Config;
use identity::IdentityProvider;

pub mod cache;
pub mod config;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;

pub use router::create_router;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub identity: Arc<dyn IdentityProvider>,
}
