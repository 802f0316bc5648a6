pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;

use std::sync::Arc;

use kpdf_service::config::Config;
use kpdf_service::CatalogService;

pub use error::ApiError;
use session::{InMemorySessionStore, SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub service: CatalogService,
    pub sessions: Arc<dyn SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, service: CatalogService) -> Self {
        let sessions = Arc::new(InMemorySessionStore::new(config.session_ttl));
        Self::with_sessions(config, service, sessions)
    }

    pub fn with_sessions(
        config: Config,
        service: CatalogService,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            service,
            sessions,
            config: Arc::new(config),
        }
    }
}
