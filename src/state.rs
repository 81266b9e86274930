use crate::api::OrderApi;
use crate::auth::SessionStore;
use crate::config::AppConfig;
use std::sync::Arc;

/// Everything a request handler needs, shared by all astra workers.
pub struct AppState {
    pub config: AppConfig,
    pub api: Arc<dyn OrderApi>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AppConfig, api: Arc<dyn OrderApi>) -> Self {
        let sessions = SessionStore::new(config.session_ttl, config.cache_ttl);
        Self {
            config,
            api,
            sessions,
        }
    }
}
