use axum::extract::FromRef;

use crate::catalog::EventCatalog;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The catalog holds no mutable state (every operation reloads the
/// dataset), so it is shared without a lock.
pub type SharedCatalog = Arc<EventCatalog>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: SharedCatalog,
}

impl FromRef<ServerState> for SharedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
