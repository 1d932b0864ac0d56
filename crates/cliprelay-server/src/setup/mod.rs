//! Application initialization.

pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;
use cliprelay_core::ServerConfig;

use crate::state::AppState;

/// Build the shared state and the router.
pub fn initialize_app(config: ServerConfig) -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(config));
    let router = routes::build_router(state.clone());
    (state, router)
}
