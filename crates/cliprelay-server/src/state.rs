//! Application state.
//!
//! One owned [`ClipboardStore`] shared by all handlers through
//! `Arc<AppState>`; never a process-wide global.

use cliprelay_core::ServerConfig;

use crate::store::ClipboardStore;

pub struct AppState {
    pub store: ClipboardStore,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: ClipboardStore::new(),
            config,
        }
    }
}
