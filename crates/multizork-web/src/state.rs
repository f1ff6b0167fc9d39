//! Shared application state.

use std::sync::Arc;

use multizork_core::store::TranscriptStore;
use multizork_transcripts::render::SiteConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store each request opens its reader from.
    pub store: Arc<dyn TranscriptStore>,
    /// Site settings, fixed at startup.
    pub site: Arc<SiteConfig>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<dyn TranscriptStore>, site: SiteConfig) -> Self {
        Self {
            store,
            site: Arc::new(site),
        }
    }
}
