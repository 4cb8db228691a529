//! Application state for the web layer.

use std::sync::Arc;

use crate::assistant::ChatClient;
use crate::ocm::OcmClient;
use crate::session::SessionStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Directory-service client
    pub ocm: Arc<OcmClient>,

    /// Chat-completion client
    pub assistant: Arc<ChatClient>,

    /// Live sessions
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(ocm: OcmClient, assistant: ChatClient, sessions: SessionStore) -> Self {
        Self {
            ocm: Arc::new(ocm),
            assistant: Arc::new(assistant),
            sessions,
        }
    }
}
