use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use routegraph::Session;
use routegraph_core::GraphConfig;

/// Shared handle to the single map session served by this process
#[derive(Debug, Clone)]
pub struct AppState {
    session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(config))),
        }
    }

    /// Locks the session. Handlers never hold the guard across an `.await`.
    pub(crate) fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
