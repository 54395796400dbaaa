//! Application state for the HTTP server.

use crate::db::repository::FullRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for data access
    pub repository: Arc<dyn FullRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self { repository }
    }
}
