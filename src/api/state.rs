//! Shared application state for the HTTP API.

use std::sync::Arc;

use crate::store::Database;

/// Shared application state.
///
/// The only process-wide resource is the document store; each handler
/// reaches it through this state.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Database>,
}

impl AppState {
    /// Creates a new application state over an opened database.
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Returns a reference to the document store.
    pub fn db(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
