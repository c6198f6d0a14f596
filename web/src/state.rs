//! Application state for axum handlers.

use crate::schema::{build_schema, TodoSchema};
use std::sync::Arc;
use todoql_core::TodoStore;

/// State shared across all HTTP handlers.
///
/// Holds the executable GraphQL schema, which in turn holds the shared
/// [`TodoStore`] handle. The gateway keeps no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Executable schema answering `/graphql` requests.
    pub schema: TodoSchema,
}

impl AppState {
    /// Creates state around a shared store handle.
    #[must_use]
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self {
            schema: build_schema(store),
        }
    }
}
