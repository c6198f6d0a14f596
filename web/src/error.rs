//! Error bridging between the store and GraphQL responses.
//!
//! The gateway adds no error taxonomy of its own: store failures surface as
//! GraphQL request errors carrying the store's message, plus a stable
//! `code` extension so clients can dispatch without parsing message text.

use async_graphql::ErrorExtensions;
use std::fmt;
use todoql_core::TodoError;

/// A store failure on its way out of the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    /// Stable error code exposed in the GraphQL error extensions.
    code: &'static str,
    /// User-facing message, taken verbatim from the store error.
    message: String,
}

impl GatewayError {
    /// Converts into the GraphQL error attached to the response.
    #[must_use]
    pub fn into_graphql(self) -> async_graphql::Error {
        let code = self.code;
        async_graphql::Error::new(self.message).extend_with(|_, ext| ext.set("code", code))
    }
}

impl From<TodoError> for GatewayError {
    fn from(err: TodoError) -> Self {
        let message = err.to_string();
        match err {
            TodoError::NotFound(_) => Self {
                code: "NOT_FOUND",
                message,
            },
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}
