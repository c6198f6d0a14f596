//! Error types for store operations.

use thiserror::Error;

/// Errors raised by [`crate::TodoStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No record with the requested id exists in the collection.
    ///
    /// Raised by `delete` and `complete`. Reads (`get`) signal absence with
    /// `None` instead of an error.
    #[error("Todo with id {0} not found")]
    NotFound(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TodoError::NotFound(42);
        assert_eq!(err.to_string(), "Todo with id 42 not found");
    }
}
