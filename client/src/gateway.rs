//! HTTP client for the gateway's GraphQL endpoint.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use todoql_core::Todo;

/// Query documents, one per gateway operation. Each selects the full
/// record so the cache can mirror every field from the response.
const GET_TODOS: &str = "query getTodos { todos { id title desc isCompleted } }";
const GET_TODO: &str =
    "query getTodo($id: ID!) { todo(id: $id) { id title desc isCompleted } }";
const CREATE_TODO: &str = "mutation createTodo($title: String!, $desc: String!) { \
    createTodo(title: $title, desc: $desc) { id title desc isCompleted } }";
const DELETE_TODO: &str =
    "mutation deleteTodo($id: Int!) { deleteTodo(id: $id) { id title desc isCompleted } }";
const COMPLETE_TODO: &str =
    "mutation completeTodo($id: Int!) { completeTodo(id: $id) { id title desc isCompleted } }";

/// Errors surfaced by [`GatewayClient`] calls.
///
/// There is no retry policy: every operation is a single best-effort
/// attempt, and the caller re-issues requests manually.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a GraphQL response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a request error; the message is whatever
    /// the server raised.
    #[error("{0}")]
    Gateway(String),

    /// The response envelope did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope carried neither data nor errors.
    #[error("response carried no data")]
    MissingData,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<WireError>,
}

/// A single entry in the envelope's `errors` array.
#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
}

/// Client for the gateway's single GraphQL endpoint.
///
/// One method per documented operation. Pair with
/// [`TodoCache`](crate::TodoCache) to keep a local mirror updated from the
/// mutation responses.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    /// Creates a client for the given endpoint URL
    /// (for example `http://localhost:4000/graphql`).
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches all todos.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a gateway error, or a
    /// malformed response.
    pub async fn todos(&self) -> Result<Vec<Todo>, ClientError> {
        let mut data = self.execute(GET_TODOS, json!({})).await?;
        Ok(serde_json::from_value(data["todos"].take())?)
    }

    /// Fetches a single todo by id; `None` when absent.
    ///
    /// The id travels as a GraphQL `ID` (string-encoded), exercising the
    /// gateway's id coercion.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a gateway error, or a
    /// malformed response.
    pub async fn todo(&self, id: i64) -> Result<Option<Todo>, ClientError> {
        let mut data = self
            .execute(GET_TODO, json!({ "id": id.to_string() }))
            .await?;
        Ok(serde_json::from_value(data["todo"].take())?)
    }

    /// Creates a todo and returns the gateway's record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a gateway error, or a
    /// malformed response.
    pub async fn create_todo(&self, title: &str, desc: &str) -> Result<Todo, ClientError> {
        let mut data = self
            .execute(CREATE_TODO, json!({ "title": title, "desc": desc }))
            .await?;
        Ok(serde_json::from_value(data["createTodo"].take())?)
    }

    /// Deletes a todo and returns its pre-deletion snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Gateway`] when no record matches, or any
    /// transport/decode failure.
    pub async fn delete_todo(&self, id: i64) -> Result<Todo, ClientError> {
        let mut data = self.execute(DELETE_TODO, json!({ "id": id })).await?;
        Ok(serde_json::from_value(data["deleteTodo"].take())?)
    }

    /// Marks a todo as completed and returns the mutated record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Gateway`] when no record matches, or any
    /// transport/decode failure.
    pub async fn complete_todo(&self, id: i64) -> Result<Todo, ClientError> {
        let mut data = self.execute(COMPLETE_TODO, json!({ "id": id })).await?;
        Ok(serde_json::from_value(data["completeTodo"].take())?)
    }

    /// Posts one `{ query, variables }` document and unwraps the envelope.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        let envelope: Envelope = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = envelope.errors.into_iter().next() {
            tracing::debug!(message = %error.message, "gateway returned an error");
            return Err(ClientError::Gateway(error.message));
        }

        envelope.data.ok_or(ClientError::MissingData)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_displays_server_message() {
        let err = ClientError::Gateway("Todo with id 9 not found".to_string());
        assert_eq!(err.to_string(), "Todo with id 9 not found");
    }

    #[test]
    fn test_envelope_errors_default_to_empty() {
        let envelope: Envelope = serde_json::from_str(r#"{"data":{"todos":[]}}"#).unwrap();
        assert!(envelope.errors.is_empty());
        assert!(envelope.data.is_some());
    }

    #[test]
    fn test_envelope_decodes_errors() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"data":null,"errors":[{"message":"boom"}]}"#).unwrap();
        assert_eq!(envelope.errors[0].message, "boom");
    }
}
