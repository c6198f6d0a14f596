//! GraphQL schema for the todo service.
//!
//! The wire contract, preserved verbatim for existing clients:
//!
//! ```text
//! type Todo {
//!   id: Int!
//!   title: String!
//!   desc: String!
//!   isCompleted: Boolean
//! }
//!
//! type Query {
//!   todos: [Todo!]!
//!   todo(id: ID!): Todo
//! }
//!
//! type Mutation {
//!   createTodo(title: String!, desc: String!): Todo!
//!   deleteTodo(id: Int!): Todo!
//!   completeTodo(id: Int!): Todo!
//! }
//! ```
//!
//! Every field maps 1:1 onto a [`TodoStore`] operation. Id arguments all
//! coerce to the same integer type before lookup; an unparseable `ID` on
//! the `todo` read behaves as no-match and yields `null`, since reads never
//! raise.

use crate::error::GatewayError;
use async_graphql::{EmptySubscription, Object, Schema, ID};
use std::sync::Arc;
use todoql_core::{Todo, TodoStore};

/// The executable schema served by the gateway.
pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around a shared store handle.
#[must_use]
pub fn build_schema(store: Arc<TodoStore>) -> TodoSchema {
    Schema::build(
        QueryRoot {
            store: Arc::clone(&store),
        },
        MutationRoot { store },
        EmptySubscription,
    )
    .finish()
}

/// GraphQL view of a [`Todo`] record.
pub struct TodoObject(Todo);

#[Object(name = "Todo")]
impl TodoObject {
    /// Store-assigned identifier.
    async fn id(&self) -> i64 {
        self.0.id
    }

    /// Title supplied at creation.
    async fn title(&self) -> &str {
        &self.0.title
    }

    /// Description supplied at creation.
    async fn desc(&self) -> &str {
        &self.0.desc
    }

    /// Completion flag. The wire contract declares this nullable even
    /// though every record carries a value.
    async fn is_completed(&self) -> Option<bool> {
        Some(self.0.is_completed)
    }
}

/// Read fields.
pub struct QueryRoot {
    store: Arc<TodoStore>,
}

#[Object]
impl QueryRoot {
    /// All todos, insertion order.
    async fn todos(&self) -> Vec<TodoObject> {
        self.store.list().await.into_iter().map(TodoObject).collect()
    }

    /// A single todo by id, or `null` when absent.
    ///
    /// The `ID` argument may arrive numeric or string-encoded; both coerce
    /// to the same integer the mutations use. An unparseable id matches
    /// nothing.
    async fn todo(&self, id: ID) -> Option<TodoObject> {
        let id = id.parse::<i64>().ok()?;
        self.store.get(id).await.map(TodoObject)
    }
}

/// Mutating fields.
pub struct MutationRoot {
    store: Arc<TodoStore>,
}

#[Object]
impl MutationRoot {
    /// Creates a todo and returns it.
    async fn create_todo(&self, title: String, desc: String) -> TodoObject {
        let todo = self.store.create(title, desc).await;
        tracing::info!(id = todo.id, "todo created");
        TodoObject(todo)
    }

    /// Deletes a todo by id and returns its pre-deletion snapshot.
    async fn delete_todo(&self, id: i64) -> async_graphql::Result<TodoObject> {
        let removed = self
            .store
            .delete(id)
            .await
            .map_err(|e| GatewayError::from(e).into_graphql())?;
        tracing::info!(id, "todo deleted");
        Ok(TodoObject(removed))
    }

    /// Marks a todo as completed and returns it.
    async fn complete_todo(&self, id: i64) -> async_graphql::Result<TodoObject> {
        let todo = self
            .store
            .complete(id)
            .await
            .map_err(|e| GatewayError::from(e).into_graphql())?;
        tracing::info!(id, "todo completed");
        Ok(TodoObject(todo))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use serde_json::json;

    fn fresh_schema() -> TodoSchema {
        build_schema(Arc::new(TodoStore::new()))
    }

    async fn exec(schema: &TodoSchema, doc: &str) -> serde_json::Value {
        let response = schema.execute(doc).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }

    #[test]
    fn test_sdl_preserves_wire_contract() {
        let sdl = fresh_schema().sdl();
        assert!(sdl.contains("todos: [Todo!]!"));
        assert!(sdl.contains("todo(id: ID!): Todo"));
        assert!(sdl.contains("createTodo(title: String!, desc: String!): Todo!"));
        assert!(sdl.contains("deleteTodo(id: Int!): Todo!"));
        assert!(sdl.contains("completeTodo(id: Int!): Todo!"));
        // Nullable by contract, not an oversight.
        assert!(sdl.contains("isCompleted: Boolean\n"));
        assert!(!sdl.contains("isCompleted: Boolean!"));
    }

    #[tokio::test]
    async fn test_create_todo_on_empty_store() {
        let schema = fresh_schema();
        let data = exec(
            &schema,
            r#"mutation { createTodo(title: "A", desc: "B") { id title desc isCompleted } }"#,
        )
        .await;
        assert_eq!(
            data["createTodo"],
            json!({"id": 1, "title": "A", "desc": "B", "isCompleted": false})
        );
    }

    #[tokio::test]
    async fn test_todos_returns_creation_order() {
        let schema = fresh_schema();
        exec(&schema, r#"mutation { createTodo(title: "first", desc: "") { id } }"#).await;
        exec(&schema, r#"mutation { createTodo(title: "second", desc: "") { id } }"#).await;

        let data = exec(&schema, "{ todos { id title } }").await;
        assert_eq!(
            data["todos"],
            json!([
                {"id": 1, "title": "first"},
                {"id": 2, "title": "second"},
            ])
        );
    }

    #[tokio::test]
    async fn test_todo_read_accepts_numeric_and_string_ids() {
        let schema = fresh_schema();
        exec(&schema, r#"mutation { createTodo(title: "A", desc: "B") { id } }"#).await;

        let numeric = exec(&schema, r#"{ todo(id: 1) { id } }"#).await;
        assert_eq!(numeric["todo"]["id"], json!(1));

        let string_encoded = exec(&schema, r#"{ todo(id: "1") { id } }"#).await;
        assert_eq!(string_encoded["todo"]["id"], json!(1));
    }

    #[tokio::test]
    async fn test_todo_read_missing_or_unparseable_id_is_null() {
        let schema = fresh_schema();

        let missing = exec(&schema, r#"{ todo(id: 99) { id } }"#).await;
        assert_eq!(missing["todo"], json!(null));

        let unparseable = exec(&schema, r#"{ todo(id: "nope") { id } }"#).await;
        assert_eq!(unparseable["todo"], json!(null));
    }

    #[tokio::test]
    async fn test_delete_todo_returns_snapshot_and_removes_record() {
        let schema = fresh_schema();
        exec(&schema, r#"mutation { createTodo(title: "A", desc: "a") { id } }"#).await;
        exec(&schema, r#"mutation { createTodo(title: "B", desc: "b") { id } }"#).await;

        let data = exec(
            &schema,
            r#"mutation { deleteTodo(id: 1) { id title desc isCompleted } }"#,
        )
        .await;
        assert_eq!(
            data["deleteTodo"],
            json!({"id": 1, "title": "A", "desc": "a", "isCompleted": false})
        );

        let remaining = exec(&schema, "{ todos { id } }").await;
        assert_eq!(remaining["todos"], json!([{"id": 2}]));
    }

    #[tokio::test]
    async fn test_delete_missing_todo_propagates_store_error() {
        let schema = fresh_schema();
        let response = schema
            .execute(r#"mutation { deleteTodo(id: 99) { id } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(error["message"], json!("Todo with id 99 not found"));
        assert_eq!(error["extensions"]["code"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_complete_missing_todo_is_a_typed_error_not_a_crash() {
        let schema = fresh_schema();
        let response = schema
            .execute(r#"mutation { completeTodo(id: 7) { id } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Todo with id 7 not found");
    }

    #[tokio::test]
    async fn test_complete_todo_is_idempotent() {
        let schema = fresh_schema();
        exec(&schema, r#"mutation { createTodo(title: "A", desc: "B") { id } }"#).await;

        let first = exec(&schema, r#"mutation { completeTodo(id: 1) { isCompleted } }"#).await;
        assert_eq!(first["completeTodo"]["isCompleted"], json!(true));

        let second = exec(&schema, r#"mutation { completeTodo(id: 1) { isCompleted } }"#).await;
        assert_eq!(second["completeTodo"]["isCompleted"], json!(true));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_deletion() {
        let schema = fresh_schema();
        exec(&schema, r#"mutation { createTodo(title: "A", desc: "") { id } }"#).await;
        exec(&schema, r#"mutation { createTodo(title: "B", desc: "") { id } }"#).await;
        exec(&schema, r#"mutation { deleteTodo(id: 1) { id } }"#).await;

        let data = exec(&schema, r#"mutation { createTodo(title: "C", desc: "") { id } }"#).await;
        assert_eq!(data["createTodo"]["id"], json!(3));
    }
}
